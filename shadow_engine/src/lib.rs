// Lets `#[derive(ParamSchema)]` expand to `::shadow_engine::..` paths inside this crate.
extern crate self as shadow_engine;

mod color;
mod engine;
mod geometry;
mod paint;
mod params;
mod registry;
mod shadow;

pub mod error;
pub mod history;
pub mod traits;

pub use color::*;
pub use engine::*;
pub use geometry::*;
pub use paint::*;
pub use params::*;
pub use registry::*;
pub use shadow::*;

pub use param_schema_derive::ParamSchema;
pub use traits::Schema;
