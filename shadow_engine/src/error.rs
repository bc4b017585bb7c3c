use thiserror::Error;

use crate::Section;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("No parameter at index {index} in section {section}")]
    NoParam { section: Section, index: usize },

    #[error("Parameter {name} cannot be set to non-finite value {value}")]
    NotFinite { name: String, value: f32 },
}
