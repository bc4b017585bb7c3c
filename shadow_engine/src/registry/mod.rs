mod slot;

pub use slot::*;
