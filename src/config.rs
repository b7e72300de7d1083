//! configuration loading and validation
pub mod options;
pub mod validate;

pub use options::Settings;
