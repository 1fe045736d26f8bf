//! Configuration model for argstone.
//!
//! This module defines the Config struct that represents an optional
//! `argstone.yaml` file. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), defaults for every field, and validation of values
//! including any prompt template overrides.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::{QueryParam, TabMode};
