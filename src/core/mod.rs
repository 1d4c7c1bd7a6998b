// Core module containing the field collection, constants and configuration
pub mod config;
pub mod constants;
pub mod fields;

// Re-export commonly used types
pub use config::{CodecConfig, ConfigError};
pub use constants::*;
pub use fields::{AppField, AppFields, FieldValue};
