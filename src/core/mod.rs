// ============================================================================
// spark-classes - Core Module
// Fundamental types, constants, errors and config for class resolution
// ============================================================================

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use config::ClassConfig;
pub use constants::*;
pub use error::{ClassError, Result};
pub use types::{ClassMap, ClassPayload};
