//! Error handling for the capacitor.
//! One error enum per concern, `thiserror` only.

pub mod capacitor_error;
pub mod config_error;
pub mod error_code;

pub use capacitor_error::{CapacitorError, CapacitorResult};
pub use config_error::ConfigError;
pub use error_code::CapacitorErrorCode;
