//! # capacitor-core
//!
//! Foundation crate for the frame capacitor.
//! Defines frame and producer models, the correction and interpolation
//! traits, errors, config, tracing setup, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{BelowOffsetPolicy, CapacitorConfig};
pub use errors::{CapacitorError, CapacitorResult};
pub use models::{Frame, ProducerId};
pub use traits::{Comparator, Interpolator, NoInterpolation};
