//! Configuration for the capacitor.
//! TOML-based; every section falls back to compiled defaults.

pub mod capacitor_config;
pub mod observability_config;
pub mod producer_defaults;

pub use capacitor_config::CapacitorConfig;
pub use observability_config::ObservabilityConfig;
pub use producer_defaults::{BelowOffsetPolicy, ProducerDefaults};
