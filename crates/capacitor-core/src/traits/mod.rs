//! Pluggable policies injected into commit logs and aggregators.

pub mod correction;
pub mod interpolator;

pub use correction::Comparator;
pub use interpolator::{HoldPrevious, Interpolator, NoInterpolation};
