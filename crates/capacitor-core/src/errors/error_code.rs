//! Stable error codes for embedders that cross a language boundary.

/// Every error enum implements this to provide a structured code string.
pub trait CapacitorErrorCode {
    /// Returns the code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const FRAME_BELOW_OFFSET: &str = "FRAME_BELOW_OFFSET";
pub const FRAME_OUT_OF_RANGE: &str = "FRAME_OUT_OF_RANGE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
