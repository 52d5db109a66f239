//! Errors surfaced by fallible capacitor operations.

use super::error_code::{self, CapacitorErrorCode};
use super::ConfigError;

/// Errors from commit-log and aggregator operations.
///
/// The core operations are total; only the `try_` variants and
/// configuration loading return these.
#[derive(Debug, thiserror::Error)]
pub enum CapacitorError {
    #[error("frame {frame} is below the producer's frame offset {frame_offset}")]
    FrameBelowOffset { frame: u64, frame_offset: u64 },

    #[error("frame {frame} is too far past frame offset {frame_offset} to address")]
    FrameOutOfRange { frame: u64, frame_offset: u64 },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience alias used across the workspace.
pub type CapacitorResult<T> = Result<T, CapacitorError>;

impl CapacitorErrorCode for CapacitorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FrameBelowOffset { .. } => error_code::FRAME_BELOW_OFFSET,
            Self::FrameOutOfRange { .. } => error_code::FRAME_OUT_OF_RANGE,
            Self::Config(e) => e.error_code(),
        }
    }
}
