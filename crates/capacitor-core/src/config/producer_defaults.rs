//! Defaults applied to producers that connect without overrides.
//!
//! # Examples
//!
//! ```
//! use capacitor_core::config::{BelowOffsetPolicy, ProducerDefaults};
//!
//! let defaults = ProducerDefaults::default();
//! assert_eq!(defaults.frame_offset, 0);
//! assert_eq!(defaults.below_offset, BelowOffsetPolicy::Reject);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FRAME_OFFSET;

/// What a commit log does with a frame that lies below its frame offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BelowOffsetPolicy {
    /// Drop the commit with no state change.
    #[default]
    Reject,
    /// Treat the commit as targeting internal slot 0.
    Clamp,
}

/// Producer-level defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProducerDefaults {
    /// External frame that maps to internal slot 0. Default: 0.
    pub frame_offset: u64,
    /// Handling of commits below the frame offset. Default: reject.
    pub below_offset: BelowOffsetPolicy,
}

impl Default for ProducerDefaults {
    fn default() -> Self {
        Self {
            frame_offset: DEFAULT_FRAME_OFFSET,
            below_offset: BelowOffsetPolicy::Reject,
        }
    }
}
