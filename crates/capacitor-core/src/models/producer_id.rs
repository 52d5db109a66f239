use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to a producer when it connects to an aggregator.
///
/// Ids are handed out in connection order and are never reused by the
/// aggregator that issued them, even across a `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProducerId(pub u64);

impl ProducerId {
    /// The raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ProducerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "producer-{}", self.0)
    }
}

impl From<u64> for ProducerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
