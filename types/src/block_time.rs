use core::fmt;

use datasize::DataSize;
use serde::{Deserialize, Serialize};

/// A newtype wrapping a [`u64`] which represents the block time in
/// milliseconds since the epoch.
#[derive(
    Clone,
    Copy,
    Default,
    Debug,
    DataSize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct BlockTime(u64);

impl BlockTime {
    /// Constructs a `BlockTime`.
    pub const fn new(value: u64) -> Self {
        BlockTime(value)
    }

    /// Returns the inner value.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Saturating addition of a duration in milliseconds.
    #[must_use]
    pub fn saturating_add(self, millis: u64) -> Self {
        BlockTime(self.0.saturating_add(millis))
    }

    /// Saturating subtraction. Computes `self - other`, saturating at `0`
    /// instead of overflowing.
    #[must_use]
    pub fn saturating_sub(self, other: BlockTime) -> Self {
        BlockTime(self.0.saturating_sub(other.0))
    }
}

impl From<BlockTime> for u64 {
    fn from(block_time: BlockTime) -> Self {
        block_time.0
    }
}

impl fmt::Display for BlockTime {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
