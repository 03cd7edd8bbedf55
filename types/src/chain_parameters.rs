use datasize::DataSize;
use serde::{Deserialize, Serialize};

/// Default price of witness registration, burned to the sink.
pub const DEFAULT_WITNESS_REGISTRATION_COST: i64 = 9_999_000_000;

/// Default smallest amount that may be frozen in one operation.
pub const DEFAULT_MIN_FREEZE_AMOUNT: i64 = 1_000_000;

/// Default lower bound on a requested freeze duration: three days.
pub const DEFAULT_MIN_FREEZE_DURATION_MILLIS: u64 = 3 * 24 * 60 * 60 * 1_000;

/// Default upper bound on a requested freeze duration: thirty days.
pub const DEFAULT_MAX_FREEZE_DURATION_MILLIS: u64 = 30 * 24 * 60 * 60 * 1_000;

/// Chain-wide tunable parameters, stored as a singleton record under
/// [`Key::ChainParameters`](crate::Key::ChainParameters).
///
/// Read-only from the execution pipeline's perspective; written at genesis.
#[derive(Clone, Copy, Debug, DataSize, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParameters {
    witness_registration_cost: i64,
    min_freeze_amount: i64,
    min_freeze_duration_millis: u64,
    max_freeze_duration_millis: u64,
}

impl ChainParameters {
    /// Constructs new `ChainParameters`.
    pub const fn new(
        witness_registration_cost: i64,
        min_freeze_amount: i64,
        min_freeze_duration_millis: u64,
        max_freeze_duration_millis: u64,
    ) -> Self {
        ChainParameters {
            witness_registration_cost,
            min_freeze_amount,
            min_freeze_duration_millis,
            max_freeze_duration_millis,
        }
    }

    /// The price to become a witness.
    pub fn witness_registration_cost(&self) -> i64 {
        self.witness_registration_cost
    }

    /// The smallest amount that may be frozen.
    pub fn min_freeze_amount(&self) -> i64 {
        self.min_freeze_amount
    }

    /// The lower bound on a requested freeze duration, in milliseconds.
    pub fn min_freeze_duration_millis(&self) -> u64 {
        self.min_freeze_duration_millis
    }

    /// The upper bound on a requested freeze duration, in milliseconds.
    pub fn max_freeze_duration_millis(&self) -> u64 {
        self.max_freeze_duration_millis
    }
}

impl Default for ChainParameters {
    fn default() -> Self {
        ChainParameters::new(
            DEFAULT_WITNESS_REGISTRATION_COST,
            DEFAULT_MIN_FREEZE_AMOUNT,
            DEFAULT_MIN_FREEZE_DURATION_MILLIS,
            DEFAULT_MAX_FREEZE_DURATION_MILLIS,
        )
    }
}
