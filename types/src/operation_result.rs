use core::fmt;

use datasize::DataSize;
use serde::{Deserialize, Serialize};

/// The status of an executed operation.
#[derive(
    Clone, Copy, Debug, DataSize, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum OperationStatus {
    /// The operation applied its effects.
    Success = 0,
    /// The operation failed at execute time; no effects were applied.
    Failed = 1,
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OperationStatus::Success => write!(formatter, "success"),
            OperationStatus::Failed => write!(formatter, "failed"),
        }
    }
}

/// The result of executing one operation: a status and the fee charged.
///
/// Created empty by the caller, passed by mutable reference into `execute`,
/// and read afterward. An empty result already reads as a well-formed
/// failure, so an execute that errors before populating it never leaves the
/// caller with an unset result.
#[derive(Clone, Copy, Debug, DataSize, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    status: OperationStatus,
    fee: i64,
}

impl OperationResult {
    /// Constructs a new, empty `OperationResult`.
    pub const fn new() -> Self {
        OperationResult {
            status: OperationStatus::Failed,
            fee: 0,
        }
    }

    /// Records a successful execution and the fee charged.
    pub fn set_success(&mut self, fee: i64) {
        self.status = OperationStatus::Success;
        self.fee = fee;
    }

    /// Records a failed execution and the fee charged.
    pub fn set_failure(&mut self, fee: i64) {
        self.status = OperationStatus::Failed;
        self.fee = fee;
    }

    /// The recorded status.
    pub fn status(&self) -> OperationStatus {
        self.status
    }

    /// Returns `true` if the recorded status is `Success`.
    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }

    /// The fee charged.
    pub fn fee(&self) -> i64 {
        self.fee
    }
}

impl Default for OperationResult {
    fn default() -> Self {
        OperationResult::new()
    }
}
