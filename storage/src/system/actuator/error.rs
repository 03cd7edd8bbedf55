use thiserror::Error;

use meridian_types::{Address, BlockTime};

use crate::{system::balance::TransferError, tracking_copy::TrackingCopyError};

/// A user-causable reason an operation was rejected during validation.
///
/// Rejection happens before any mutation; the store is untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// The given address does not pass address-format validation.
    #[error("address {0} is not well-formed")]
    InvalidAddress(Address),
    /// The sink account requested an operation that spends.
    #[error("the sink account cannot spend")]
    OwnerIsSink,
    /// No account record exists for the given address.
    #[error("account {0} does not exist")]
    AccountNotFound(Address),
    /// The owner balance is below the fixed witness minimum.
    #[error("balance {balance} is below the witness minimum {minimum}")]
    BalanceBelowMinimum {
        /// The balance held.
        balance: i64,
        /// The required minimum.
        minimum: i64,
    },
    /// A witness record already exists for the owner.
    #[error("witness {0} already exists")]
    WitnessAlreadyExists(Address),
    /// The owner balance cannot cover the required amount.
    #[error("balance {balance} is insufficient to cover {required}")]
    InsufficientBalance {
        /// The balance held.
        balance: i64,
        /// The amount required.
        required: i64,
    },
    /// The witness URL is empty or too long.
    #[error("witness url length {0} is out of range")]
    InvalidUrl(usize),
    /// The given amount is zero or negative.
    #[error("amount {0} is not positive")]
    InvalidAmount(i64),
    /// The freeze amount is below the chain minimum.
    #[error("freeze amount {amount} is below the minimum {minimum}")]
    FreezeAmountBelowMinimum {
        /// The requested amount.
        amount: i64,
        /// The chain minimum.
        minimum: i64,
    },
    /// The requested freeze duration is outside the chain bounds.
    #[error("freeze duration {duration_millis}ms is outside [{min_millis}ms, {max_millis}ms]")]
    FreezeDurationOutOfRange {
        /// The requested duration.
        duration_millis: u64,
        /// The chain lower bound.
        min_millis: u64,
        /// The chain upper bound.
        max_millis: u64,
    },
    /// The account has no frozen balance to release.
    #[error("nothing is frozen for account {0}")]
    NothingFrozen(Address),
    /// The frozen balance has not yet expired.
    #[error("frozen balance is not due until {expires_at}, current block time {block_time}")]
    FreezeNotExpired {
        /// When the frozen balance expires.
        expires_at: BlockTime,
        /// The block time of the attempt.
        block_time: BlockTime,
    },
    /// Source and target of a transfer are the same account.
    #[error("cannot transfer to self")]
    SelfTransfer,
}

/// An execute-time failure.
///
/// Rare given prior validation: either the state changed between validate
/// and execute, or the underlying storage faulted. The actuator records a
/// `Failed` result before surfacing one of these, and the caller drops the
/// execution scope so no partial mutation is observable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExecutionError {
    /// The balance transfer failed.
    #[error("transfer failed: {0}")]
    Transfer(#[from] TransferError),
    /// The owner balance no longer covers the required amount.
    #[error("balance {balance} is insufficient to cover {required}")]
    InsufficientBalance {
        /// The balance held.
        balance: i64,
        /// The amount required.
        required: i64,
    },
    /// The frozen balance is no longer releasable.
    #[error("no releasable frozen balance for account {0}")]
    NothingToRelease(Address),
    /// An internal state fault.
    #[error("state fault: {0}")]
    State(#[from] TrackingCopyError),
}

/// Failure channel of `validate`: one `Result`, two distinguishable kinds.
///
/// User-causable rejections and internal faults are never folded into each
/// other; schedulers reject on the former and abort on the latter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActuatorError {
    /// The operation was rejected; the requester can correct and resubmit.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// An internal state fault; not caused by the operation.
    #[error("state fault: {0}")]
    State(#[from] TrackingCopyError),
}
