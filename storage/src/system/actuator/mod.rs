//! Actuators: the polymorphic units that validate and apply operations.
//!
//! Every operation kind shares the two-phase contract: `validate` performs
//! only reads against a snapshot, `execute` applies the mutation and
//! populates the caller's result. An operation moves Constructed ->
//! Validated -> Executed(Success|Failed); `execute` is never invoked without
//! a preceding successful `validate`, no phase is skipped, and Executed is
//! terminal.
//!
//! Dispatch is a single exhaustive match on the operation tag in
//! [`OperationActuator::new`], so an actuator/operation mismatch cannot be
//! constructed.

mod error;
mod freeze_balance;
mod register_witness;
mod transfer;
mod unfreeze_balance;

pub use error::{ActuatorError, ExecutionError, ValidationError};
pub use freeze_balance::FreezeBalanceActuator;
pub use register_witness::RegisterWitnessActuator;
pub use transfer::TransferActuator;
pub use unfreeze_balance::UnfreezeBalanceActuator;

use meridian_types::{Address, BlockTime, Key, Operation, OperationResult, StoredValue};

use crate::{
    global_state::{error::Error as GlobalStateError, state::StateReader},
    tracking_copy::TrackingCopy,
};

/// The unit implementing `validate`/`execute` for one operation variant.
pub trait Actuator {
    /// Checks the operation against current state, performing only reads.
    fn validate<R>(
        &self,
        state: &mut TrackingCopy<R>,
        block_time: BlockTime,
    ) -> Result<(), ActuatorError>
    where
        R: StateReader<Key, StoredValue, Error = GlobalStateError>;

    /// Applies the operation and populates `result`.
    ///
    /// Preconditions: a prior successful `validate` against the same or a
    /// compatible snapshot; no re-validation happens here. On failure the
    /// result is still populated as `Failed` with the variant fee, and the
    /// caller must discard this scope's effects.
    fn execute<R>(
        &self,
        state: &mut TrackingCopy<R>,
        block_time: BlockTime,
        result: &mut OperationResult,
    ) -> Result<(), ExecutionError>
    where
        R: StateReader<Key, StoredValue, Error = GlobalStateError>;

    /// The variant-specific fee. Pure; no side effects.
    fn fee(&self) -> i64;

    /// The address of the requesting account. Pure; used by the scheduler
    /// for conflict and ordering decisions.
    fn owner_address(&self) -> Address;
}

/// The actuator matching an operation's declared type.
#[derive(Debug)]
pub enum OperationActuator<'a> {
    /// Actuator for [`Operation::RegisterWitness`].
    RegisterWitness(RegisterWitnessActuator<'a>),
    /// Actuator for [`Operation::FreezeBalance`].
    FreezeBalance(FreezeBalanceActuator<'a>),
    /// Actuator for [`Operation::UnfreezeBalance`].
    UnfreezeBalance(UnfreezeBalanceActuator<'a>),
    /// Actuator for [`Operation::Transfer`].
    Transfer(TransferActuator<'a>),
}

impl<'a> OperationActuator<'a> {
    /// Dispatches `operation` to the actuator for its variant.
    pub fn new(operation: &'a Operation) -> Self {
        match operation {
            Operation::RegisterWitness(payload) => {
                OperationActuator::RegisterWitness(RegisterWitnessActuator::new(payload))
            }
            Operation::FreezeBalance(payload) => {
                OperationActuator::FreezeBalance(FreezeBalanceActuator::new(payload))
            }
            Operation::UnfreezeBalance(payload) => {
                OperationActuator::UnfreezeBalance(UnfreezeBalanceActuator::new(payload))
            }
            Operation::Transfer(payload) => {
                OperationActuator::Transfer(TransferActuator::new(payload))
            }
        }
    }
}

impl Actuator for OperationActuator<'_> {
    fn validate<R>(
        &self,
        state: &mut TrackingCopy<R>,
        block_time: BlockTime,
    ) -> Result<(), ActuatorError>
    where
        R: StateReader<Key, StoredValue, Error = GlobalStateError>,
    {
        match self {
            OperationActuator::RegisterWitness(actuator) => actuator.validate(state, block_time),
            OperationActuator::FreezeBalance(actuator) => actuator.validate(state, block_time),
            OperationActuator::UnfreezeBalance(actuator) => actuator.validate(state, block_time),
            OperationActuator::Transfer(actuator) => actuator.validate(state, block_time),
        }
    }

    fn execute<R>(
        &self,
        state: &mut TrackingCopy<R>,
        block_time: BlockTime,
        result: &mut OperationResult,
    ) -> Result<(), ExecutionError>
    where
        R: StateReader<Key, StoredValue, Error = GlobalStateError>,
    {
        match self {
            OperationActuator::RegisterWitness(actuator) => {
                actuator.execute(state, block_time, result)
            }
            OperationActuator::FreezeBalance(actuator) => {
                actuator.execute(state, block_time, result)
            }
            OperationActuator::UnfreezeBalance(actuator) => {
                actuator.execute(state, block_time, result)
            }
            OperationActuator::Transfer(actuator) => actuator.execute(state, block_time, result),
        }
    }

    fn fee(&self) -> i64 {
        match self {
            OperationActuator::RegisterWitness(actuator) => actuator.fee(),
            OperationActuator::FreezeBalance(actuator) => actuator.fee(),
            OperationActuator::UnfreezeBalance(actuator) => actuator.fee(),
            OperationActuator::Transfer(actuator) => actuator.fee(),
        }
    }

    fn owner_address(&self) -> Address {
        match self {
            OperationActuator::RegisterWitness(actuator) => actuator.owner_address(),
            OperationActuator::FreezeBalance(actuator) => actuator.owner_address(),
            OperationActuator::UnfreezeBalance(actuator) => actuator.owner_address(),
            OperationActuator::Transfer(actuator) => actuator.owner_address(),
        }
    }
}
