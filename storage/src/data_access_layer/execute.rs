use tracing::{debug, warn};

use meridian_types::{
    execution::Effects, BlockTime, Key, Operation, OperationResult, StoredValue,
};

use crate::{
    global_state::{error::Error as GlobalStateError, state::StateReader},
    system::actuator::{
        Actuator, ActuatorError, ExecutionError, OperationActuator, ValidationError,
    },
    tracking_copy::{TrackingCopy, TrackingCopyError},
};

/// A batch of operations to validate and execute sequentially at a given
/// block time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteRequest {
    block_time: BlockTime,
    operations: Vec<Operation>,
}

impl ExecuteRequest {
    /// Creates a new request object.
    pub fn new(block_time: BlockTime, operations: Vec<Operation>) -> Self {
        ExecuteRequest {
            block_time,
            operations,
        }
    }

    /// The block time the batch executes at.
    pub fn block_time(&self) -> BlockTime {
        self.block_time
    }

    /// The operations, in execution order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

/// The outcome of one operation within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// Rejected during validation; nothing was mutated and no result was
    /// recorded.
    Rejected(ValidationError),
    /// Validated and executed.
    Executed {
        /// The recorded result: status and fee.
        result: OperationResult,
        /// The execute-time failure, when the recorded status is `Failed`.
        error: Option<ExecutionError>,
    },
}

/// The result of executing a batch.
#[derive(Debug, Clone)]
pub enum ExecuteResult {
    /// Every operation was processed and the batch effects are committed.
    Success {
        /// Per-operation outcomes, in execution order.
        outcomes: Vec<OperationOutcome>,
        /// The committed effects.
        effects: Effects,
    },
    /// An internal state fault aborted the batch; nothing was committed.
    Failure(TrackingCopyError),
}

impl ExecuteResult {
    /// Returns `true` if the batch ran to completion.
    pub fn is_success(&self) -> bool {
        matches!(self, ExecuteResult::Success { .. })
    }
}

/// Validates and, if accepted, executes one operation against the batch
/// tracking copy.
///
/// Validation reads go through `tracking_copy`, so they observe the executes
/// of all earlier operations in the batch. The execute itself runs in a fork
/// whose effects are applied only on success: a failed execute leaves no
/// partial mutation, only an `Executed` outcome with a `Failed` result.
///
/// An internal state fault is returned as the error; user-causable
/// rejections and execute-time failures are outcomes, not errors.
pub fn execute_operation<R>(
    tracking_copy: &mut TrackingCopy<R>,
    block_time: BlockTime,
    operation: &Operation,
) -> Result<OperationOutcome, TrackingCopyError>
where
    R: StateReader<Key, StoredValue, Error = GlobalStateError>,
{
    let actuator = OperationActuator::new(operation);
    if let Err(failure) = actuator.validate(tracking_copy, block_time) {
        match failure {
            ActuatorError::Validation(reason) => {
                debug!(tag = %operation.tag(), %reason, "operation rejected");
                return Ok(OperationOutcome::Rejected(reason));
            }
            ActuatorError::State(fault) => return Err(fault),
        }
    }

    let mut result = OperationResult::new();
    let mut fork = tracking_copy.fork();
    match actuator.execute(&mut fork, block_time, &mut result) {
        Ok(()) => {
            let effects = fork.into_effects();
            tracking_copy.apply(effects);
            Ok(OperationOutcome::Executed {
                result,
                error: None,
            })
        }
        Err(failure) => {
            warn!(tag = %operation.tag(), %failure, "operation failed at execute time");
            Ok(OperationOutcome::Executed {
                result,
                error: Some(failure),
            })
        }
    }
}
