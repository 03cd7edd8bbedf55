use meridian_types::{Address, BlockTime, Key, OperationResult, StoredValue, Transfer};

use crate::{
    global_state::{error::Error as GlobalStateError, state::StateReader},
    system::{
        actuator::{Actuator, ActuatorError, ExecutionError, ValidationError},
        balance::BalanceLedger,
    },
    tracking_copy::{TrackingCopy, TrackingCopyExt},
};

/// Actuator for [`Operation::Transfer`](meridian_types::Operation): moves
/// value from the owner to another account. A transfer to the sink burns the
/// amount.
#[derive(Debug)]
pub struct TransferActuator<'a> {
    payload: &'a Transfer,
}

impl<'a> TransferActuator<'a> {
    /// Constructs the actuator for one transfer payload.
    pub fn new(payload: &'a Transfer) -> Self {
        TransferActuator { payload }
    }
}

impl Actuator for TransferActuator<'_> {
    fn validate<R>(
        &self,
        state: &mut TrackingCopy<R>,
        _block_time: BlockTime,
    ) -> Result<(), ActuatorError>
    where
        R: StateReader<Key, StoredValue, Error = GlobalStateError>,
    {
        let owner = self.payload.owner();
        let target = self.payload.to();
        if !owner.is_well_formed() {
            return Err(ValidationError::InvalidAddress(owner).into());
        }
        if !target.is_well_formed() {
            return Err(ValidationError::InvalidAddress(target).into());
        }
        if owner.is_sink() {
            return Err(ValidationError::OwnerIsSink.into());
        }
        if owner == target {
            return Err(ValidationError::SelfTransfer.into());
        }
        let amount = self.payload.amount();
        if amount <= 0 {
            return Err(ValidationError::InvalidAmount(amount).into());
        }
        let account = state
            .get_account(owner)?
            .ok_or(ValidationError::AccountNotFound(owner))?;
        if account.balance() < amount {
            return Err(ValidationError::InsufficientBalance {
                balance: account.balance(),
                required: amount,
            }
            .into());
        }
        Ok(())
    }

    fn execute<R>(
        &self,
        state: &mut TrackingCopy<R>,
        _block_time: BlockTime,
        result: &mut OperationResult,
    ) -> Result<(), ExecutionError>
    where
        R: StateReader<Key, StoredValue, Error = GlobalStateError>,
    {
        let fee = self.fee();
        match state.transfer(self.payload.owner(), self.payload.to(), self.payload.amount()) {
            Ok(()) => {
                result.set_success(fee);
                Ok(())
            }
            Err(failure) => {
                result.set_failure(fee);
                Err(ExecutionError::Transfer(failure))
            }
        }
    }

    fn fee(&self) -> i64 {
        0
    }

    fn owner_address(&self) -> Address {
        self.payload.owner()
    }
}
