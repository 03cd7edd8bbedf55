use tracing::debug;

use meridian_types::{Address, BlockTime, FreezeBalance, Key, OperationResult, StoredValue};

use crate::{
    global_state::{error::Error as GlobalStateError, state::StateReader},
    system::actuator::{Actuator, ActuatorError, ExecutionError, ValidationError},
    tracking_copy::{TrackingCopy, TrackingCopyError, TrackingCopyExt},
};

/// Actuator for [`Operation::FreezeBalance`](meridian_types::Operation):
/// locks part of the owner's spendable balance until a computed expiry.
#[derive(Debug)]
pub struct FreezeBalanceActuator<'a> {
    payload: &'a FreezeBalance,
}

impl<'a> FreezeBalanceActuator<'a> {
    /// Constructs the actuator for one freeze payload.
    pub fn new(payload: &'a FreezeBalance) -> Self {
        FreezeBalanceActuator { payload }
    }

    fn freeze<R>(
        &self,
        state: &mut TrackingCopy<R>,
        block_time: BlockTime,
    ) -> Result<(), ExecutionError>
    where
        R: StateReader<Key, StoredValue, Error = GlobalStateError>,
    {
        let owner = self.payload.owner();
        let amount = self.payload.amount();
        let mut account = state
            .get_account(owner)?
            .ok_or(TrackingCopyError::KeyNotFound(Key::Account(owner)))
            .map_err(ExecutionError::State)?;
        let expires_at = block_time.saturating_add(self.payload.duration_millis());
        match account.freeze(amount, expires_at) {
            Some(remaining) => {
                debug!(address = %owner, amount, remaining, "froze balance");
                state.write_account(account);
                Ok(())
            }
            None => Err(ExecutionError::InsufficientBalance {
                balance: account.balance(),
                required: amount,
            }),
        }
    }
}

impl Actuator for FreezeBalanceActuator<'_> {
    fn validate<R>(
        &self,
        state: &mut TrackingCopy<R>,
        _block_time: BlockTime,
    ) -> Result<(), ActuatorError>
    where
        R: StateReader<Key, StoredValue, Error = GlobalStateError>,
    {
        let owner = self.payload.owner();
        if !owner.is_well_formed() {
            return Err(ValidationError::InvalidAddress(owner).into());
        }
        let amount = self.payload.amount();
        if amount <= 0 {
            return Err(ValidationError::InvalidAmount(amount).into());
        }
        let account = state
            .get_account(owner)?
            .ok_or(ValidationError::AccountNotFound(owner))?;
        let parameters = state.chain_parameters()?;
        if amount < parameters.min_freeze_amount() {
            return Err(ValidationError::FreezeAmountBelowMinimum {
                amount,
                minimum: parameters.min_freeze_amount(),
            }
            .into());
        }
        let duration_millis = self.payload.duration_millis();
        if duration_millis < parameters.min_freeze_duration_millis()
            || duration_millis > parameters.max_freeze_duration_millis()
        {
            return Err(ValidationError::FreezeDurationOutOfRange {
                duration_millis,
                min_millis: parameters.min_freeze_duration_millis(),
                max_millis: parameters.max_freeze_duration_millis(),
            }
            .into());
        }
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
        block_time: BlockTime,
        result: &mut OperationResult,
    ) -> Result<(), ExecutionError>
    where
        R: StateReader<Key, StoredValue, Error = GlobalStateError>,
    {
        let fee = self.fee();
        match self.freeze(state, block_time) {
            Ok(()) => {
                result.set_success(fee);
                Ok(())
            }
            Err(failure) => {
                result.set_failure(fee);
                Err(failure)
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
