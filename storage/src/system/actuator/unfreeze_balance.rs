use tracing::debug;

use meridian_types::{Address, BlockTime, Key, OperationResult, StoredValue, UnfreezeBalance};

use crate::{
    global_state::{error::Error as GlobalStateError, state::StateReader},
    system::actuator::{Actuator, ActuatorError, ExecutionError, ValidationError},
    tracking_copy::{TrackingCopy, TrackingCopyError, TrackingCopyExt},
};

/// Actuator for [`Operation::UnfreezeBalance`](meridian_types::Operation):
/// releases the owner's expired frozen balance back into the spendable
/// balance.
#[derive(Debug)]
pub struct UnfreezeBalanceActuator<'a> {
    payload: &'a UnfreezeBalance,
}

impl<'a> UnfreezeBalanceActuator<'a> {
    /// Constructs the actuator for one unfreeze payload.
    pub fn new(payload: &'a UnfreezeBalance) -> Self {
        UnfreezeBalanceActuator { payload }
    }

    fn unfreeze<R>(
        &self,
        state: &mut TrackingCopy<R>,
        block_time: BlockTime,
    ) -> Result<(), ExecutionError>
    where
        R: StateReader<Key, StoredValue, Error = GlobalStateError>,
    {
        let owner = self.payload.owner();
        let mut account = state
            .get_account(owner)?
            .ok_or(TrackingCopyError::KeyNotFound(Key::Account(owner)))
            .map_err(ExecutionError::State)?;
        match account.unfreeze(block_time) {
            Some(released) => {
                debug!(address = %owner, released, "released frozen balance");
                state.write_account(account);
                Ok(())
            }
            None => Err(ExecutionError::NothingToRelease(owner)),
        }
    }
}

impl Actuator for UnfreezeBalanceActuator<'_> {
    fn validate<R>(
        &self,
        state: &mut TrackingCopy<R>,
        block_time: BlockTime,
    ) -> Result<(), ActuatorError>
    where
        R: StateReader<Key, StoredValue, Error = GlobalStateError>,
    {
        let owner = self.payload.owner();
        if !owner.is_well_formed() {
            return Err(ValidationError::InvalidAddress(owner).into());
        }
        let account = state
            .get_account(owner)?
            .ok_or(ValidationError::AccountNotFound(owner))?;
        let frozen = account
            .frozen()
            .ok_or(ValidationError::NothingFrozen(owner))?;
        if !frozen.is_expired(block_time) {
            return Err(ValidationError::FreezeNotExpired {
                expires_at: frozen.expires_at(),
                block_time,
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
        match self.unfreeze(state, block_time) {
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
