use tracing::debug;

use meridian_types::{
    Address, BlockTime, Key, OperationResult, RegisterWitness, StoredValue, Witness,
    MAX_WITNESS_URL_LENGTH, MIN_WITNESS_BALANCE,
};

use crate::{
    global_state::{error::Error as GlobalStateError, state::StateReader},
    system::{
        actuator::{Actuator, ActuatorError, ExecutionError, ValidationError},
        balance::BalanceLedger,
    },
    tracking_copy::{TrackingCopy, TrackingCopyExt},
};

/// Actuator for [`Operation::RegisterWitness`](meridian_types::Operation):
/// creates the witness record and burns the registration cost to the sink.
#[derive(Debug)]
pub struct RegisterWitnessActuator<'a> {
    payload: &'a RegisterWitness,
}

impl<'a> RegisterWitnessActuator<'a> {
    /// Constructs the actuator for one registration payload.
    pub fn new(payload: &'a RegisterWitness) -> Self {
        RegisterWitnessActuator { payload }
    }

    fn register<R>(&self, state: &mut TrackingCopy<R>) -> Result<(), ExecutionError>
    where
        R: StateReader<Key, StoredValue, Error = GlobalStateError>,
    {
        let owner = self.payload.owner();
        let cost = state.chain_parameters()?.witness_registration_cost();
        state.transfer(owner, Address::SINK, cost)?;
        let witness = Witness::new(owner, self.payload.url().to_string());
        debug!(address = %owner, "creating witness");
        state.write_witness(witness);
        Ok(())
    }
}

impl Actuator for RegisterWitnessActuator<'_> {
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
        let url_length = self.payload.url().len();
        if url_length == 0 || url_length > MAX_WITNESS_URL_LENGTH {
            return Err(ValidationError::InvalidUrl(url_length).into());
        }
        let account = state
            .get_account(owner)?
            .ok_or(ValidationError::AccountNotFound(owner))?;
        if account.balance() < MIN_WITNESS_BALANCE {
            return Err(ValidationError::BalanceBelowMinimum {
                balance: account.balance(),
                minimum: MIN_WITNESS_BALANCE,
            }
            .into());
        }
        if state.get_witness(owner)?.is_some() {
            return Err(ValidationError::WitnessAlreadyExists(owner).into());
        }
        let cost = state.chain_parameters()?.witness_registration_cost();
        if account.balance() < cost {
            return Err(ValidationError::InsufficientBalance {
                balance: account.balance(),
                required: cost,
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
        match self.register(state) {
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
