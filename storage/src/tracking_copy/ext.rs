use meridian_types::{
    Account, Address, ChainParameters, Key, StoredValue, StoredValueTypeMismatch, Witness,
};

use crate::{
    global_state::{error::Error as GlobalStateError, state::StateReader},
    tracking_copy::{TrackingCopy, TrackingCopyError},
};

/// Higher-level, record-typed operations on the state via a `TrackingCopy`.
///
/// Getters return `Ok(None)` for an absent key; a record of the wrong
/// variant under a key is a type mismatch fault, never a silent default.
pub trait TrackingCopyExt<R> {
    /// The type for the returned errors.
    type Error;

    /// Gets the account stored under `address`.
    fn get_account(&mut self, address: Address) -> Result<Option<Account>, Self::Error>;

    /// Gets the witness stored under `address`.
    fn get_witness(&mut self, address: Address) -> Result<Option<Witness>, Self::Error>;

    /// Gets the chain parameters singleton. Its absence is a fault: genesis
    /// installs it before any operation runs.
    fn chain_parameters(&mut self) -> Result<ChainParameters, Self::Error>;

    /// Buffers a write of `account` under its address.
    fn write_account(&mut self, account: Account);

    /// Buffers a write of `witness` under its address.
    fn write_witness(&mut self, witness: Witness);
}

impl<R> TrackingCopyExt<R> for TrackingCopy<R>
where
    R: StateReader<Key, StoredValue, Error = GlobalStateError>,
{
    type Error = TrackingCopyError;

    fn get_account(&mut self, address: Address) -> Result<Option<Account>, Self::Error> {
        let key = Key::Account(address);
        match self.get(&key)? {
            Some(StoredValue::Account(account)) => Ok(Some(account)),
            Some(other) => Err(TrackingCopyError::TypeMismatch(
                StoredValueTypeMismatch::new(String::from("Account"), other.type_name()),
            )),
            None => Ok(None),
        }
    }

    fn get_witness(&mut self, address: Address) -> Result<Option<Witness>, Self::Error> {
        let key = Key::Witness(address);
        match self.get(&key)? {
            Some(StoredValue::Witness(witness)) => Ok(Some(witness)),
            Some(other) => Err(TrackingCopyError::TypeMismatch(
                StoredValueTypeMismatch::new(String::from("Witness"), other.type_name()),
            )),
            None => Ok(None),
        }
    }

    fn chain_parameters(&mut self) -> Result<ChainParameters, Self::Error> {
        match self.get(&Key::ChainParameters)? {
            Some(StoredValue::ChainParameters(parameters)) => Ok(parameters),
            Some(other) => Err(TrackingCopyError::TypeMismatch(
                StoredValueTypeMismatch::new(String::from("ChainParameters"), other.type_name()),
            )),
            None => Err(TrackingCopyError::KeyNotFound(Key::ChainParameters)),
        }
    }

    fn write_account(&mut self, account: Account) {
        self.write(
            Key::Account(account.address()),
            StoredValue::Account(account),
        );
    }

    fn write_witness(&mut self, witness: Witness) {
        self.write(
            Key::Witness(witness.address()),
            StoredValue::Witness(witness),
        );
    }
}
