use datasize::DataSize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Account, ChainParameters, Witness};

/// A value stored under a [`Key`](crate::Key) in global state.
#[derive(Clone, Debug, DataSize, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoredValue {
    /// An account record.
    Account(Account),
    /// A witness record.
    Witness(Witness),
    /// The chain parameters singleton.
    ChainParameters(ChainParameters),
}

impl StoredValue {
    /// Returns a reference to the wrapped `Account` if this is an account
    /// record.
    pub fn as_account(&self) -> Option<&Account> {
        match self {
            StoredValue::Account(account) => Some(account),
            _ => None,
        }
    }

    /// Returns a reference to the wrapped `Witness` if this is a witness
    /// record.
    pub fn as_witness(&self) -> Option<&Witness> {
        match self {
            StoredValue::Witness(witness) => Some(witness),
            _ => None,
        }
    }

    /// Returns a reference to the wrapped `ChainParameters` if this is the
    /// parameters singleton.
    pub fn as_chain_parameters(&self) -> Option<&ChainParameters> {
        match self {
            StoredValue::ChainParameters(parameters) => Some(parameters),
            _ => None,
        }
    }

    /// Returns the name of the wrapped variant.
    pub fn type_name(&self) -> String {
        match self {
            StoredValue::Account(_) => String::from("Account"),
            StoredValue::Witness(_) => String::from("Witness"),
            StoredValue::ChainParameters(_) => String::from("ChainParameters"),
        }
    }
}

/// An error struct representing a type mismatch in [`StoredValue`]
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("type mismatch. expected {expected} but found {found}")]
pub struct StoredValueTypeMismatch {
    expected: String,
    found: String,
}

impl StoredValueTypeMismatch {
    /// Constructs a new `StoredValueTypeMismatch`.
    pub fn new(expected: String, found: String) -> Self {
        StoredValueTypeMismatch { expected, found }
    }
}

impl TryFrom<StoredValue> for Account {
    type Error = StoredValueTypeMismatch;

    fn try_from(value: StoredValue) -> Result<Self, Self::Error> {
        match value {
            StoredValue::Account(account) => Ok(account),
            other => Err(StoredValueTypeMismatch::new(
                String::from("Account"),
                other.type_name(),
            )),
        }
    }
}

impl TryFrom<StoredValue> for Witness {
    type Error = StoredValueTypeMismatch;

    fn try_from(value: StoredValue) -> Result<Self, Self::Error> {
        match value {
            StoredValue::Witness(witness) => Ok(witness),
            other => Err(StoredValueTypeMismatch::new(
                String::from("Witness"),
                other.type_name(),
            )),
        }
    }
}

impl TryFrom<StoredValue> for ChainParameters {
    type Error = StoredValueTypeMismatch;

    fn try_from(value: StoredValue) -> Result<Self, Self::Error> {
        match value {
            StoredValue::ChainParameters(parameters) => Ok(parameters),
            other => Err(StoredValueTypeMismatch::new(
                String::from("ChainParameters"),
                other.type_name(),
            )),
        }
    }
}
