use thiserror::Error;

use meridian_types::{Key, StoredValueTypeMismatch};

use crate::global_state::error::Error as GlobalStateError;

/// Possible tracking copy errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Storage error.
    #[error("storage error: {0}")]
    Storage(GlobalStateError),
    /// Unable to find a key.
    #[error("key {0} not found")]
    KeyNotFound(Key),
    /// Type mismatch error.
    #[error("{0}")]
    TypeMismatch(StoredValueTypeMismatch),
}

impl From<GlobalStateError> for Error {
    fn from(error: GlobalStateError) -> Self {
        Error::Storage(error)
    }
}

impl From<StoredValueTypeMismatch> for Error {
    fn from(mismatch: StoredValueTypeMismatch) -> Self {
        Error::TypeMismatch(mismatch)
    }
}
