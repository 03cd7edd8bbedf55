//! Types used by the meridian ledger core.
//!
//! This crate holds the pure data side of the state-transition core: account
//! and witness records, operations and their results, store keys and values,
//! and the execution-effects journal. Stateful logic lives in
//! `meridian-storage`.

#![doc(html_root_url = "https://docs.rs/meridian-types/0.1.0")]
#![warn(missing_docs)]

mod account;
mod address;
mod block_time;
mod chain_parameters;
pub mod execution;
mod key;
mod operation;
mod operation_result;
mod stored_value;
mod witness;

pub use account::{Account, FrozenBalance};
pub use address::{Address, AddressParseError, ADDRESS_LENGTH, ADDRESS_TAG};
pub use block_time::BlockTime;
pub use chain_parameters::{
    ChainParameters, DEFAULT_MAX_FREEZE_DURATION_MILLIS, DEFAULT_MIN_FREEZE_AMOUNT,
    DEFAULT_MIN_FREEZE_DURATION_MILLIS, DEFAULT_WITNESS_REGISTRATION_COST,
};
pub use key::Key;
pub use operation::{
    FreezeBalance, Operation, OperationTag, RegisterWitness, Transfer, UnfreezeBalance,
};
pub use operation_result::{OperationResult, OperationStatus};
pub use stored_value::{StoredValue, StoredValueTypeMismatch};
pub use witness::{Witness, MAX_WITNESS_URL_LENGTH, MIN_WITNESS_BALANCE};
