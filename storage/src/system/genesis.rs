//! Installation of initial chain state.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

use meridian_types::{Account, Address, Key, StoredValue};

use crate::{
    data_access_layer::GenesisRequest,
    global_state::{error::Error as GlobalStateError, state::StateReader},
    tracking_copy::{TrackingCopy, TrackingCopyExt},
};

/// Reasons a genesis request is rejected. Nothing is installed on failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenesisError {
    /// A seeded address does not pass address-format validation.
    #[error("address {0} is not well-formed")]
    InvalidAddress(Address),
    /// A seeded address appears more than once.
    #[error("account {0} appears more than once")]
    DuplicateAccount(Address),
    /// A seeded balance is negative.
    #[error("balance {balance} for account {address} is negative")]
    NegativeBalance {
        /// The offending address.
        address: Address,
        /// The offending balance.
        balance: i64,
    },
    /// The sink account cannot be seeded with a balance.
    #[error("the sink account cannot be seeded")]
    SinkSeeded,
}

/// Writes the chain parameters singleton, the sink account, and the seeded
/// balances into `tracking_copy`.
pub(crate) fn install<R>(
    tracking_copy: &mut TrackingCopy<R>,
    request: &GenesisRequest,
) -> Result<(), GenesisError>
where
    R: StateReader<Key, StoredValue, Error = GlobalStateError>,
{
    let mut seen = BTreeSet::new();
    for (address, balance) in request.balances() {
        if !address.is_well_formed() {
            return Err(GenesisError::InvalidAddress(*address));
        }
        if address.is_sink() {
            return Err(GenesisError::SinkSeeded);
        }
        if *balance < 0 {
            return Err(GenesisError::NegativeBalance {
                address: *address,
                balance: *balance,
            });
        }
        if !seen.insert(*address) {
            return Err(GenesisError::DuplicateAccount(*address));
        }
    }

    tracking_copy.write(
        Key::ChainParameters,
        StoredValue::ChainParameters(*request.parameters()),
    );
    tracking_copy.write_account(Account::new(Address::SINK, 0));
    for (address, balance) in request.balances() {
        tracking_copy.write_account(Account::new(*address, *balance));
    }
    debug!(accounts = request.balances().len(), "installed genesis state");
    Ok(())
}
