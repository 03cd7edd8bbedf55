use datasize::DataSize;
use serde::{Deserialize, Serialize};

use crate::Address;

/// The smallest balance an account must hold to register as a witness.
pub const MIN_WITNESS_BALANCE: i64 = 100_000_000;

/// The longest witness metadata URL accepted, in bytes.
pub const MAX_WITNESS_URL_LENGTH: usize = 256;

/// A registered validator record stored under
/// [`Key::Witness`](crate::Key::Witness).
///
/// At most one witness record exists per address.
#[derive(Clone, Debug, DataSize, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    address: Address,
    vote_count: u64,
    url: String,
}

impl Witness {
    /// Constructs a new `Witness` with a vote count of zero.
    pub fn new(address: Address, url: String) -> Self {
        Witness {
            address,
            vote_count: 0,
            url,
        }
    }

    /// The witness's account address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The number of votes currently credited to this witness.
    pub fn vote_count(&self) -> u64 {
        self.vote_count
    }

    /// The witness's metadata URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}
