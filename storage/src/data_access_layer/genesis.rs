use meridian_types::{execution::Effects, Address, ChainParameters};

use crate::system::genesis::GenesisError;

/// Initial chain state: the parameters singleton and the seeded balances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisRequest {
    parameters: ChainParameters,
    balances: Vec<(Address, i64)>,
}

impl GenesisRequest {
    /// Creates a new request object.
    pub fn new(parameters: ChainParameters, balances: Vec<(Address, i64)>) -> Self {
        GenesisRequest {
            parameters,
            balances,
        }
    }

    /// The chain parameters to install.
    pub fn parameters(&self) -> &ChainParameters {
        &self.parameters
    }

    /// The account balances to seed.
    pub fn balances(&self) -> &[(Address, i64)] {
        &self.balances
    }
}

/// The result of installing genesis state.
#[derive(Debug, Clone)]
pub enum GenesisResult {
    /// Genesis state was installed and committed.
    Success {
        /// Effects of the installation.
        effects: Effects,
    },
    /// The request was rejected; nothing was committed.
    Failure(GenesisError),
}

impl GenesisResult {
    /// Returns `true` if the installation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, GenesisResult::Success { .. })
    }
}
