//! State abstractions.
//!
//! [`StateReader`] is the read side every snapshot implements.
//! [`StateProvider`] and [`CommitProvider`] are the seams through which the
//! execution pipeline owns the store: checkout a snapshot, lay a tracking
//! copy over it, commit the resulting effects. The provided
//! [`CommitProvider::genesis`] and [`CommitProvider::execute`] methods are
//! implemented once against these abstractions.

/// In-memory implementation of global state.
pub mod in_memory;

use tracing::error;

use meridian_types::{execution::Effects, Key, StoredValue};

use crate::{
    data_access_layer::{
        execute_operation, ExecuteRequest, ExecuteResult, GenesisRequest, GenesisResult,
    },
    global_state::error::Error as GlobalStateError,
    system::genesis,
    tracking_copy::TrackingCopy,
};

/// A trait expressing the reading of state. This trait is used to abstract
/// the underlying store.
///
/// Reading an absent key yields `Ok(None)`, an explicit not-found signal,
/// never a defaulted record.
pub trait StateReader<K, V> {
    /// An error which occurs when reading state.
    type Error;

    /// Returns the state value from the corresponding key.
    fn read(&self, key: &K) -> Result<Option<V>, Self::Error>;
}

/// A trait expressing operations over the state.
pub trait StateProvider {
    /// The reader yielded by [`StateProvider::checkout`].
    type Reader: StateReader<Key, StoredValue, Error = GlobalStateError>;

    /// Returns a snapshot of committed state. Later commits never alter a
    /// snapshot already checked out, so concurrent readers only ever observe
    /// committed state.
    fn checkout(&self) -> Self::Reader;

    /// Returns a tracking copy laid over a fresh snapshot.
    fn tracking_copy(&self) -> TrackingCopy<Self::Reader> {
        TrackingCopy::new(self.checkout())
    }
}

/// Provides `commit` on top of [`StateProvider`], plus the flows that need
/// it.
pub trait CommitProvider: StateProvider {
    /// Applies effects to committed state.
    fn commit(&mut self, effects: Effects);

    /// Installs initial chain state: the chain parameters singleton, the
    /// sink account, and the seeded balances.
    fn genesis(&mut self, request: GenesisRequest) -> GenesisResult {
        let mut tracking_copy = self.tracking_copy();
        if let Err(failure) = genesis::install(&mut tracking_copy, &request) {
            return GenesisResult::Failure(failure);
        }
        let effects = tracking_copy.into_effects();
        self.commit(effects.clone());
        GenesisResult::Success { effects }
    }

    /// Validates and executes a batch of operations strictly sequentially,
    /// committing the batch effects on completion.
    ///
    /// Each operation is validated against state that already reflects the
    /// executes of all earlier operations in the batch, so an intra-batch
    /// double spend is rejected at validation time. An internal state fault
    /// aborts the batch and commits nothing.
    fn execute(&mut self, request: ExecuteRequest) -> ExecuteResult {
        let mut tracking_copy = self.tracking_copy();
        let mut outcomes = Vec::with_capacity(request.operations().len());
        for operation in request.operations() {
            match execute_operation(&mut tracking_copy, request.block_time(), operation) {
                Ok(outcome) => outcomes.push(outcome),
                Err(fault) => {
                    error!(%fault, "batch aborted by state fault");
                    return ExecuteResult::Failure(fault);
                }
            }
        }
        let effects = tracking_copy.into_effects();
        self.commit(effects.clone());
        ExecuteResult::Success { outcomes, effects }
    }
}
