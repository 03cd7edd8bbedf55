//! This module defines the `TrackingCopy` - a utility that caches operations
//! on the state, so that the underlying state remains unmodified, but it can
//! be interacted with as if the modifications were applied on it.

mod error;
mod ext;

use std::collections::{BTreeMap, HashMap};

use meridian_types::{
    execution::{Effects, Transform},
    Key, StoredValue,
};

use crate::global_state::{error::Error as GlobalStateError, state::StateReader};

pub use self::{error::Error as TrackingCopyError, ext::TrackingCopyExt};

/// A scratch layer over a [`StateReader`].
///
/// Reads are cached, writes are buffered; nothing reaches the underlying
/// state until the accumulated [`Effects`] are committed. A whole batch runs
/// against one tracking copy, and each operation's `execute` runs against a
/// [`fork`](TrackingCopy::fork) of it, so a failed execute is dropped
/// without leaving a partial mutation behind.
pub struct TrackingCopy<R> {
    reader: R,
    reads_cached: HashMap<Key, StoredValue>,
    muts_cached: BTreeMap<Key, StoredValue>,
}

impl<R> TrackingCopy<R>
where
    R: StateReader<Key, StoredValue, Error = GlobalStateError>,
{
    /// Constructs a new `TrackingCopy` over `reader`.
    pub fn new(reader: R) -> Self {
        TrackingCopy {
            reader,
            reads_cached: HashMap::new(),
            muts_cached: BTreeMap::new(),
        }
    }

    /// Returns a reference to the underlying reader.
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Returns the value under `key`: buffered writes first, then cached
    /// reads, then the underlying reader.
    pub fn get(&mut self, key: &Key) -> Result<Option<StoredValue>, GlobalStateError> {
        if let Some(value) = self.muts_cached.get(key) {
            return Ok(Some(value.clone()));
        }
        if let Some(value) = self.reads_cached.get(key) {
            return Ok(Some(value.clone()));
        }
        match self.reader.read(key)? {
            Some(value) => {
                self.reads_cached.insert(*key, value.clone());
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Buffers a write of `value` under `key`.
    pub fn write(&mut self, key: Key, value: StoredValue) {
        self.muts_cached.insert(key, value);
    }

    /// Merges another scope's effects into the buffered writes.
    pub fn apply(&mut self, effects: Effects) {
        for transform in effects.value() {
            let (key, value) = transform.into_parts();
            self.write(key, value);
        }
    }

    /// Returns a fresh tracking copy layered over this one.
    ///
    /// The fork observes this copy's buffered writes but its own writes stay
    /// local until [`apply`](TrackingCopy::apply)ed back.
    pub fn fork(&self) -> TrackingCopy<&TrackingCopy<R>> {
        TrackingCopy::new(self)
    }

    /// The buffered writes as effects, in key order.
    pub fn effects(&self) -> Effects {
        let mut effects = Effects::new();
        for (key, value) in &self.muts_cached {
            effects.push(Transform::new(*key, value.clone()));
        }
        effects
    }

    /// Consumes `self`, returning the buffered writes as effects, in key
    /// order.
    pub fn into_effects(self) -> Effects {
        let mut effects = Effects::new();
        for (key, value) in self.muts_cached {
            effects.push(Transform::new(key, value));
        }
        effects
    }
}

impl<R> StateReader<Key, StoredValue> for &TrackingCopy<R>
where
    R: StateReader<Key, StoredValue, Error = GlobalStateError>,
{
    type Error = GlobalStateError;

    fn read(&self, key: &Key) -> Result<Option<StoredValue>, Self::Error> {
        if let Some(value) = self.muts_cached.get(key) {
            return Ok(Some(value.clone()));
        }
        if let Some(value) = self.reads_cached.get(key) {
            return Ok(Some(value.clone()));
        }
        self.reader.read(key)
    }
}

#[cfg(test)]
mod tests {
    use meridian_types::{Account, Address, ChainParameters, ADDRESS_LENGTH, ADDRESS_TAG};

    use super::*;
    use crate::global_state::state::{StateProvider, in_memory::InMemoryGlobalState};

    fn address(id: u8) -> Address {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[0] = ADDRESS_TAG;
        bytes[ADDRESS_LENGTH - 1] = id;
        Address::new(bytes)
    }

    fn seeded_state() -> InMemoryGlobalState {
        let mut state = InMemoryGlobalState::empty();
        let account = Account::new(address(1), 1_000);
        state.put(
            Key::Account(account.address()),
            StoredValue::Account(account),
        );
        state
    }

    #[test]
    fn writes_are_buffered_not_committed() {
        let state = seeded_state();
        let mut tracking_copy = state.tracking_copy();
        let key = Key::Account(address(2));
        let value = StoredValue::Account(Account::new(address(2), 77));

        tracking_copy.write(key, value.clone());

        assert_eq!(tracking_copy.get(&key).unwrap(), Some(value));
        assert!(!state.has(&key));
    }

    #[test]
    fn reads_fall_through_to_the_reader() {
        let state = seeded_state();
        let mut tracking_copy = state.tracking_copy();
        let key = Key::Account(address(1));
        let read = tracking_copy.get(&key).unwrap().unwrap();
        assert_eq!(read.as_account().unwrap().balance(), 1_000);
        assert_eq!(tracking_copy.get(&Key::ChainParameters).unwrap(), None);
    }

    #[test]
    fn fork_observes_parent_writes() {
        let state = seeded_state();
        let mut tracking_copy = state.tracking_copy();
        let key = Key::ChainParameters;
        tracking_copy.write(key, StoredValue::ChainParameters(ChainParameters::default()));

        let mut fork = tracking_copy.fork();
        assert!(fork.get(&key).unwrap().is_some());
    }

    #[test]
    fn dropped_fork_leaves_parent_untouched() {
        let state = seeded_state();
        let mut tracking_copy = state.tracking_copy();
        let key = Key::Account(address(2));
        {
            let mut fork = tracking_copy.fork();
            fork.write(key, StoredValue::Account(Account::new(address(2), 5)));
        }
        assert_eq!(tracking_copy.get(&key).unwrap(), None);
        assert!(tracking_copy.effects().is_empty());
    }

    #[test]
    fn applied_fork_effects_become_parent_writes() {
        let state = seeded_state();
        let mut tracking_copy = state.tracking_copy();
        let key = Key::Account(address(2));
        let value = StoredValue::Account(Account::new(address(2), 5));

        let mut fork = tracking_copy.fork();
        fork.write(key, value.clone());
        let effects = fork.into_effects();
        tracking_copy.apply(effects);

        assert_eq!(tracking_copy.get(&key).unwrap(), Some(value));
    }

    #[test]
    fn effects_are_key_ordered_with_one_write_per_key() {
        let state = seeded_state();
        let mut tracking_copy = state.tracking_copy();
        for id in [9u8, 3, 6, 3] {
            tracking_copy.write(
                Key::Account(address(id)),
                StoredValue::Account(Account::new(address(id), i64::from(id))),
            );
        }
        let effects = tracking_copy.into_effects();
        assert_eq!(effects.len(), 3);
        let keys: Vec<Key> = effects
            .transforms()
            .iter()
            .map(|transform| transform.key())
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
