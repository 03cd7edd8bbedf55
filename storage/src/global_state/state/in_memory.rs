use std::{collections::BTreeMap, sync::Arc};

use meridian_types::{execution::Effects, Key, StoredValue};

use crate::global_state::{
    error::Error as GlobalStateError,
    state::{CommitProvider, StateProvider, StateReader},
};

/// Global state implemented against an in-memory ordered map.
///
/// The committed map sits behind an [`Arc`], so a checkout is a cheap handle
/// to the map as of that moment; `commit` replaces the map copy-on-write and
/// therefore never mutates state a view has already observed.
#[derive(Clone, Debug, Default)]
pub struct InMemoryGlobalState {
    committed: Arc<BTreeMap<Key, StoredValue>>,
}

/// A view of global state as of a checkout.
#[derive(Clone, Debug)]
pub struct InMemoryStateView {
    committed: Arc<BTreeMap<Key, StoredValue>>,
}

impl InMemoryGlobalState {
    /// Creates an empty state.
    pub fn empty() -> Self {
        InMemoryGlobalState::default()
    }

    /// Returns the committed record under `key`, if any.
    pub fn get(&self, key: &Key) -> Option<StoredValue> {
        self.committed.get(key).cloned()
    }

    /// Writes a record directly into committed state.
    pub fn put(&mut self, key: Key, value: StoredValue) {
        Arc::make_mut(&mut self.committed).insert(key, value);
    }

    /// Returns `true` if a committed record exists under `key`.
    pub fn has(&self, key: &Key) -> bool {
        self.committed.contains_key(key)
    }

    /// The number of committed records.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Returns `true` if no records are committed.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

impl StateReader<Key, StoredValue> for InMemoryStateView {
    type Error = GlobalStateError;

    fn read(&self, key: &Key) -> Result<Option<StoredValue>, Self::Error> {
        Ok(self.committed.get(key).cloned())
    }
}

impl StateProvider for InMemoryGlobalState {
    type Reader = InMemoryStateView;

    fn checkout(&self) -> Self::Reader {
        InMemoryStateView {
            committed: Arc::clone(&self.committed),
        }
    }
}

impl CommitProvider for InMemoryGlobalState {
    fn commit(&mut self, effects: Effects) {
        let committed = Arc::make_mut(&mut self.committed);
        for transform in effects.value() {
            let (key, value) = transform.into_parts();
            committed.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use meridian_types::{execution::Transform, Account, Address, ADDRESS_LENGTH, ADDRESS_TAG};

    use super::*;

    fn address(id: u8) -> Address {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[0] = ADDRESS_TAG;
        bytes[ADDRESS_LENGTH - 1] = id;
        Address::new(bytes)
    }

    fn account_record(id: u8, balance: i64) -> (Key, StoredValue) {
        let account = Account::new(address(id), balance);
        (
            Key::Account(account.address()),
            StoredValue::Account(account),
        )
    }

    #[test]
    fn should_read_own_writes() {
        let mut state = InMemoryGlobalState::empty();
        let (key, value) = account_record(1, 500);
        assert!(!state.has(&key));
        state.put(key, value.clone());
        assert!(state.has(&key));
        assert_eq!(state.get(&key), Some(value));
    }

    #[test]
    fn absent_key_reads_as_none() {
        let state = InMemoryGlobalState::empty();
        let view = state.checkout();
        let (key, _) = account_record(1, 500);
        assert_eq!(view.read(&key).unwrap(), None);
        assert_eq!(state.get(&key), None);
    }

    #[test]
    fn commit_should_apply_all_transforms() {
        let mut state = InMemoryGlobalState::empty();
        let mut effects = Effects::new();
        for id in 1..=3 {
            let (key, value) = account_record(id, i64::from(id) * 100);
            effects.push(Transform::new(key, value));
        }
        state.commit(effects);
        assert_eq!(state.len(), 3);
        let (key, value) = account_record(2, 200);
        assert_eq!(state.get(&key), Some(value));
    }

    #[test]
    fn checkout_is_isolated_from_later_commits() {
        let mut state = InMemoryGlobalState::empty();
        let (key, value) = account_record(1, 500);
        state.put(key, value.clone());

        let view = state.checkout();

        let (_, updated) = account_record(1, 900);
        let mut effects = Effects::new();
        effects.push(Transform::new(key, updated.clone()));
        state.commit(effects);

        assert_eq!(view.read(&key).unwrap(), Some(value));
        assert_eq!(state.get(&key), Some(updated));
    }
}
