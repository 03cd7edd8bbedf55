//! Execution effects: the journal of store mutations produced by one
//! execution scope, applied to committed state at commit time.

use datasize::DataSize;
use serde::{Deserialize, Serialize};

use crate::{Key, StoredValue};

/// A single store mutation: one whole record written under one key.
#[derive(Clone, Debug, DataSize, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transform {
    key: Key,
    value: StoredValue,
}

impl Transform {
    /// Constructs a new `Transform`.
    pub fn new(key: Key, value: StoredValue) -> Self {
        Transform { key, value }
    }

    /// The key being written.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The value being written.
    pub fn value(&self) -> &StoredValue {
        &self.value
    }

    /// Consumes `self`, returning its parts.
    pub fn into_parts(self) -> (Key, StoredValue) {
        (self.key, self.value)
    }
}

/// A log of all transforms produced during execution.
#[derive(Clone, Debug, Default, DataSize, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effects(Vec<Transform>);

impl Effects {
    /// Constructs a new, empty `Effects`.
    pub const fn new() -> Self {
        Effects(Vec::new())
    }

    /// Returns a reference to the transforms.
    pub fn transforms(&self) -> &[Transform] {
        &self.0
    }

    /// Appends a transform.
    pub fn push(&mut self, transform: Transform) {
        self.0.push(transform)
    }

    /// Moves all elements from `other` into `self`.
    pub fn append(&mut self, mut other: Self) {
        self.0.append(&mut other.0);
    }

    /// Returns `true` if there are no transforms recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of transforms recorded.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Consumes `self`, returning the wrapped vec.
    pub fn value(self) -> Vec<Transform> {
        self.0
    }
}
