//! Guarded key-value stores for shared in-process entity state.

use std::collections::HashMap;
use std::sync::RwLock;

/// An in-memory key-value store safe for concurrent access.
///
/// Each method takes the internal lock for its own duration, so individual
/// reads and writes are atomic under parallel callers. A sequence of calls
/// spanning more than one entity is not atomic; a caller needing a
/// cross-entity critical section must serialize it itself (the registry holds
/// its own lock around the assignment sequence).
///
/// Reads hand out cloned snapshots, never references into the map.
#[derive(Debug)]
pub struct EntityStore<T> {
    entries: RwLock<HashMap<String, T>>,
}

impl<T: Clone> EntityStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Insert an entry under the given id, replacing any existing one.
    pub fn insert(&self, id: String, value: T) {
        self.entries.write().unwrap().insert(id, value);
    }

    /// Fetch a cloned snapshot of the entry with the given id.
    pub fn get(&self, id: &str) -> Option<T> {
        self.entries.read().unwrap().get(id).cloned()
    }

    /// Check whether an entry exists for the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.read().unwrap().contains_key(id)
    }

    /// Mutate the entry with the given id in place under the write lock.
    ///
    /// Returns `false` without calling `apply` when no entry exists.
    pub fn update<F>(&self, id: &str, apply: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.entries.write().unwrap().get_mut(id) {
            Some(value) => {
                apply(value);
                true
            }
            None => false,
        }
    }

    /// Cloned snapshots of all stored entries, in no particular order.
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.read().unwrap().values().cloned().collect()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Check whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

impl<T: Clone> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
