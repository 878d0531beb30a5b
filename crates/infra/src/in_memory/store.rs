use std::collections::HashMap;
use std::hash::Hash;
use std::sync::RwLock;

use thiserror::Error;

/// Why a store write was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("key already present")]
    Exists,

    #[error("key not present")]
    Missing,

    /// A writer panicked while holding the lock.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Key/value store abstraction backing the in-memory gateways.
///
/// Writes check and mutate under a single lock acquisition.
pub trait KeyValueStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
    fn contains(&self, key: &K) -> bool;
    /// Insert only if `key` is absent.
    fn insert(&self, key: K, value: V) -> Result<(), StoreError>;
    /// Overwrite only if `key` is present.
    fn replace(&self, key: K, value: V) -> Result<(), StoreError>;
    /// Removing an absent key succeeds.
    fn remove(&self, key: &K) -> Result<(), StoreError>;
    fn list(&self) -> Vec<V>;
}

/// In-memory store for tests/dev.
#[derive(Debug)]
pub struct InMemoryStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> KeyValueStore<K, V> for InMemoryStore<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().ok()?;
        map.get(key).cloned()
    }

    fn contains(&self, key: &K) -> bool {
        self.inner
            .read()
            .map(|map| map.contains_key(key))
            .unwrap_or(false)
    }

    fn insert(&self, key: K, value: V) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        if map.contains_key(&key) {
            return Err(StoreError::Exists);
        }
        map.insert(key, value);
        Ok(())
    }

    fn replace(&self, key: K, value: V) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        match map.get_mut(&key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(StoreError::Missing),
        }
    }

    fn remove(&self, key: &K) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        map.remove(key);
        Ok(())
    }

    fn list(&self) -> Vec<V> {
        match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => vec![],
        }
    }
}
