//! In-memory key-value store for tests and throwaway sessions.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::storage::collections::KeyValueStore;
use crate::storage::StorageError;

/// Key-value store backed by a `HashMap`. Never fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a raw value, bypassing collection encoding.
    pub fn raw_put(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Read a raw value.
    pub fn raw_get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw_get(key))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.raw_put(key, value);
        Ok(())
    }
}
