//! Typed access to the persisted collections.
//!
//! Backends only need to implement [`KeyValueStore`]; the JSON encoding of
//! the template and workout collections lives here so every backend treats
//! missing or malformed data the same way.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::StorageError;
use crate::templates::Template;
use crate::workouts::Workout;

/// Storage key of the templates collection.
pub const TEMPLATES_KEY: &str = "templates_v1";

/// Storage key of the workouts collection.
pub const WORKOUTS_KEY: &str = "workouts_v1";

/// Synchronous string key-value store.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Whole-collection reads and writes.
///
/// Each call reads or writes one collection as a unit; nothing spans the two.
pub trait CollectionStore {
    /// Load all templates in insertion order.
    fn templates(&self) -> Result<Vec<Template>, StorageError>;

    /// Replace the templates collection.
    fn put_templates(&self, templates: &[Template]) -> Result<(), StorageError>;

    /// Load all workouts in insertion order.
    fn workouts(&self) -> Result<Vec<Workout>, StorageError>;

    /// Replace the workouts collection.
    fn put_workouts(&self, workouts: &[Workout]) -> Result<(), StorageError>;
}

impl<K: KeyValueStore + ?Sized> CollectionStore for K {
    fn templates(&self) -> Result<Vec<Template>, StorageError> {
        Ok(decode_collection(TEMPLATES_KEY, self.get(TEMPLATES_KEY)?))
    }

    fn put_templates(&self, templates: &[Template]) -> Result<(), StorageError> {
        self.put(TEMPLATES_KEY, &encode_collection(templates)?)
    }

    fn workouts(&self) -> Result<Vec<Workout>, StorageError> {
        Ok(decode_collection(WORKOUTS_KEY, self.get(WORKOUTS_KEY)?))
    }

    fn put_workouts(&self, workouts: &[Workout]) -> Result<(), StorageError> {
        self.put(WORKOUTS_KEY, &encode_collection(workouts)?)
    }
}

/// Decode a stored collection; absent or unreadable data is an empty collection.
///
/// Entries are decoded one by one so a single bad record only drops itself.
fn decode_collection<T: DeserializeOwned>(key: &str, raw: Option<String>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    if raw.trim().is_empty() {
        return Vec::new();
    }

    let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Ignoring malformed collection '{}': {}", key, e);
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("Skipping malformed entry {} of '{}': {}", index, key, e);
                None
            }
        })
        .collect()
}

fn encode_collection<T: Serialize>(items: &[T]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(|e| StorageError::SerializationError(e.to_string()))
}
