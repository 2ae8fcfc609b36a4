use std::sync::Mutex;

use serde::{de::DeserializeOwned, Serialize};

use crate::{prelude::HashMap, MapError, Result};

/// Durable string key-value storage (localStorage on the web build).
///
/// Values are JSON documents serialized by the caller. Quota and parse
/// failures surface as [`MapError::Persistence`] and are always recovered
/// by treating the value as absent or by keeping state in memory only.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Reads and deserializes `key`, degrading to `None` on any failure.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(value) => value?,
        Err(err) => {
            log::warn!("storage read for {key} failed, treating as absent: {err}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("stored value under {key} does not parse, treating as absent: {err}");
            None
        }
    }
}

/// Serializes and writes `value` under `key`.
pub fn write_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Volatile in-memory store for tests and the demo.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| MapError::Persistence("storage mutex poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| MapError::Persistence("storage mutex poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store whose writes always fail, for exercising quota-style errors.
#[cfg(test)]
pub struct BrokenStore;

#[cfg(test)]
impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(MapError::Persistence("read refused".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(MapError::Persistence("quota exceeded".to_string()))
    }
}
