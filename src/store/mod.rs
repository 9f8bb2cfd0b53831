use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
    #[error("failed to decode value for key {key}: {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },
}

/// Generic persistence seam. The state machine never calls this itself;
/// hosts use it to save and restore session summaries. Loading a key
/// that was never saved is `Ok(None)`, not an error.
pub trait DataStore {
    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError>;
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>;
}

/// In-memory store keeping values as JSON documents.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, serde_json::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for MemoryStore {
    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.entries.get(key) {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|source| StoreError::Decode {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }
}
