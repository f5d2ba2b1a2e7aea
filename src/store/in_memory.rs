//! InMemoryStore - keeps the saved JSON text in memory for tests and tools.

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::collection::RecordList;
use crate::error::StoreError;

use super::{from_json, to_json, RecordStore};

/// In-memory store holding the last saved document.
///
/// Clone-friendly (cloning shares the same underlying document).
#[derive(Clone, Default)]
pub struct InMemoryStore {
    document: Arc<RwLock<Option<String>>>,
}

impl InMemoryStore {
    /// Create a store that has never been saved to.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a JSON document.
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            document: Arc::new(RwLock::new(Some(json.into()))),
        }
    }

    /// The last saved document, if any.
    pub fn json(&self) -> Result<Option<String>, StoreError> {
        let document = self
            .document
            .read()
            .map_err(|_| StoreError::LockPoisoned("document read"))?;
        Ok(document.clone())
    }
}

impl RecordStore for InMemoryStore {
    fn load<T: DeserializeOwned>(&self) -> Result<RecordList<T>, StoreError> {
        let document = self
            .document
            .read()
            .map_err(|_| StoreError::LockPoisoned("document read"))?;

        match document.as_deref() {
            Some(json) => from_json(json),
            None => Ok(RecordList::new()),
        }
    }

    fn save<T: Serialize>(&self, records: &RecordList<T>) -> Result<(), StoreError> {
        let json = to_json(records)?;
        let mut document = self
            .document
            .write()
            .map_err(|_| StoreError::LockPoisoned("document write"))?;
        *document = Some(json);
        Ok(())
    }
}
