//! RecordStore - abstract whole-collection persistence.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::collection::RecordList;
use crate::error::StoreError;

/// Loads and saves an entire [`RecordList`] at once.
pub trait RecordStore {
    /// Load the persisted collection. Returns an empty list if nothing has
    /// been saved yet.
    fn load<T: DeserializeOwned>(&self) -> Result<RecordList<T>, StoreError>;

    /// Replace the persisted collection with `records`. On failure the
    /// previously persisted collection is left unchanged.
    fn save<T: Serialize>(&self, records: &RecordList<T>) -> Result<(), StoreError>;
}
