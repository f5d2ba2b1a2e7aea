//! Stores - whole-collection persistence for record lists.
//!
//! A collection is persisted as one pretty-printed JSON array and always
//! loaded or saved wholesale. A store that has never been written loads as
//! an empty collection.
//!
//! ## Example
//!
//! ```ignore
//! use roster::{load_or_empty, JsonFileStore, RecordStore, Student};
//!
//! let store = JsonFileStore::new("students.json");
//! let mut students = load_or_empty::<Student, _>(&store);
//! students.add(Student::new("Abel", 20, 1, "A"));
//! store.save(&students)?;
//! ```

mod in_memory;
mod json_file;
mod record_store;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::collection::RecordList;
use crate::error::StoreError;

pub use in_memory::InMemoryStore;
pub use json_file::{JsonFileStore, DEFAULT_FILE};
pub use record_store::RecordStore;

/// Encode a collection as a pretty-printed JSON array.
pub fn to_json<T: Serialize>(records: &RecordList<T>) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Decode a collection from a JSON array, keeping element order.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<RecordList<T>, StoreError> {
    Ok(serde_json::from_str(json)?)
}

/// Load from `store`, falling back to an empty collection if loading fails.
pub fn load_or_empty<T, S>(store: &S) -> RecordList<T>
where
    T: DeserializeOwned,
    S: RecordStore,
{
    match store.load() {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(error = %err, "failed to load records, starting empty");
            RecordList::new()
        }
    }
}
