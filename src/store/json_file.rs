//! JsonFileStore - a record collection persisted as a single JSON file.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::collection::RecordList;
use crate::error::StoreError;

use super::{from_json, to_json, RecordStore};

/// File used when no path is configured.
pub const DEFAULT_FILE: &str = "students.json";

/// File-backed store. A missing file loads as an empty collection.
///
/// Saves go to a sibling `.tmp` file which is then renamed over the target,
/// so a failed save never truncates the previous file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_FILE)
    }
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, err: std::io::Error) -> StoreError {
        StoreError::Io(format!("{}: {}", self.path.display(), err))
    }
}

impl RecordStore for JsonFileStore {
    fn load<T: DeserializeOwned>(&self) -> Result<RecordList<T>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no record file, starting empty");
                return Ok(RecordList::new());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let records: RecordList<T> = from_json(&text)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn save<T: Serialize>(&self, records: &RecordList<T>) -> Result<(), StoreError> {
        let json = to_json(records)?;
        let temp = self.temp_path();

        if let Err(err) = fs::write(&temp, json) {
            let _ = fs::remove_file(&temp);
            return Err(self.io_error(err));
        }
        if let Err(err) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(self.io_error(err));
        }

        tracing::debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }
}
