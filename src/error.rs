use std::fmt;

/// Errors raised while loading or saving a record collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    Io(String),
    /// The persisted data could not be encoded or decoded.
    Serde(String),
    /// A shared store's lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "record store I/O error: {}", msg),
            StoreError::Serde(msg) => write!(f, "record store serialization error: {}", msg),
            StoreError::LockPoisoned(operation) => {
                write!(f, "record store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
