//! Typed record collections: ordered in-memory lists with stable sorting,
//! id-or-name search, in-place patching, and whole-collection JSON
//! persistence.

extern crate self as roster;

mod collection;
mod error;
mod patch;
mod record;
mod search;
mod store;

pub use collection::{Listing, RecordList};
pub use error::StoreError;
pub use patch::{Patch, StudentPatch};
pub use record::{Record, Student};
pub use search::{Query, Search};
pub use store::{
    from_json, load_or_empty, to_json, InMemoryStore, JsonFileStore, RecordStore, DEFAULT_FILE,
};

// Re-export the derive macro alongside the trait it implements
pub use roster_macros::Record;
