//! Shape of the JSON dump documents loaded at startup.
//!
//! Every dump is an object with a single collection key holding an array of
//! records, e.g. `{ "books": [ { "book_id": 1, ... } ] }`.

use serde::de::DeserializeOwned;

/// A record that can be read from a dump file and keyed by its id.
pub trait DumpRecord: DeserializeOwned {
    /// Top-level key of the dump document (`"books"`, `"users"`, ...).
    const COLLECTION: &'static str;

    fn id(&self) -> i32;
}
