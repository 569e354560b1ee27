//! Startup load of the JSON dumps into the store

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

use crate::{
    config::DumpsConfig,
    error::{LoadError, LoadErrors},
    models::DumpRecord,
};

use super::{Repository, Tables};

/// Read one dump document into a mapping keyed by record id
pub fn read_dump<T: DumpRecord>(path: &Path) -> Result<HashMap<i32, T>, LoadError> {
    let data = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut document: Map<String, Value> = serde_json::from_slice(&data).map_err(parse_error)?;
    let collection = document
        .remove(T::COLLECTION)
        .ok_or_else(|| LoadError::MissingCollection {
            path: path.to_path_buf(),
            collection: T::COLLECTION,
        })?;
    let records: Vec<T> = serde_json::from_value(collection).map_err(parse_error)?;

    let mut mapping = HashMap::with_capacity(records.len());
    for record in records {
        let id = record.id();
        if mapping.insert(id, record).is_some() {
            return Err(LoadError::DuplicateId {
                path: path.to_path_buf(),
                collection: T::COLLECTION,
                id,
            });
        }
    }

    tracing::debug!(path = %path.display(), records = mapping.len(), "Dump loaded");
    Ok(mapping)
}

/// Collects failures so every dump is attempted before giving up
struct Collector {
    errors: Vec<LoadError>,
}

impl Collector {
    fn read<T: DumpRecord>(&mut self, path: &Path) -> HashMap<i32, T> {
        read_dump(path).unwrap_or_else(|e| {
            tracing::error!("{}", e);
            self.errors.push(e);
            HashMap::new()
        })
    }
}

impl Repository {
    /// Build the store from the nine dump files.
    ///
    /// All files are read even after a failure; the returned error lists
    /// every one that could not be loaded.
    pub fn load(dumps: &DumpsConfig) -> Result<Self, LoadErrors> {
        let mut collector = Collector { errors: Vec::new() };

        let tables = Tables {
            admins: collector.read(&dumps.admins),
            authors: collector.read(&dumps.authors),
            books: collector.read(&dumps.books),
            genres: collector.read(&dumps.genres),
            instances: collector.read(&dumps.instances),
            languages: collector.read(&dumps.languages),
            productions: collector.read(&dumps.productions),
            readers: collector.read(&dumps.readers),
            users: collector.read(&dumps.users),
        };

        if !collector.errors.is_empty() {
            return Err(LoadErrors(collector.errors));
        }

        report_dangling_references(&tables);

        let repository = Repository::new(tables);
        if let Ok(counts) = repository.counts() {
            tracing::info!(?counts, "Store loaded");
        }
        Ok(repository)
    }
}

/// References are not enforced at runtime beyond lookup failure; surface them once
fn report_dangling_references(tables: &Tables) {
    for instance in tables.instances.values() {
        if !tables.books.contains_key(&instance.book_id) {
            tracing::warn!(
                instance_id = instance.id,
                book_id = instance.book_id,
                "Instance references a missing book"
            );
        }
    }

    for book in tables.books.values() {
        if !tables.authors.contains_key(&book.author_id) {
            tracing::warn!(book_id = book.id, author_id = book.author_id, "Book references a missing author");
        }
    }

    for reader in tables.readers.values() {
        for instance_id in reader.instance_ids.iter().filter(|id| !tables.instances.contains_key(*id)) {
            tracing::warn!(reader_id = reader.id, instance_id, "Reader references a missing instance");
        }
    }
}
