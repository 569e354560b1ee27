//! In-memory store for the inventory mappings
//!
//! Every entity mapping lives in one [`Tables`] value behind a single
//! store-wide mutex. The per-concern repositories below all share that
//! mutex, and each public operation holds it for its whole duration.

pub mod authors;
pub mod instances;
pub mod loader;
pub mod readers;
pub mod users;

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Admin, Author, Book, Genre, Instance, Language, Production, Reader, User},
};

/// One mapping per entity type, keyed by record id
#[derive(Debug, Default, Clone)]
pub struct Tables {
    pub admins: HashMap<i32, Admin>,
    pub authors: HashMap<i32, Author>,
    pub books: HashMap<i32, Book>,
    pub genres: HashMap<i32, Genre>,
    pub instances: HashMap<i32, Instance>,
    pub languages: HashMap<i32, Language>,
    pub productions: HashMap<i32, Production>,
    pub readers: HashMap<i32, Reader>,
    pub users: HashMap<i32, User>,
}

pub type SharedTables = Arc<Mutex<Tables>>;

/// Acquire the store-wide lock
pub(crate) fn lock(tables: &SharedTables) -> AppResult<MutexGuard<'_, Tables>> {
    tables
        .lock()
        .map_err(|_| AppError::Internal("store lock poisoned".to_string()))
}

/// Number of records held in each mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct TableCounts {
    pub admins: usize,
    pub authors: usize,
    pub books: usize,
    pub genres: usize,
    pub instances: usize,
    pub languages: usize,
    pub productions: usize,
    pub readers: usize,
    pub users: usize,
}

/// Main repository struct holding the shared tables
#[derive(Clone)]
pub struct Repository {
    tables: SharedTables,
    pub instances: instances::InstancesRepository,
    pub users: users::UsersRepository,
    pub authors: authors::AuthorsRepository,
    pub readers: readers::ReadersRepository,
}

impl Repository {
    /// Create a repository owning the given tables
    pub fn new(tables: Tables) -> Self {
        let tables: SharedTables = Arc::new(Mutex::new(tables));
        Self {
            instances: instances::InstancesRepository::new(tables.clone()),
            users: users::UsersRepository::new(tables.clone()),
            authors: authors::AuthorsRepository::new(tables.clone()),
            readers: readers::ReadersRepository::new(tables.clone()),
            tables,
        }
    }

    pub fn counts(&self) -> AppResult<TableCounts> {
        let tables = lock(&self.tables)?;
        Ok(TableCounts {
            admins: tables.admins.len(),
            authors: tables.authors.len(),
            books: tables.books.len(),
            genres: tables.genres.len(),
            instances: tables.instances.len(),
            languages: tables.languages.len(),
            productions: tables.productions.len(),
            readers: tables.readers.len(),
            users: tables.users.len(),
        })
    }

    /// Copy of the current tables, taken under the lock
    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> AppResult<Tables> {
        Ok(lock(&self.tables)?.clone())
    }
}
