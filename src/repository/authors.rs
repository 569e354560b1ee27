//! Author statistics

use crate::error::{AppError, AppResult};

use super::{lock, SharedTables};

#[derive(Clone)]
pub struct AuthorsRepository {
    tables: SharedTables,
}

impl AuthorsRepository {
    pub fn new(tables: SharedTables) -> Self {
        Self { tables }
    }

    /// Number of catalog books written by the author
    pub fn count_published_books(&self, author_id: i32) -> AppResult<usize> {
        let tables = lock(&self.tables)?;

        if !tables.authors.contains_key(&author_id) {
            return Err(AppError::NotFound(format!("author {}", author_id)));
        }

        Ok(tables
            .books
            .values()
            .filter(|book| book.author_id == author_id)
            .count())
    }
}
