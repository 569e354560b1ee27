//! Books currently held by readers

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

use super::{lock, SharedTables};

#[derive(Clone)]
pub struct ReadersRepository {
    tables: SharedTables,
}

impl ReadersRepository {
    pub fn new(tables: SharedTables) -> Self {
        Self { tables }
    }

    /// Resolve the reader's instances to catalog books, keeping the reader's order.
    ///
    /// Instance or book ids that do not resolve are logged and skipped. A
    /// reader holding nothing gets an empty list; a reader whose every id
    /// fails to resolve gets `EmptyResult`.
    pub fn check_borrow_books(&self, reader_id: i32) -> AppResult<Vec<Book>> {
        let tables = lock(&self.tables)?;
        let reader = tables
            .readers
            .get(&reader_id)
            .ok_or_else(|| AppError::NotFound(format!("reader {}", reader_id)))?;

        let books: Vec<Book> = reader
            .instance_ids
            .iter()
            .filter_map(|instance_id| {
                let Some(instance) = tables.instances.get(instance_id) else {
                    tracing::warn!(reader_id, instance_id, "Borrowed instance not found");
                    return None;
                };
                let book = tables.books.get(&instance.book_id);
                if book.is_none() {
                    tracing::warn!(
                        reader_id,
                        instance_id,
                        book_id = instance.book_id,
                        "Borrowed instance references a missing book"
                    );
                }
                book.cloned()
            })
            .collect();

        if books.is_empty() && !reader.instance_ids.is_empty() {
            return Err(AppError::EmptyResult(format!(
                "none of the books borrowed by reader {} could be resolved",
                reader_id
            )));
        }

        Ok(books)
    }
}
