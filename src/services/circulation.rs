//! Instance circulation service

use crate::{
    error::AppResult,
    models::{Book, InstanceStatus},
    repository::Repository,
};

#[derive(Clone)]
pub struct CirculationService {
    repository: Repository,
}

impl CirculationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Return a borrowed instance to the library
    pub fn return_book(&self, instance_id: i32) -> AppResult<()> {
        self.repository.instances.return_book(instance_id)?;
        tracing::info!(instance_id, "Book returned");
        Ok(())
    }

    /// Take an instance out of the library
    pub fn take_book(&self, instance_id: i32) -> AppResult<Book> {
        let book = self.repository.instances.take_book(instance_id)?;
        tracing::info!(instance_id, book_id = book.id, "Book taken");
        Ok(book)
    }

    /// Set an instance status directly, bypassing transition rules
    pub fn update_instance_status(&self, instance_id: i32, status: InstanceStatus) -> AppResult<()> {
        self.repository.instances.update_status(instance_id, status)
    }

    pub fn check_availability(&self, instance_id: i32) -> AppResult<bool> {
        self.repository.instances.check_availability(instance_id)
    }

    /// Books currently held by a reader
    pub fn check_borrow_books(&self, reader_id: i32) -> AppResult<Vec<Book>> {
        self.repository.readers.check_borrow_books(reader_id)
    }
}
