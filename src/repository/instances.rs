//! Instance lifecycle: taking, returning and status overrides

use crate::{
    error::{AppError, AppResult},
    models::{Book, InstanceStatus},
};

use super::{lock, SharedTables};

#[derive(Clone)]
pub struct InstancesRepository {
    tables: SharedTables,
}

fn instance_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("instance {}", id))
}

impl InstancesRepository {
    pub fn new(tables: SharedTables) -> Self {
        Self { tables }
    }

    /// Get instance by ID
    #[cfg(test)]
    pub(crate) fn get_by_id(&self, id: i32) -> AppResult<crate::models::Instance> {
        lock(&self.tables)?
            .instances
            .get(&id)
            .cloned()
            .ok_or_else(|| instance_not_found(id))
    }

    /// Bring a borrowed instance back: in-use -> in-library
    pub fn return_book(&self, id: i32) -> AppResult<()> {
        let mut tables = lock(&self.tables)?;
        let instance = tables
            .instances
            .get_mut(&id)
            .ok_or_else(|| instance_not_found(id))?;

        match instance.status {
            InstanceStatus::InUse => {
                instance.status = InstanceStatus::InLibrary;
                Ok(())
            }
            InstanceStatus::InLibrary => {
                tracing::debug!(instance_id = id, "Return rejected: already in library");
                Err(AppError::InvalidState("instance already in library".to_string()))
            }
            InstanceStatus::Withdrawn => {
                tracing::debug!(instance_id = id, "Return rejected: withdrawn");
                Err(AppError::InvalidState("instance is withdrawn".to_string()))
            }
        }
    }

    /// Lend an instance out: in-library -> in-use.
    ///
    /// Returns the catalog book the instance is a copy of. An instance whose
    /// book cannot be resolved is reported as not found and left untouched.
    pub fn take_book(&self, id: i32) -> AppResult<Book> {
        let mut guard = lock(&self.tables)?;
        let tables = &mut *guard;
        let instance = tables
            .instances
            .get_mut(&id)
            .ok_or_else(|| instance_not_found(id))?;

        match instance.status {
            InstanceStatus::InLibrary => {
                let book = tables.books.get(&instance.book_id).cloned().ok_or_else(|| {
                    tracing::warn!(
                        instance_id = id,
                        book_id = instance.book_id,
                        "Instance references a missing book"
                    );
                    AppError::NotFound(format!("book {}", instance.book_id))
                })?;
                instance.status = InstanceStatus::InUse;
                Ok(book)
            }
            status => {
                tracing::debug!(instance_id = id, %status, "Take rejected");
                Err(AppError::InvalidState(format!("you can't take an instance that is {}", status)))
            }
        }
    }

    /// Administrative override, no transition rules applied
    pub fn update_status(&self, id: i32, status: InstanceStatus) -> AppResult<()> {
        let mut tables = lock(&self.tables)?;
        let instance = tables
            .instances
            .get_mut(&id)
            .ok_or_else(|| instance_not_found(id))?;

        tracing::info!(
            instance_id = id,
            from = %instance.status,
            to = %status,
            "Instance status overridden"
        );
        instance.status = status;
        Ok(())
    }

    /// Whether the instance is currently on the shelf
    pub fn check_availability(&self, id: i32) -> AppResult<bool> {
        let tables = lock(&self.tables)?;
        let instance = tables.instances.get(&id).ok_or_else(|| instance_not_found(id))?;
        Ok(instance.status == InstanceStatus::InLibrary)
    }
}
