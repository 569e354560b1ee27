//! Catalog service

use crate::{error::AppResult, repository::Repository};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Count the books written by an author
    pub fn count_published_books(&self, author_id: i32) -> AppResult<usize> {
        self.repository.authors.count_published_books(author_id)
    }
}
