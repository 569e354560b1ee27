//! Business logic services

pub mod catalog;
pub mod circulation;
pub mod users;

use crate::{error::AppResult, repository::{Repository, TableCounts}};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub circulation: circulation::CirculationService,
    pub users: users::UsersService,
    pub catalog: catalog::CatalogService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            circulation: circulation::CirculationService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            repository,
        }
    }

    /// Record counts per mapping, for health reporting
    pub fn store_counts(&self) -> AppResult<TableCounts> {
        self.repository.counts()
    }
}
