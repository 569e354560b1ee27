//! User management service

use crate::{error::AppResult, repository::Repository};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn update_login_status(&self, user_id: i32, status: &str) -> AppResult<()> {
        self.repository.users.update_login_status(user_id, status)?;
        tracing::debug!(user_id, status, "Login status updated");
        Ok(())
    }

    /// Permanently remove a user on behalf of an admin
    pub fn ban_user(&self, user_id: i32, admin_id: i32) -> AppResult<()> {
        self.repository.users.ban_user(user_id, admin_id)
    }
}
