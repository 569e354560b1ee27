//! User login status and bans

use crate::error::{AppError, AppResult};

use super::{lock, SharedTables};

#[derive(Clone)]
pub struct UsersRepository {
    tables: SharedTables,
}

impl UsersRepository {
    pub fn new(tables: SharedTables) -> Self {
        Self { tables }
    }

    /// Get user by ID
    #[cfg(test)]
    pub(crate) fn get_by_id(&self, id: i32) -> AppResult<crate::models::User> {
        lock(&self.tables)?
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
    }

    /// Overwrite the free-form login status
    pub fn update_login_status(&self, id: i32, status: &str) -> AppResult<()> {
        let mut tables = lock(&self.tables)?;
        let user = tables
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;

        user.login_status = status.to_string();
        Ok(())
    }

    /// Remove a user for good. Only members of the admin table may ban.
    pub fn ban_user(&self, user_id: i32, admin_id: i32) -> AppResult<()> {
        let mut tables = lock(&self.tables)?;

        if !tables.admins.contains_key(&admin_id) {
            tracing::warn!(admin_id, user_id, "Ban attempted by non-admin");
            return Err(AppError::PermissionDenied("invalid admin id".to_string()));
        }

        match tables.users.remove(&user_id) {
            Some(user) => {
                tracing::info!(user_id, admin_id, name = %user.name, "User banned");
                Ok(())
            }
            None => Err(AppError::NotFound(format!("user {}", user_id))),
        }
    }
}
