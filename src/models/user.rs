//! User and admin models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DumpRecord;

/// Membership in the admin table grants ban authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(rename = "admin_id")]
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: i32,
    pub name: String,
    pub password: String,
    /// Free-form, e.g. "online" / "offline"
    pub login_status: String,
    pub register_date: String,
}

impl DumpRecord for Admin {
    const COLLECTION: &'static str = "admins";

    fn id(&self) -> i32 {
        self.id
    }
}

impl DumpRecord for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> i32 {
        self.id
    }
}
