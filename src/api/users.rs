//! User management endpoints

use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppResult, AppState};

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginStatusQuery {
    /// User ID
    pub user_id: i32,
    /// Free-form status; empty when omitted
    #[serde(default)]
    pub login_status: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BanQuery {
    /// User to remove
    pub user_id: i32,
    /// Admin performing the ban
    pub admin_id: i32,
}

/// Update a user's login status
#[utoipa::path(
    get,
    path = "/update_login_status",
    tag = "users",
    params(LoginStatusQuery),
    responses(
        (status = 200, description = "Login status updated", body = String),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_login_status(
    State(state): State<AppState>,
    Query(query): Query<LoginStatusQuery>,
) -> AppResult<&'static str> {
    state
        .services
        .users
        .update_login_status(query.user_id, &query.login_status)?;
    Ok("login status has been updated")
}

/// Ban (permanently delete) a user
#[utoipa::path(
    get,
    path = "/ban_user",
    tag = "users",
    params(BanQuery),
    responses(
        (status = 200, description = "User banned", body = String),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "User not found")
    )
)]
pub async fn ban_user(
    State(state): State<AppState>,
    Query(query): Query<BanQuery>,
) -> AppResult<&'static str> {
    state.services.users.ban_user(query.user_id, query.admin_id)?;
    Ok("user has been banned")
}
