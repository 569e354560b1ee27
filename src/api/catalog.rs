//! Catalog endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{error::AppResult, AppState};

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuthorQuery {
    /// Author ID
    pub author_id: i32,
}

#[derive(Serialize, ToSchema)]
pub struct PublishedBooksResponse {
    pub author_id: i32,
    pub count: usize,
}

/// Count the catalog books of an author
#[utoipa::path(
    get,
    path = "/count_published_books",
    tag = "catalog",
    params(AuthorQuery),
    responses(
        (status = 200, description = "Number of books", body = PublishedBooksResponse),
        (status = 404, description = "Author not found")
    )
)]
pub async fn count_published_books(
    State(state): State<AppState>,
    Query(query): Query<AuthorQuery>,
) -> AppResult<Json<PublishedBooksResponse>> {
    let count = state.services.catalog.count_published_books(query.author_id)?;
    Ok(Json(PublishedBooksResponse {
        author_id: query.author_id,
        count,
    }))
}
