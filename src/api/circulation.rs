//! Instance circulation endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::{Book, InstanceStatus},
    AppState,
};

/// The historical `book_id` parameter carries an instance id
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Instance ID
    pub book_id: i32,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InstanceQuery {
    /// Instance ID
    pub instance_id: i32,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InstanceStatusQuery {
    /// Instance ID
    pub instance_id: i32,
    /// 0 = in use, 1 = in library, 2 = withdrawn
    pub instance_status: i16,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReaderQuery {
    /// Reader ID
    pub reader_id: i32,
}

/// Return a borrowed instance
#[utoipa::path(
    get,
    path = "/return_book",
    tag = "circulation",
    params(BookQuery),
    responses(
        (status = 200, description = "Instance returned", body = String),
        (status = 404, description = "Instance not found"),
        (status = 409, description = "Instance is not in use")
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<&'static str> {
    state.services.circulation.return_book(query.book_id)?;
    Ok("the book has been returned")
}

/// Take an instance out of the library
#[utoipa::path(
    get,
    path = "/take_book",
    tag = "circulation",
    params(BookQuery),
    responses(
        (status = 200, description = "Book of the taken instance", body = Book),
        (status = 404, description = "Instance or book not found"),
        (status = 409, description = "Instance is not in the library")
    )
)]
pub async fn take_book(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Book>> {
    let book = state.services.circulation.take_book(query.book_id)?;
    Ok(Json(book))
}

/// Override an instance status
#[utoipa::path(
    get,
    path = "/update_instance_status",
    tag = "circulation",
    params(InstanceStatusQuery),
    responses(
        (status = 200, description = "Status updated", body = String),
        (status = 400, description = "Unknown status code"),
        (status = 404, description = "Instance not found")
    )
)]
pub async fn update_instance_status(
    State(state): State<AppState>,
    Query(query): Query<InstanceStatusQuery>,
) -> AppResult<&'static str> {
    let status = InstanceStatus::try_from(query.instance_status)?;
    state
        .services
        .circulation
        .update_instance_status(query.instance_id, status)?;
    Ok("instance status has been updated")
}

/// Check whether an instance is on the shelf
#[utoipa::path(
    get,
    path = "/check_availability",
    tag = "circulation",
    params(InstanceQuery),
    responses(
        (status = 200, description = "Availability", body = String),
        (status = 404, description = "Instance not found")
    )
)]
pub async fn check_availability(
    State(state): State<AppState>,
    Query(query): Query<InstanceQuery>,
) -> AppResult<String> {
    let available = state.services.circulation.check_availability(query.instance_id)?;
    Ok(format!("is available: {}", available))
}

/// List the books a reader holds
#[utoipa::path(
    get,
    path = "/check_borrow_books",
    tag = "circulation",
    params(ReaderQuery),
    responses(
        (status = 200, description = "Borrowed books in borrow order", body = Vec<Book>),
        (status = 404, description = "Reader not found or no borrowed book resolves")
    )
)]
pub async fn check_borrow_books(
    State(state): State<AppState>,
    Query(query): Query<ReaderQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.circulation.check_borrow_books(query.reader_id)?;
    Ok(Json(books))
}
