//! HTTP handlers for the inventory endpoints

pub mod catalog;
pub mod circulation;
pub mod health;
pub mod openapi;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/", post(health::main_page))
        .route("/health", get(health::health_check))
        // Circulation
        .route("/return_book", get(circulation::return_book))
        .route("/take_book", get(circulation::take_book))
        .route("/update_instance_status", get(circulation::update_instance_status))
        .route("/check_availability", get(circulation::check_availability))
        .route("/check_borrow_books", get(circulation::check_borrow_books))
        // Users
        .route("/update_login_status", get(users::update_login_status))
        .route("/ban_user", get(users::ban_user))
        // Catalog
        .route("/count_published_books", get(catalog::count_published_books))
        .with_state(state);

    routes
        .merge(openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
