//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{catalog, circulation, health, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Inventory API",
        version = "0.1.0",
        description = "In-memory library inventory: instance circulation, users and bans"
    ),
    paths(
        // Health
        health::main_page,
        health::health_check,
        // Circulation
        circulation::return_book,
        circulation::take_book,
        circulation::update_instance_status,
        circulation::check_availability,
        circulation::check_borrow_books,
        // Users
        users::update_login_status,
        users::ban_user,
        // Catalog
        catalog::count_published_books,
    ),
    components(
        schemas(
            crate::models::Book,
            catalog::PublishedBooksResponse,
            health::HealthResponse,
            crate::repository::TableCounts,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "circulation", description = "Taking, returning and tracking instances"),
        (name = "users", description = "User management"),
        (name = "catalog", description = "Catalog statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
