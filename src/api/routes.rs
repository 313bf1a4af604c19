//! Application route configuration.

use axum::{
    http::{Method, Uri},
    middleware, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{admin_routes, hello_routes, language_routes, user_routes};
use super::middleware::{exception_middleware, panic_response};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::USER_RESOURCE_PATH;
use crate::errors::AppError;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Demo endpoints
        .merge(hello_routes())
        // User resource
        .nest(USER_RESOURCE_PATH, user_routes())
        // Filtered admin views
        .nest("/admin", admin_routes())
        // Localized messages
        .nest("/api/v1", language_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(no_handler)
        // Panics become 500s, then every error body gets the request description
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(exception_middleware))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fallback for unknown routes
async fn no_handler(method: Method, uri: Uri) -> AppError {
    AppError::not_found(format!("No handler found for {} {}", method, uri.path()))
}
