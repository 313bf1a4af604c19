//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{admin_handler, hello_handler, language_handler, user_handler};
use crate::domain::{CreateUser, HelloWorldBean, Link, User, UserLinks, UserModel, UserSummary};
use crate::types::ExceptionResponse;

/// OpenAPI documentation for the REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API TEST",
        version = "1.0",
        description = "Swagger document for the REST API TEST service",
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::delete_user,
        // Admin endpoints
        admin_handler::list_users,
        admin_handler::get_user,
        // Demo endpoints
        hello_handler::hello_world,
        hello_handler::hello_world_bean,
        language_handler::greeting,
    ),
    components(
        schemas(
            User,
            CreateUser,
            UserSummary,
            UserModel,
            UserLinks,
            Link,
            HelloWorldBean,
            ExceptionResponse,
        )
    ),
    tags(
        (name = "Users", description = "User resource CRUD"),
        (name = "Admin", description = "Restricted user views"),
        (name = "Hello", description = "Hello-world demo endpoints"),
        (name = "Internationalization", description = "Locale-resolved messages")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_paths() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "REST API TEST");
        assert!(doc.paths.paths.contains_key("/user"));
        assert!(doc.paths.paths.contains_key("/user/{id}"));
        assert!(doc.paths.paths.contains_key("/api/v1/language"));
    }
}
