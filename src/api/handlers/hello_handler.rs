//! Hello-world demo handlers.

use axum::{response::Json, routing::get, Router};

use crate::api::AppState;
use crate::config::{HELLO_WORLD_BEAN_MESSAGE, HELLO_WORLD_TEXT};
use crate::domain::HelloWorldBean;

/// Create hello-world routes
pub fn hello_routes() -> Router<AppState> {
    Router::new()
        .route("/hello-world", get(hello_world))
        .route("/hello-world-bean", get(hello_world_bean))
}

/// Plain-text greeting
#[utoipa::path(
    get,
    path = "/hello-world",
    tag = "Hello",
    responses(
        (status = 200, description = "Greeting text", body = String, content_type = "text/plain")
    )
)]
pub async fn hello_world() -> &'static str {
    HELLO_WORLD_TEXT
}

/// Greeting as a JSON bean
#[utoipa::path(
    get,
    path = "/hello-world-bean",
    tag = "Hello",
    responses(
        (status = 200, description = "Greeting bean", body = HelloWorldBean)
    )
)]
pub async fn hello_world_bean() -> Json<HelloWorldBean> {
    Json(HelloWorldBean::now(HELLO_WORLD_BEAN_MESSAGE))
}
