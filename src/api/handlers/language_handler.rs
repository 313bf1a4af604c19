//! Internationalized greeting handler.

use axum::{
    extract::State,
    http::{header::ACCEPT_LANGUAGE, HeaderMap},
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::config::GREETING_MESSAGE_KEY;
use crate::errors::{AppError, AppResult};

/// Create language routes
pub fn language_routes() -> Router<AppState> {
    Router::new().route("/language", get(greeting))
}

/// Greeting in the language picked from `Accept-Language`
#[utoipa::path(
    get,
    path = "/api/v1/language",
    tag = "Internationalization",
    params(
        ("Accept-Language" = Option<String>, Header, description = "Preferred languages, e.g. `en-US,en;q=0.9`")
    ),
    responses(
        (status = 200, description = "Localized greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn greeting(State(state): State<AppState>, headers: HeaderMap) -> AppResult<String> {
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    state
        .messages
        .message_for(GREETING_MESSAGE_KEY, accept_language)
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::internal(format!(
                "No message found under code '{}'",
                GREETING_MESSAGE_KEY
            ))
        })
}
