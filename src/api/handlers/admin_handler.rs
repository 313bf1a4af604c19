//! Admin user handlers.
//!
//! Same lookups as the user resource, but responses only expose the id and
//! name of each user.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::WithRejection;

use crate::api::handlers::user_handler::UserId;
use crate::api::AppState;
use crate::domain::UserSummary;
use crate::errors::AppResult;

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(list_users))
        .route("/user/:id", get(get_user))
}

/// List all users (id and name only)
#[utoipa::path(
    get,
    path = "/admin/user",
    tag = "Admin",
    responses(
        (status = 200, description = "User summaries", body = Vec<UserSummary>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserSummary>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}

/// Get user summary by ID
#[utoipa::path(
    get,
    path = "/admin/user/{id}",
    tag = "Admin",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User summary", body = UserSummary),
        (status = 404, description = "User not found", body = ExceptionResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): UserId,
) -> AppResult<Json<UserSummary>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserSummary::from(user)))
}
