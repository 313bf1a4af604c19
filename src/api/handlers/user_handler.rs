//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::WithRejection;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::USER_RESOURCE_PATH;
use crate::domain::{CreateUser, User, UserModel};
use crate::errors::{AppError, AppResult};
use crate::types::Created;

/// Path parameter holding a user id; malformed ids are a `400`
pub type UserId = WithRejection<Path<i32>, AppError>;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    responses(
        (status = 200, description = "All users in insertion order", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User with a link to the collection", body = UserModel),
        (status = 400, description = "Malformed user ID", body = ExceptionResponse),
        (status = 404, description = "User not found", body = ExceptionResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): UserId,
) -> AppResult<Json<UserModel>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserModel::new(user, USER_RESOURCE_PATH)))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created; Location points at the new user"),
        (status = 400, description = "Validation error", body = ExceptionResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<Created> {
    let saved = state.user_service.create_user(payload).await?;

    let location = format!("{}/{}", USER_RESOURCE_PATH, saved.id);
    tracing::debug!(%location, "location");

    Ok(Created::at(location))
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Malformed user ID", body = ExceptionResponse),
        (status = 404, description = "User not found", body = ExceptionResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): UserId,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::OK)
}
