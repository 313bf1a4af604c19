use axum::{
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExceptionResponse {
    pub timestamp: DateTime<Utc>,
    #[schema(example = "ID[999] not found")]
    pub message: String,
    #[schema(example = "uri=/user/999")]
    pub details: String,
}

impl ExceptionResponse {
    pub fn new(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
            details: details.into(),
        }
    }
}

/// Created response helper: `201` with a `Location` header and no body
pub struct Created {
    pub location: String,
}

impl Created {
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl IntoResponse for Created {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, [(LOCATION, self.location)]).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_sets_location() {
        let response = Created::at("/user/4").into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[LOCATION], "/user/4");
    }

    #[test]
    fn test_exception_response_shape() {
        let body = ExceptionResponse::new("ID[1] not found", "uri=/user/1");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["message"], "ID[1] not found");
        assert_eq!(json["details"], "uri=/user/1");
        assert!(json["timestamp"].is_string());
    }
}
