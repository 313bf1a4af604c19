//! Global exception handling.
//!
//! Every `AppError` response carries an [`ErrorReport`] extension. This
//! middleware rewrites those responses so the `ExceptionResponse.details`
//! field describes the failed request (`uri=/user/999`), unless the error
//! already supplied its own details.

use std::any::Any;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

use crate::errors::{AppError, ErrorReport};
use crate::types::ExceptionResponse;

/// Complete error bodies with the request description.
pub async fn exception_middleware(request: Request, next: Next) -> Response {
    let description = describe(&request);
    let response = next.run(request).await;

    let report = response
        .extensions()
        .get::<ErrorReport>()
        .filter(|report| report.details.is_none())
        .cloned();
    let Some(report) = report else {
        return response;
    };

    tracing::debug!(status = %response.status(), message = %report.message, %description, "request failed");

    let body = ExceptionResponse::new(report.message.clone(), description);
    let mut rewritten = (response.status(), Json(body)).into_response();
    rewritten.extensions_mut().insert(report);
    rewritten
}

/// Convert a handler panic into a 500 `ExceptionResponse`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    AppError::internal(message).into_response()
}

fn describe(request: &Request) -> String {
    format!("uri={}", request.uri().path())
}
