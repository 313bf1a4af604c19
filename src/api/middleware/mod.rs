//! API middleware.

mod exception;

pub use exception::{exception_middleware, panic_response};
