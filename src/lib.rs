//! restful-web - A small REST API around an in-memory user resource
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and request/response shapes
//! - **services**: Application use cases and localized messages
//! - **infra**: The in-memory user store
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Pick host and port explicitly
//! cargo run -- serve --host 127.0.0.1 --port 9000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CreateUser, User};
pub use errors::{AppError, AppResult};
pub use infra::{UserRepository, UserStore};
