//! HTTP request handlers.

pub mod admin_handler;
pub mod hello_handler;
pub mod language_handler;
pub mod user_handler;

pub use admin_handler::admin_routes;
pub use hello_handler::hello_routes;
pub use language_handler::language_routes;
pub use user_handler::user_routes;
