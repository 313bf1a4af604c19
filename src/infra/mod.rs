//! Infrastructure layer - Storage concerns
//!
//! Holds the process-local user store behind the repository abstraction.

pub mod repositories;

pub use repositories::{UserRepository, UserStore};
