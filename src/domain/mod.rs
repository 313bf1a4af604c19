//! Domain layer - Core business entities
//!
//! Plain data types shared by the store, the services and the HTTP layer.
//! No infrastructure dependencies beyond serialization and validation.

pub mod hello;
pub mod user;

pub use hello::HelloWorldBean;
pub use user::{CreateUser, Link, User, UserLinks, UserModel, UserSummary};
