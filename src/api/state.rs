//! Application state - Dependency injection container.
//!
//! Built once at startup and shared by every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::UserStore;
use crate::services::{MessageSource, UserManager, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Localized message lookup
    pub messages: Arc<MessageSource>,
}

impl AppState {
    /// Create application state backed by a freshly seeded user store.
    pub fn from_config(config: &Config) -> Self {
        Self::with_store(Arc::new(UserStore::new()), config)
    }

    /// Create application state around an existing store.
    pub fn with_store(store: Arc<UserStore>, config: &Config) -> Self {
        Self::new(
            Arc::new(UserManager::new(store)),
            Arc::new(MessageSource::new(config.default_locale.clone())),
        )
    }

    /// Create new application state with manually injected services.
    pub fn new(user_service: Arc<dyn UserService>, messages: Arc<MessageSource>) -> Self {
        Self {
            user_service,
            messages,
        }
    }
}
