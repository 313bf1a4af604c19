//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// Users
// =============================================================================

/// Base path of the user resource
pub const USER_RESOURCE_PATH: &str = "/user";

// =============================================================================
// Demo endpoints
// =============================================================================

/// Plain-text body of `GET /hello-world`
pub const HELLO_WORLD_TEXT: &str = "Hello world";

/// Message carried by `GET /hello-world-bean`
pub const HELLO_WORLD_BEAN_MESSAGE: &str = "Hello World";

// =============================================================================
// Internationalization
// =============================================================================

/// Locale used when the request names none we can serve
pub const DEFAULT_LOCALE: &str = "ko";

/// Message key of the localized greeting
pub const GREETING_MESSAGE_KEY: &str = "greeting.message";

// =============================================================================
// Errors
// =============================================================================

/// Message reported for request bodies that fail their constraints
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation Failed";
