//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_LOCALE, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Language code used when `Accept-Language` matches no bundle
    pub default_locale: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first when one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            default_locale: env::var("DEFAULT_LOCALE")
                .map(|v| v.trim().to_lowercase())
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.default_locale, "ko");
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }
}
