//! Application configuration management.
//!
//! Configuration is read once at startup from the process environment, after
//! loading a `.env` file when one is present.
//!
//! # Example
//!
//! ```rust,ignore
//! use function_api::infrastructure::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Listening on {}", config.socket_addr());
//! ```

use std::env;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Application configuration.
///
/// - `app_host`: host address for the HTTP server (`APP_HOST`, default `0.0.0.0`)
/// - `app_port`: port for the HTTP server (`APP_PORT`, default `5000`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub app_host: String,
    pub app_port: u16,
}

impl AppConfig {
    #[must_use]
    pub fn new(app_host: impl Into<String>, app_port: u16) -> Self {
        Self {
            app_host: app_host.into(),
            app_port,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `APP_PORT` is set but is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup` instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_host = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let app_port = get_optional_parsed(&lookup, "APP_PORT", DEFAULT_PORT)?;

        Ok(Self { app_host, app_port })
    }

    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

/// Gets an optional value and parses it, with a default value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the value is set but cannot be parsed.
fn get_optional_parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr<Err = ParseIntError>,
{
    lookup(key).map_or_else(
        || Ok(default),
        |value| {
            value
                .trim()
                .parse()
                .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        },
    )
}
