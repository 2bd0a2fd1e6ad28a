//! Process-level concerns: configuration and the HTTP server lifecycle.

pub mod config;
pub mod server;

pub use config::{AppConfig, ConfigError};
pub use server::{run, serve_until};
