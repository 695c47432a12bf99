//! Server configuration
//!
//! Loads configuration from environment variables.

use std::env;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
}

/// Decision server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host (default "0.0.0.0")
    pub host: String,

    /// Bind port (default 3000)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".into(), port: 3000 }
    }
}

impl ServerConfig {
    /// Read `HIFZ_ACCESS_ADDR` and `PORT`, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(env::var("HIFZ_ACCESS_ADDR").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match port {
            Some(p) => p.trim().parse().map_err(|_| ConfigError::InvalidPort(p))?,
            None => defaults.port,
        };
        Ok(Self { host: host.unwrap_or(defaults.host), port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
