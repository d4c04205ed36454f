//! Settings Models
//!
//! Process configuration, read once from the environment at startup.

use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

/// Namespace used when `DATABASE_NAME` is not set
pub const DEFAULT_DATABASE_NAME: &str = "design_tutor";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Listen address (`HOST`)
    pub host: String,
    /// Listen port (`PORT`)
    pub port: u16,
    /// Document store location (`DATABASE_URL`)
    pub database_url: Option<String>,
    /// Logical database name (`DATABASE_NAME`)
    pub database_name: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: None,
            database_name: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid PORT '{}': {}", raw, e)))?,
            None => defaults.port,
        };

        let config = Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            database_url: get("DATABASE_URL"),
            database_name: get("DATABASE_NAME"),
        };
        config.validate().map_err(AppError::config)?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be between 1 and 65535".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("HOST cannot be empty".to_string());
        }
        Ok(())
    }

    /// Socket address string to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Namespace the document store writes under
    pub fn database_namespace(&self) -> &str {
        self.database_name
            .as_deref()
            .unwrap_or(DEFAULT_DATABASE_NAME)
    }

    pub fn has_database_url(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn has_database_name(&self) -> bool {
        self.database_name.is_some()
    }
}
