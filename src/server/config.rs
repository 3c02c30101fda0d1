//! Environment-driven server configuration.

use crate::server::error::{config::ConfigError, Error};

/// Server configuration loaded from environment variables.
///
/// Call `dotenvy::dotenv()` before [`Config::from_env`] to pick up values from a `.env` file.
pub struct Config {
    /// Connection URL of the Postgres database holding the airplane table
    pub database_url: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables are present
    /// - `Err(Error::ConfigError)` - A required variable is missing or empty
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            database_url: required_env("DATABASE_URL")?,
        })
    }
}

fn required_env(var: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is empty".to_string(),
        }),
        Err(_) => Err(ConfigError::MissingEnvVar(var.to_string())),
    }
}
