use serde::{Deserialize, Serialize};
use std::{env, net::SocketAddr};
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/storeadmin";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR value: {0}")]
    InvalidBindAddr(String),
    #[error("JWT_SECRET is not set")]
    MissingJwtSecret,
    #[error("JWT_SECRET must not be empty")]
    EmptyJwtSecret,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: SocketAddr,
    pub cors_allow_origin: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup so tests can avoid
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        // Tokens come from the identity service; without its secret nothing can be verified.
        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::MissingJwtSecret)?;
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::EmptyJwtSecret);
        }

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        let cors_allow_origin = lookup("CORS_ALLOW_ORIGIN")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok(Config {
            database_url,
            jwt_secret,
            bind_addr,
            cors_allow_origin,
        })
    }
}
