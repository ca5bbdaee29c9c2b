use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// TTL for cached listing payloads, in seconds.
    pub listing_cache_ttl_secs: u64,

    /// Credentials for the bootstrap admin seeded when no admin exists.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            listing_cache_ttl_secs: std::env::var("LISTING_CACHE_TTL_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(60),
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        })
    }
}
