//! Startup configuration read from the environment (and `.env`, if present).

use std::net::{Ipv4Addr, SocketAddr};

/// The service always listens on this port, on every interface.
pub const LISTEN_PORT: u16 = 8010;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_username: String,
    pub db_password: String,
    pub db_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            db_host: lookup("APP_DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            db_username: required("APP_DB_USERNAME")?,
            db_password: required("APP_DB_PASSWORD")?,
            db_name: required("APP_DB_NAME")?,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, LISTEN_PORT))
    }
}
