use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SEED_USER: &str = "guest@quiz.local";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid QUIZ_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub seed_users: Vec<String>,
}

impl Config {
    /// Reads `QUIZ_ADDR` and `QUIZ_SEED_USERS`, loading a `.env` file first
    /// when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("QUIZ_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let seed_users = match lookup("QUIZ_SEED_USERS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|email| !email.is_empty())
                .map(String::from)
                .collect(),
            None => vec![DEFAULT_SEED_USER.to_string()],
        };

        Ok(Self { addr, seed_users })
    }
}
