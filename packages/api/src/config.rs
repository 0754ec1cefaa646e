//! # Server configuration from environment variables
//!
//! Read once per process (a `.env` file is honoured through `dotenvy`) and
//! cached. Every variable except `DATABASE_URL` has a default.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | required |
//! | `DATABASE_MAX_CONNECTIONS` | `5` |
//! | `SESSION_SECURE` | `false` |
//! | `SESSION_TTL_DAYS` | `7` |
//! | `PASSWORD_MIN_LENGTH` | `8` |

use std::str::FromStr;
use std::sync::OnceLock;

static CONFIG: OnceLock<ServerConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings for the fullstack server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// Mark the session cookie `Secure` (HTTPS only).
    pub session_secure: bool,
    /// Sessions expire after this many days without activity.
    pub session_ttl_days: u64,
    pub password_min_length: usize,
}

impl ServerConfig {
    /// Load from the process environment, after applying `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            database_url,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            session_secure: parse_or(&lookup, "SESSION_SECURE", false)?,
            session_ttl_days: parse_or(&lookup, "SESSION_TTL_DAYS", 7)?,
            password_min_length: parse_or(&lookup, "PASSWORD_MIN_LENGTH", 8)?,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

/// The process-wide configuration, loaded on first use.
pub fn server_config() -> Result<&'static ServerConfig, ConfigError> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = ServerConfig::from_env()?;
    Ok(CONFIG.get_or_init(|| config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/notes")]))
                .unwrap();
        assert_eq!(config.max_connections, 5);
        assert!(!config.session_secure);
        assert_eq!(config.session_ttl_days, 7);
        assert_eq!(config.password_min_length, 8);
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/notes"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
            ("SESSION_SECURE", "true"),
            ("SESSION_TTL_DAYS", " 30 "),
            ("PASSWORD_MIN_LENGTH", "12"),
        ]))
        .unwrap();
        assert_eq!(config.max_connections, 20);
        assert!(config.session_secure);
        assert_eq!(config.session_ttl_days, 30);
        assert_eq!(config.password_min_length, 12);
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[])),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
    }

    #[test]
    fn invalid_numbers_are_reported() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/notes"),
            ("SESSION_TTL_DAYS", "a week"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "SESSION_TTL_DAYS",
                value: "a week".to_string()
            }
        );
    }
}
