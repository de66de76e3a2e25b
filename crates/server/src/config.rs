use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL or DBHOST must be set")]
    MissingDatabaseUrl,
    #[error("invalid BIND_ADDRESS {0:?}: {1}")]
    InvalidBindAddress(String, AddrParseError),
    #[error("invalid value for {0}: {1:?} (expected true or false)")]
    InvalidFlag(&'static str, String),
    #[error("invalid SESSION_TTL_MINUTES {0:?}: expected a positive number of minutes")]
    InvalidSessionTtl(String),
}

/// Server settings read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// Whether form posts must carry the session's CSRF token
    pub csrf_enabled: bool,
    /// Whether the session cookie is marked `Secure`
    pub session_secure: bool,
    /// Idle minutes after which a session expires
    pub session_ttl_minutes: i64,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = match (var("DATABASE_URL"), var("DBHOST")) {
            (Some(url), _) => url,
            (None, Some(host)) => format!("postgresql://{host}/course_project"),
            (None, None) => return Err(ConfigError::MissingDatabaseUrl),
        };

        let bind_address = var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address: SocketAddr = bind_address
            .parse()
            .map_err(|e| ConfigError::InvalidBindAddress(bind_address, e))?;

        let session_ttl_minutes = match var("SESSION_TTL_MINUTES") {
            Some(value) => value
                .trim()
                .parse()
                .ok()
                .filter(|minutes: &i64| *minutes > 0)
                .ok_or(ConfigError::InvalidSessionTtl(value))?,
            None => DEFAULT_SESSION_TTL_MINUTES,
        };

        Ok(Self {
            database_url,
            bind_address,
            csrf_enabled: parse_flag("CSRF_ENABLED", var("CSRF_ENABLED"), true)?,
            session_secure: parse_flag("SESSION_SECURE", var("SESSION_SECURE"), false)?,
            session_ttl_minutes,
        })
    }
}

fn parse_flag(
    name: &'static str,
    value: Option<String>,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag(name, value)),
    }
}
