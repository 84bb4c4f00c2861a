//! Server configuration read from the environment.

use eldervale_narrative::domain::config::{
    DEFAULT_ACTION_LOG_LIMIT, DEFAULT_MAX_TURNS, SessionConfig,
};

use crate::error::AppError;

/// Everything the server needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Configuration applied to every new session.
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, applying defaults for missing
    /// keys: `HOST`, `PORT`, `ELDERVALE_MAX_TURNS`,
    /// `ELDERVALE_ACTION_LOG_LIMIT`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 3000_u16)?;
        let max_turns = parse_or(&lookup, "ELDERVALE_MAX_TURNS", DEFAULT_MAX_TURNS)?;
        let action_log_limit =
            parse_or(&lookup, "ELDERVALE_ACTION_LOG_LIMIT", DEFAULT_ACTION_LOG_LIMIT)?;

        let session = SessionConfig::new(max_turns, action_log_limit)
            .map_err(|e| AppError::Config(format!("ELDERVALE_MAX_TURNS: {e}")))?;

        Ok(Self {
            host,
            port,
            session,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{key} must be a valid number: {e}"))),
        None => Ok(default),
    }
}
