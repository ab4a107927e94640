//! Client configuration parsed from environment variables.
//!
//! Every variable is optional. Values are read through a lookup function so
//! callers (and tests) can supply their own source instead of the process
//! environment.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://admin-system-server.vercel.app/api";
pub const DEFAULT_STATE_DIR: &str = ".admin-console";
pub const DEFAULT_ROLE: &str = "超级管理员";
pub const DEFAULT_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop";

pub const ENV_API_BASE_URL: &str = "ADMIN_API_BASE_URL";
pub const ENV_STATE_DIR: &str = "ADMIN_STATE_DIR";
pub const ENV_DEFAULT_ROLE: &str = "ADMIN_DEFAULT_ROLE";
pub const ENV_DEFAULT_AVATAR: &str = "ADMIN_DEFAULT_AVATAR";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "ADMIN_REQUEST_TIMEOUT_SECS";

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to a value that cannot be used.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every API path is appended to, without a trailing `/`.
    pub api_base_url: String,
    /// Directory backing the durable token store.
    pub state_dir: PathBuf,
    /// Role stamped onto every profile. The backend does not report one.
    pub default_role: String,
    /// Avatar used when the login response carries none.
    pub default_avatar_url: String,
    /// Whole-request timeout. `None` leaves outbound calls unbounded.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            default_role: DEFAULT_ROLE.to_owned(),
            default_avatar_url: DEFAULT_AVATAR_URL.to_owned(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Build config from the process environment.
    ///
    /// - `ADMIN_API_BASE_URL`: API root (default: the hosted admin backend)
    /// - `ADMIN_STATE_DIR`: token store directory (default `.admin-console`)
    /// - `ADMIN_DEFAULT_ROLE`: profile role (default `超级管理员`)
    /// - `ADMIN_DEFAULT_AVATAR`: fallback avatar URL
    /// - `ADMIN_REQUEST_TIMEOUT_SECS`: positive integer; unset means no timeout
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the timeout is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the timeout is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        let api_base_url = var(ENV_API_BASE_URL)
            .map_or(defaults.api_base_url, |url| url.trim_end_matches('/').to_owned());
        let state_dir = var(ENV_STATE_DIR).map_or(defaults.state_dir, PathBuf::from);
        let default_role = var(ENV_DEFAULT_ROLE).unwrap_or(defaults.default_role);
        let default_avatar_url = var(ENV_DEFAULT_AVATAR).unwrap_or(defaults.default_avatar_url);
        let request_timeout = var(ENV_REQUEST_TIMEOUT_SECS)
            .map(|raw| parse_timeout(&raw))
            .transpose()?;

        Ok(Self { api_base_url, state_dir, default_role, default_avatar_url, request_timeout })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue { var: ENV_REQUEST_TIMEOUT_SECS, value: raw.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
