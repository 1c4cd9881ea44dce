//! Host configuration from environment variables.
//!
//! `PORT` selects the listen port, `GESTIONES_BACKEND_URL` enables the
//! same-origin `/api` proxy, and `GESTIONES_PROXY_TIMEOUT_SECS` bounds each
//! proxied request. Parsing is split into pure helpers so tests never touch
//! the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("GESTIONES_BACKEND_URL must be an http(s) URL, got {0:?}")]
    InvalidBackendUrl(String),
    #[error("GESTIONES_PROXY_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend base URL without a trailing slash; `None` disables the proxy.
    pub backend_url: Option<String>,
    pub proxy_timeout: Duration,
}

impl HostConfig {
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(lookup("PORT").as_deref())?,
            backend_url: parse_backend_url(lookup("GESTIONES_BACKEND_URL").as_deref())?,
            proxy_timeout: parse_timeout_secs(lookup("GESTIONES_PROXY_TIMEOUT_SECS").as_deref())?,
        })
    }
}

fn blank_to_none(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match blank_to_none(raw) {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}

pub(crate) fn parse_backend_url(raw: Option<&str>) -> Result<Option<String>, ConfigError> {
    let Some(v) = blank_to_none(raw) else {
        return Ok(None);
    };
    if !(v.starts_with("http://") || v.starts_with("https://")) {
        return Err(ConfigError::InvalidBackendUrl(v.to_owned()));
    }
    Ok(Some(v.trim_end_matches('/').to_owned()))
}

pub(crate) fn parse_timeout_secs(raw: Option<&str>) -> Result<Duration, ConfigError> {
    match blank_to_none(raw) {
        None => Ok(Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS)),
        Some(v) => match v.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(ConfigError::InvalidTimeout(v.to_owned())),
        },
    }
}
