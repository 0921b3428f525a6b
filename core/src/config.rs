//! Client settings.
//!
//! A flat settings object, read once when the client is built and never
//! mutated afterwards.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::endpoint::Endpoint;
use crate::error::{ApiError, Result};

pub const DEFAULT_PROTO: &str = "https";
pub const DEFAULT_HOST: &str = "api.tehnomir.com.ua";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 1_000;
pub const DEFAULT_RESPONSE_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_MAX_IDLE_CONNECTIONS: usize = 100;
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 60;

/// Air delivery surcharge.
pub const PRICE_AVIA: f64 = 9.0;
/// Sea delivery surcharge.
pub const PRICE_SEA: f64 = 4.0;
/// Volume-weight surcharge.
pub const PRICE_VOLUME: f64 = 15.0;

#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub token: String,
    pub proto: String,
    pub host: String,
    /// Bound on the whole request, from connect to the last body byte.
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
    /// Bound on waiting for the response headers once the request is sent.
    pub response_timeout_ms: u64,
    pub max_idle_connections: usize,
    pub idle_timeout_secs: u64,
    pub price_avia: f64,
    pub price_sea: f64,
    pub price_volume: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            proto: DEFAULT_PROTO.to_string(),
            host: DEFAULT_HOST.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            response_timeout_ms: DEFAULT_RESPONSE_TIMEOUT_MS,
            max_idle_connections: DEFAULT_MAX_IDLE_CONNECTIONS,
            idle_timeout_secs: DEFAULT_IDLE_TIMEOUT_SECS,
            price_avia: PRICE_AVIA,
            price_sea: PRICE_SEA,
            price_volume: PRICE_VOLUME,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("proto", &self.proto)
            .field("host", &self.host)
            .field("timeout_ms", &self.timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("response_timeout_ms", &self.response_timeout_ms)
            .field("max_idle_connections", &self.max_idle_connections)
            .field("idle_timeout_secs", &self.idle_timeout_secs)
            .field("price_avia", &self.price_avia)
            .field("price_sea", &self.price_sea)
            .field("price_volume", &self.price_volume)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Read settings from `TEHNOMIR_*` environment variables, falling back to
    /// the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, fallback: String| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
        };
        let number = |key: &str, fallback: u64| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(fallback)
        };

        Self {
            token: text("TEHNOMIR_TOKEN", defaults.token.clone()),
            proto: text("TEHNOMIR_PROTO", defaults.proto.clone()),
            host: text("TEHNOMIR_HOST", defaults.host.clone()),
            timeout_ms: number("TEHNOMIR_TIMEOUT_MS", defaults.timeout_ms),
            ..defaults
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(ApiError::Config("token is empty".to_string()));
        }
        if self.proto != "http" && self.proto != "https" {
            return Err(ApiError::Config(format!("unsupported scheme {:?}", self.proto)));
        }
        if self.host.trim().is_empty() || self.host.contains('/') {
            return Err(ApiError::Config(format!("invalid host {:?}", self.host)));
        }
        Ok(())
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}://{}/{}", self.proto, self.host, endpoint.path())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}
