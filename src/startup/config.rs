//! Runtime configuration.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ConfigError;

pub const ENV_ADDR: &str = "MAMAE_FIT_ADDR";
pub const ENV_ANALYSIS_DELAY_MS: &str = "MAMAE_FIT_ANALYSIS_DELAY_MS";
pub const ENV_PERMISSION_DELAY_MS: &str = "MAMAE_FIT_PERMISSION_DELAY_MS";
pub const ENV_SEED: &str = "MAMAE_FIT_SEED";
pub const ENV_SERVER_URL: &str = "MAMAE_FIT_SERVER_URL";
pub const ENV_LOG: &str = "MAMAE_FIT_LOG";

/// Default log filter when `MAMAE_FIT_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "mamae_fit=info";

/// Configuration for the app and its generator server.
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```ignore
/// use mamae_fit::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_analysis_delay(Duration::from_millis(10))
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the embedded generator server binds to (default: 127.0.0.1:3040)
    pub addr: SocketAddr,
    /// Simulated analysis time (default: 3s)
    pub analysis_delay: Duration,
    /// Simulated permission prompt time (default: 1s)
    pub permission_delay: Duration,
    /// Seed for the generator RNG; entropy when unset
    pub seed: Option<u64>,
    /// Remote generator server; the embedded one is used when unset
    pub server_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3040)),
            analysis_delay: Duration::from_millis(3000),
            permission_delay: Duration::from_millis(1000),
            seed: None,
            server_url: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_analysis_delay(mut self, delay: Duration) -> Self {
        self.analysis_delay = delay;
        self
    }

    pub fn with_permission_delay(mut self, delay: Duration) -> Self {
        self.permission_delay = delay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Whether the app should start its own generator server.
    pub fn uses_embedded_server(&self) -> bool {
        self.server_url.is_none()
    }

    /// Base URL the client talks to.
    pub fn base_url(&self) -> String {
        match &self.server_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}", self.addr),
        }
    }

    /// Read the configuration from `MAMAE_FIT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_ADDR) {
            config.addr = raw
                .parse()
                .map_err(|_| ConfigError::invalid(ENV_ADDR, &raw, "expected host:port"))?;
        }
        if let Some(raw) = lookup(ENV_ANALYSIS_DELAY_MS) {
            config.analysis_delay = parse_millis(ENV_ANALYSIS_DELAY_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PERMISSION_DELAY_MS) {
            config.permission_delay = parse_millis(ENV_PERMISSION_DELAY_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid(ENV_SEED, &raw, "expected an unsigned integer"))?;
            config.seed = Some(seed);
        }
        if let Some(raw) = lookup(ENV_SERVER_URL) {
            if !(raw.starts_with("http://") || raw.starts_with("https://")) {
                return Err(ConfigError::invalid(
                    ENV_SERVER_URL,
                    &raw,
                    "expected an http(s) URL",
                ));
            }
            config.server_url = Some(raw);
        }

        Ok(config)
    }
}

fn parse_millis(variable: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::invalid(variable, raw, "expected milliseconds"))
}
