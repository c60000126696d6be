//! Startup configuration and logging.

mod config;
mod logging;

pub use config::{
    AppConfig, DEFAULT_LOG_FILTER, ENV_ADDR, ENV_ANALYSIS_DELAY_MS, ENV_LOG,
    ENV_PERMISSION_DELAY_MS, ENV_SEED, ENV_SERVER_URL,
};
pub use logging::{default_log_path, init_logging, LogTarget};
