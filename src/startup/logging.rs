//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so in that mode logs go to a file under the
//! local data directory. Headless mode logs to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{DEFAULT_LOG_FILTER, ENV_LOG};
use crate::error::SystemError;

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Default log file: `<data_local_dir>/mamae-fit/mamae-fit.log`.
pub fn default_log_path() -> Result<PathBuf, SystemError> {
    dirs::data_local_dir()
        .map(|dir| dir.join("mamae-fit").join("mamae-fit.log"))
        .ok_or(SystemError::NoDataDirectory)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

/// Install the global subscriber.
pub fn init_logging(target: LogTarget) -> Result<(), SystemError> {
    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| SystemError::Logging {
                path: None,
                message: e.to_string(),
            }),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| SystemError::Logging {
                    path: Some(path.clone()),
                    message: e.to_string(),
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| SystemError::Logging {
                    path: Some(path.clone()),
                    message: e.to_string(),
                })?;

            tracing_subscriber::registry()
                .with(env_filter())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .map_err(|e| SystemError::Logging {
                    path: Some(path),
                    message: e.to_string(),
                })
        }
    }
}
