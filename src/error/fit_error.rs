//! Unified error type for the application.

use thiserror::Error;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::generator::GeneratorError;
use super::network::NetworkError;
use super::system::SystemError;

/// Consolidates every domain error behind one type with uniform
/// categorization, retry logic and user messaging.
#[derive(Debug, Error)]
pub enum FitError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    System(#[from] SystemError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FitError::Network(NetworkError::HttpStatus { status, .. }) if *status >= 500 => {
                ErrorCategory::Server
            }
            FitError::Network(_) => ErrorCategory::Network,
            FitError::Generator(_) => ErrorCategory::Client,
            FitError::System(_) => ErrorCategory::System,
            FitError::Config(_) => ErrorCategory::Configuration,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            FitError::Network(err) => err.is_retryable(),
            FitError::Generator(_) | FitError::Config(_) => false,
            FitError::System(err) => err.is_transient(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            FitError::Network(err) => err.user_message(),
            FitError::Generator(_) => super::generator::INTERNAL_ERROR_MESSAGE.to_string(),
            FitError::System(err) => err.user_message(),
            FitError::Config(err) => err.user_message(),
        }
    }

    /// Short code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FitError::Network(err) => err.error_code(),
            FitError::Generator(err) => err.error_code(),
            FitError::System(err) => err.error_code(),
            FitError::Config(_) => "E_CFG_INVALID",
        }
    }
}

impl From<std::io::Error> for FitError {
    fn from(err: std::io::Error) -> Self {
        FitError::System(err.into())
    }
}
