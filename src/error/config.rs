//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {variable}: {reason}")]
    InvalidValue {
        variable: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid(
        variable: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            variable: variable.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ConfigError::InvalidValue {
                variable, value, ..
            } => format!("Valor inválido '{}' em {}.", value, variable),
        }
    }
}
