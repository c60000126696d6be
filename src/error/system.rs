//! System-related error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("I/O error during {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to bind generator server to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("terminal error: {message}")]
    Terminal { message: String },

    #[error("could not set up logging at {path:?}: {message}")]
    Logging {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("could not determine the local data directory")]
    NoDataDirectory,
}

impl SystemError {
    /// Only interrupted or would-block I/O is worth repeating.
    pub fn is_transient(&self) -> bool {
        match self {
            SystemError::Io { source, .. } => matches!(
                source.kind(),
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock
            ),
            _ => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            SystemError::Bind { addr, .. } => {
                format!("Não foi possível iniciar o servidor em {}.", addr)
            }
            SystemError::NoDataDirectory => {
                "Não foi possível localizar a pasta de dados do usuário.".to_string()
            }
            other => format!("Erro do sistema: {}", other),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::Io { .. } => "E_SYS_IO",
            SystemError::Bind { .. } => "E_SYS_BIND",
            SystemError::Terminal { .. } => "E_SYS_TERM",
            SystemError::Logging { .. } => "E_SYS_LOG",
            SystemError::NoDataDirectory => "E_SYS_NODATA",
        }
    }
}

impl From<std::io::Error> for SystemError {
    fn from(source: std::io::Error) -> Self {
        SystemError::Io {
            operation: "io".to_string(),
            source,
        }
    }
}
