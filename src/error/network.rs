//! Errors raised while talking to the generator endpoints.

use thiserror::Error;

/// Network-specific error variants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("connection failed to '{url}': {message}")]
    ConnectionFailed { url: String, message: String },

    #[error("{operation} timed out")]
    Timeout { operation: String },

    /// Non-2xx response.
    #[error("HTTP {status} error: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("network error: {message}")]
    Other { message: String },
}

impl NetworkError {
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } | NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            NetworkError::InvalidResponse { .. } | NetworkError::Other { .. } => false,
        }
    }

    /// Text shown to the user in a notice.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Não foi possível conectar ao servidor de IA.".to_string()
            }
            NetworkError::Timeout { .. } => "A IA demorou demais para responder.".to_string(),
            NetworkError::HttpStatus { status, .. } if *status >= 500 => {
                "O servidor de IA está com problemas. Tente novamente.".to_string()
            }
            NetworkError::HttpStatus { status, .. } => {
                format!("O servidor de IA recusou o pedido (HTTP {}).", status)
            }
            NetworkError::InvalidResponse { .. } => {
                "A resposta da IA veio em um formato inesperado.".to_string()
            }
            NetworkError::Other { message } => format!("Erro de rede: {}", message),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

/// Classify a reqwest error into a NetworkError.
pub fn classify_reqwest_error(err: &reqwest::Error, url: &str) -> NetworkError {
    if err.is_connect() {
        NetworkError::ConnectionFailed {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if err.is_timeout() {
        NetworkError::Timeout {
            operation: format!("POST {}", url),
        }
    } else if err.is_status() {
        NetworkError::HttpStatus {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            message: err.to_string(),
        }
    } else if err.is_decode() {
        NetworkError::InvalidResponse {
            message: err.to_string(),
        }
    } else {
        NetworkError::Other {
            message: err.to_string(),
        }
    }
}
