//! Unified error handling.
//!
//! Domain errors live in their own modules and are unified by [`FitError`]:
//!
//! | Category | Source | Retryable |
//! |----------|--------|-----------|
//! | Network | connection, timeout, decode | Mostly |
//! | Server | generator answered 5xx | Yes |
//! | Client | malformed generator payload | No |
//! | System | io, bind, terminal, logging | Rarely |
//! | Configuration | invalid env value | No |

mod category;
mod config;
mod fit_error;
mod generator;
mod network;
mod result;
mod system;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use fit_error::FitError;
pub use generator::{GeneratorError, INTERNAL_ERROR_MESSAGE};
pub use network::{classify_reqwest_error, NetworkError};
pub use result::FitResult;
pub use system::SystemError;
