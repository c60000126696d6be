//! Result type alias for application operations.

use super::fit_error::FitError;

/// Result using [`FitError`] as the error type.
pub type FitResult<T> = Result<T, FitError>;
