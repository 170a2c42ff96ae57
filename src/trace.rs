//! Tracing integration for result-rail.
//!
//! Emits `tracing` events as results flow through a chain without
//! changing them.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! result-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::{Debug, Display};

use crate::result::Result;

/// Extension trait that logs a result and hands it back untouched.
///
/// # Example
///
/// ```rust,ignore
/// use result_rail::trace::ResultTraceExt;
/// use result_rail::Result;
///
/// let config = load_config()
///     .trace_failure("load_config")
///     .flat_map(validate);
/// ```
pub trait ResultTraceExt: Sized {
    /// Emits a `WARN` event carrying the error when the result is a failure.
    fn trace_failure(self, operation: &str) -> Self;

    /// Emits a `DEBUG` event on success and a `WARN` event on failure.
    fn trace_outcome(self, operation: &str) -> Self;
}

impl<T, E> ResultTraceExt for Result<T, E>
where
    T: Debug,
    E: Display,
{
    fn trace_failure(self, operation: &str) -> Self {
        if let Result::Failure(error) = &self {
            tracing::warn!(operation, error = %error, "operation failed");
        }
        self
    }

    fn trace_outcome(self, operation: &str) -> Self {
        match &self {
            Result::Success(value) => {
                tracing::debug!(operation, value = ?value, "operation succeeded");
            }
            Result::Failure(error) => {
                tracing::warn!(operation, error = %error, "operation failed");
            }
        }
        self
    }
}
