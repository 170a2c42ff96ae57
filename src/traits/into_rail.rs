//! Extension traits for moving standard library values onto the rail.
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::{IntoRail, OptionRailExt};
//!
//! let parsed = "12".parse::<u32>().into_rail();
//! assert_eq!(parsed.into_value(), Some(12));
//!
//! let missing = None::<u32>.ok_or_failure("no port configured");
//! assert_eq!(missing.into_error(), Some("no port configured"));
//! ```

use crate::result::Result;
use core::result::Result as StdResult;

/// Converts a standard library `Result` into this crate's [`Result`].
pub trait IntoRail<T, E> {
    /// Maps `Ok` to `Success` and `Err` to `Failure`.
    fn into_rail(self) -> Result<T, E>;

    /// Converts and widens the error through `Into` in one step.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::IntoRail;
    /// use result_rail::{BoxedError, Result};
    ///
    /// let r: Result<u32, BoxedError> = "x".parse::<u32>().into_rail_with();
    /// assert!(r.is_failure());
    /// ```
    fn into_rail_with<G>(self) -> Result<T, G>
    where
        E: Into<G>;
}

impl<T, E> IntoRail<T, E> for StdResult<T, E> {
    #[inline]
    fn into_rail(self) -> Result<T, E> {
        Result::from_std(self)
    }

    #[inline]
    fn into_rail_with<G>(self) -> Result<T, G>
    where
        E: Into<G>,
    {
        Result::from_std(self).map_err(Into::into)
    }
}

/// Converts an `Option` into this crate's [`Result`].
pub trait OptionRailExt<T> {
    /// Uses `error` as the failure cause when the option is `None`.
    fn ok_or_failure<E>(self, error: E) -> Result<T, E>;

    /// Computes the failure cause lazily when the option is `None`.
    fn ok_or_failure_with<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E;
}

impl<T> OptionRailExt<T> for Option<T> {
    #[inline]
    fn ok_or_failure<E>(self, error: E) -> Result<T, E> {
        Result::from_option(self, error)
    }

    #[inline]
    fn ok_or_failure_with<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        Result::from_option_with(self, error)
    }
}
