//! Free conversion functions between [`Result`], the standard library
//! `Result`, and `Option`.
//!
//! # Examples
//!
//! ```
//! use result_rail::convert::{option_to_result, result_to_std};
//!
//! let r = option_to_result(Some(3), "absent");
//! assert_eq!(result_to_std(r), Ok(3));
//! ```

use crate::result::Result;
use core::result::Result as StdResult;

#[inline]
pub fn std_to_result<T, E>(result: StdResult<T, E>) -> Result<T, E> {
    Result::from_std(result)
}

#[inline]
pub fn result_to_std<T, E>(result: Result<T, E>) -> StdResult<T, E> {
    result.into_std()
}

#[inline]
pub fn option_to_result<T, E>(option: Option<T>, error: E) -> Result<T, E> {
    Result::from_option(option, error)
}

/// Drops the failure cause, keeping only the success value.
#[inline]
pub fn result_to_option<T, E>(result: Result<T, E>) -> Option<T> {
    result.into_value()
}

/// Unwraps a rail result nested inside a standard library one.
#[inline]
pub fn flatten_result<T, E>(result: StdResult<Result<T, E>, E>) -> Result<T, E> {
    Result::from_std(result).flatten()
}

/// Widens the failure cause through `Into`, keeping a success untouched.
#[inline]
pub fn widen_error<T, E, G>(result: Result<T, E>) -> Result<T, G>
where
    E: Into<G>,
{
    result.map_err(Into::into)
}
