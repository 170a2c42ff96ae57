//! Macros for writing early-return code against [`Result`](crate::Result).
//!
//! Stable Rust does not allow `?` on a foreign two-case type, so
//! [`rail_try!`] provides the same early return and [`attempt!`] goes the
//! other way, letting a block use `?` and capturing its outcome.

/// Unwraps a `Success` or returns its failure from the enclosing function.
///
/// The enclosing function must return [`Result`](crate::Result). The failure
/// cause is converted with `From`, so a narrower error can be returned from
/// a function with a wider one.
///
/// # Examples
///
/// ```
/// use result_rail::{rail_try, Result};
///
/// fn parse_port(raw: &str) -> Result<u16, &'static str> {
///     let non_empty = Some(raw.trim()).filter(|s| !s.is_empty());
///     let trimmed = rail_try!(Result::from_option(non_empty, "empty"));
///     Result::from_std(trimmed.parse::<u16>()).map_err(|_| "not a port")
/// }
///
/// assert_eq!(parse_port(" 8080 ").into_value(), Some(8080));
/// assert_eq!(parse_port("   ").into_error(), Some("empty"));
/// ```
#[macro_export]
macro_rules! rail_try {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Result::Success(value) => value,
            $crate::Result::Failure(error) => {
                return $crate::Result::Failure(::core::convert::From::from(error));
            }
        }
    };
}

/// Evaluates a block that uses `?` and captures its outcome as a
/// [`Result`](crate::Result).
///
/// The block must evaluate to a standard library `Result`. Its error type is
/// taken from the expected failure cause, so `?` converts each error with
/// `From` along the way. This is the block form of
/// [`Result::attempt`](crate::Result::attempt).
///
/// # Examples
///
/// ```
/// use result_rail::{attempt, BoxedError, Result};
///
/// let sum: Result<i32, BoxedError> = attempt!({
///     let a: i32 = "40".parse()?;
///     let b: i32 = "2".parse()?;
///     Ok(a + b)
/// });
/// assert_eq!(sum.into_value(), Some(42));
/// ```
#[macro_export]
macro_rules! attempt {
    ($body:block) => {
        $crate::Result::attempt(|| $body)
    };
}
