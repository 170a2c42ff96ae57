use crate::result::core::Result;
use crate::traits::{ErrorCategory, ErrorOps, WithError};
use crate::types::alloc_type::{String, ToString};
use core::fmt::{self, Display};
use core::result::Result as StdResult;

/// Renders the diagnostic description of a result.
///
/// The format is `Result.success( <value> )` or `Result.failure( <error> )`,
/// using each payload's own `Display`. It is meant for logs and messages and
/// is never parsed back.
///
/// # Examples
///
/// ```
/// use result_rail::Result;
///
/// assert_eq!(Result::<i32, &str>::success(3).to_string(), "Result.success( 3 )");
/// assert_eq!(Result::<i32, &str>::failure("gone").to_string(), "Result.failure( gone )");
/// ```
impl<T: Display, E: Display> Display for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Result::Success(value) => write!(f, "Result.success( {value} )"),
            Result::Failure(error) => write!(f, "Result.failure( {error} )"),
        }
    }
}

impl<T: Display, E: Display> Result<T, E> {
    /// Returns the diagnostic description, as produced by `Display`.
    ///
    /// Both payload types need `Display`, even when only one of them is
    /// present. `Result<(), E>` therefore has no description; render its
    /// error with [`error`](Result::error) instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// let r = Result::<(), &str>::failure("io");
    /// assert_eq!(r.error().map(|e| e.to_string()), Some("io".to_string()));
    /// assert_eq!(Result::<u8, &str>::failure("io").describe(), "Result.failure( io )");
    /// ```
    #[must_use]
    #[inline]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    #[inline]
    fn from(result: StdResult<T, E>) -> Self {
        Self::from_std(result)
    }
}

/// Lets a rail result flow back into code that uses `?`.
///
/// # Examples
///
/// ```
/// use result_rail::Result;
///
/// fn parse(s: &str) -> std::result::Result<i32, std::num::ParseIntError> {
///     let rail = Result::from_std(s.parse::<i32>()).map(|n| n * 2);
///     let n: std::result::Result<i32, _> = rail.into();
///     Ok(n?)
/// }
///
/// assert_eq!(parse("4"), Ok(8));
/// ```
impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}

/// `lift` creates `Success` values and `handle_error` creates `Failure` values.
///
/// # Examples
///
/// ```
/// use result_rail::traits::ErrorCategory;
/// use result_rail::Result;
///
/// let ok: Result<i32, String> = <Result<(), String>>::lift(42);
/// assert!(ok.is_success());
///
/// let failed: Result<i32, String> = <Result<(), String>>::handle_error("boom".to_string());
/// assert!(failed.is_failure());
/// ```
impl<E> ErrorCategory<E> for Result<(), E> {
    type ErrorFunctor<T> = Result<T, E>;

    #[inline]
    fn lift<T>(value: T) -> Result<T, E> {
        Result::Success(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> Result<T, E> {
        Result::Failure(error)
    }
}

impl<T, E> WithError<E> for Result<T, E> {
    type Success = T;
    type ErrorOutput<G> = Result<T, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_err(f)
    }

    #[inline]
    fn to_rail(self) -> Result<T, E> {
        self
    }

    #[inline]
    fn to_result(self) -> StdResult<T, E> {
        self.into_std()
    }
}

impl<T, E> ErrorOps<E> for Result<T, E> {
    #[inline]
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        self.or_else(recovery)
    }

    #[inline]
    fn bimap_result<B, G, SuccessF, ErrorF>(
        self,
        success_f: SuccessF,
        error_f: ErrorF,
    ) -> Result<B, G>
    where
        SuccessF: FnOnce(T) -> B,
        ErrorF: FnOnce(E) -> G,
    {
        match self {
            Result::Success(value) => Result::Success(success_f(value)),
            Result::Failure(error) => Result::Failure(error_f(error)),
        }
    }
}
