use crate::result::Result;
use core::result::Result as StdResult;

/// Abstraction over two-case types whose error variant can be remapped.
///
/// Implemented for this crate's [`Result`] and for the standard library
/// `Result`, so helpers can accept either.
///
/// # Type Parameters
///
/// * `E` - The current error type contained in the implementor
///
/// # Associated Types
///
/// * `Success` - The success value type when no error is present
/// * `ErrorOutput<G>` - The output type after mapping the error to type `G`
///
/// # Examples
///
/// ```
/// use result_rail::traits::WithError;
///
/// let result: Result<i32, &str> = Err("original error");
/// let mapped = result.fmap_error(|e| format!("Error: {}", e));
/// assert_eq!(mapped, Err("Error: original error".to_string()));
/// ```
pub trait WithError<E> {
    type Success;

    type ErrorOutput<G>;

    /// Maps the error value using `f`, producing a new container with error type `G`.
    ///
    /// The success case is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::WithError;
    /// use result_rail::Result;
    ///
    /// let result = Result::<i32, u32>::failure(404);
    /// let mapped = result.fmap_error(|code| format!("HTTP {}", code));
    /// assert_eq!(mapped.into_error(), Some("HTTP 404".to_string()));
    /// ```
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G;

    /// Converts the container into this crate's [`Result`].
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::WithError;
    ///
    /// let result: Result<i32, &str> = Ok(42);
    /// assert_eq!(result.to_rail().into_value(), Some(42));
    /// ```
    fn to_rail(self) -> Result<Self::Success, E>;

    /// Converts the container into the standard library `Result`.
    ///
    /// For the standard library `Result` this is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::WithError;
    /// use result_rail::Result;
    ///
    /// let rail = Result::<i32, &str>::failure("closed");
    /// assert_eq!(rail.to_result(), Err("closed"));
    /// ```
    fn to_result(self) -> StdResult<Self::Success, E>;
}

impl<T, E> WithError<E> for StdResult<T, E> {
    type Success = T;
    type ErrorOutput<G> = StdResult<T, G>;

    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_err(f)
    }

    fn to_rail(self) -> Result<T, E> {
        Result::from_std(self)
    }

    fn to_result(self) -> StdResult<T, E> {
        self
    }
}
