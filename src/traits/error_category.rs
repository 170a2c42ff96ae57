use crate::traits::WithError;
use core::result::Result as StdResult;

/// Lifts plain values and errors into a two-case container.
///
/// The implementor is a marker (`Result<(), E>`) naming the container family;
/// [`ErrorFunctor`](ErrorCategory::ErrorFunctor) is the container for a
/// given success type.
pub trait ErrorCategory<E> {
    type ErrorFunctor<T>: WithError<E, Success = T>;

    /// Wraps `value` as a success of the category's container.
    ///
    /// Prefer [`Result::success`](crate::Result::success) when the concrete
    /// type is known; `lift` is for code generic over the container family.
    fn lift<T>(value: T) -> Self::ErrorFunctor<T>;

    /// Wraps `error` as a failure of the category's container.
    ///
    /// The generic counterpart of [`Result::failure`](crate::Result::failure).
    fn handle_error<T>(error: E) -> Self::ErrorFunctor<T>;
}

impl<E> ErrorCategory<E> for StdResult<(), E> {
    type ErrorFunctor<T> = StdResult<T, E>;

    #[inline]
    fn lift<T>(value: T) -> StdResult<T, E> {
        Ok(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> StdResult<T, E> {
        Err(error)
    }
}
