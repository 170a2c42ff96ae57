use crate::result::Result;
use crate::traits::with_error::WithError;
use core::result::Result as StdResult;

/// Recovery and two-sided mapping over containers that carry an error.
pub trait ErrorOps<E>: WithError<E> {
    /// Replaces a failure with the container produced by `recovery`.
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
        Self: Sized;

    /// Maps both sides at once, always producing this crate's [`Result`].
    fn bimap_result<B, G, SuccessF, ErrorF>(
        self,
        success_f: SuccessF,
        error_f: ErrorF,
    ) -> Result<B, G>
    where
        SuccessF: FnOnce(Self::Success) -> B,
        ErrorF: FnOnce(E) -> G,
        Self: Sized;
}

impl<T, E> ErrorOps<E> for StdResult<T, E> {
    #[inline]
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => recovery(error),
        }
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
            Ok(value) => Result::Success(success_f(value)),
            Err(error) => Result::Failure(error_f(error)),
        }
    }
}
