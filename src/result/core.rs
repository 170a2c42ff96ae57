use crate::types::BoxedError;
use core::result::Result as StdResult;

/// Two-case container holding either a success value or a failure cause.
///
/// `Result<T, E>` represents the outcome of an operation that either produced
/// a value of type `T` or failed with an error of type `E`. A value is in
/// exactly one of the two states for its whole lifetime: every combinator
/// consumes `self` and builds a new `Result` instead of mutating in place.
///
/// Failure is absorbing. Once a chain reaches `Failure`, [`map`](Result::map),
/// [`try_map`](Result::try_map) and [`flat_map`](Result::flat_map) skip their
/// transforms and hand the same error forward unchanged.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure cause, [`BoxedError`] unless stated otherwise
///
/// # Variants
///
/// * `Success(T)` - Contains the value produced by the operation
/// * `Failure(E)` - Contains the cause of the failure
///
/// # Examples
///
/// ```
/// use result_rail::Result;
///
/// let ok = Result::<i32, &str>::success(5);
/// assert!(ok.is_success());
/// assert_eq!(ok.map(|x| x * 2).into_value(), Some(10));
///
/// let failed = Result::<i32, &str>::failure("bad input");
/// assert!(failed.is_failure());
/// assert_eq!(failed.error(), Some(&"bad input"));
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Result<T, E = BoxedError> {
    Success(T),
    Failure(E),
}

impl<T, E> Result<T, E> {
    /// Wraps a success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// let r = Result::<i32, &str>::success(42);
    /// assert_eq!(r.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a failure cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// let r = Result::<i32, &str>::failure("missing");
    /// assert_eq!(r.into_error(), Some("missing"));
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Converts a standard library result, mapping `Ok` to `Success` and `Err` to `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// let r = Result::from_std("7".parse::<i32>());
    /// assert_eq!(r.into_value(), Some(7));
    /// ```
    #[inline]
    pub fn from_std(result: StdResult<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Runs a closure written with `?` and captures its outcome.
    ///
    /// The closure uses the standard `Result` so the `?` operator works
    /// inside it. Whatever it returns is converted with [`from_std`](Result::from_std).
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{BoxedError, Result};
    ///
    /// let r: Result<i32, BoxedError> = Result::attempt(|| {
    ///     let a: i32 = "20".parse()?;
    ///     let b: i32 = "22".parse()?;
    ///     Ok(a + b)
    /// });
    /// assert_eq!(r.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn attempt<F>(f: F) -> Self
    where
        F: FnOnce() -> StdResult<T, E>,
    {
        Self::from_std(f())
    }

    /// Builds a result from an option, using `error` when the option is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// let r = Result::from_option(None::<i32>, "absent");
    /// assert_eq!(r.into_error(), Some("absent"));
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>, error: E) -> Self {
        match option {
            Some(value) => Self::Success(value),
            None => Self::Failure(error),
        }
    }

    /// Builds a result from an option, computing the error lazily when the option is empty.
    #[inline]
    pub fn from_option_with<F>(option: Option<T>, error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match option {
            Some(value) => Self::Success(value),
            None => Self::Failure(error()),
        }
    }

    /// Returns `true` if the result holds a success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// assert!(Result::<i32, &str>::success(1).is_success());
    /// assert!(!Result::<i32, &str>::failure("no").is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the result holds a failure cause.
    ///
    /// Always the complement of [`is_success`](Result::is_success).
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns `true` if the result is a success and the value matches `predicate`.
    #[must_use]
    #[inline]
    pub fn is_success_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if the result is a failure and the error matches `predicate`.
    #[must_use]
    #[inline]
    pub fn is_failure_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    /// Borrows the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// let r = Result::<i32, &str>::success(3);
    /// assert_eq!(r.value(), Some(&3));
    /// assert_eq!(r.error(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure cause, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Moves the success value out, discarding a failure.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Moves the failure cause out, discarding a success.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts `&Result<T, E>` into `Result<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Converts `&mut Result<T, E>` into `Result<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Transforms the success value with an infallible function.
    ///
    /// A failure is returned unchanged and `f` is never called.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `T` to type `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// let doubled = Result::<i32, &str>::success(21).map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    ///
    /// let skipped = Result::<i32, &str>::failure("bad").map(|x| x * 2);
    /// assert_eq!(skipped.into_error(), Some("bad"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Result::Success(f(value)),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Transforms the success value with a function that may itself fail.
    ///
    /// An upstream failure is returned unchanged and `f` is never called.
    /// On success `f` runs; `Ok(u)` becomes `Success(u)` and `Err(x)` is
    /// captured as `Failure(x.into())`, so a failing transform never escapes
    /// this call. The error produced by `f` replaces any context the value
    /// carried; use [`flat_map`](Result::flat_map) when the transform already
    /// speaks in terms of this type.
    ///
    /// # Arguments
    ///
    /// * `f` - A transform reporting failure through the standard `Result`
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{BoxedError, Result};
    ///
    /// let parsed: Result<i32, BoxedError> = Result::success("42").try_map(|s| s.parse::<i32>());
    /// assert_eq!(parsed.into_value(), Some(42));
    ///
    /// let broken: Result<i32, BoxedError> =
    ///     Result::success("forty").try_map(|s| s.parse::<i32>());
    /// assert!(broken.is_failure());
    /// ```
    #[inline]
    pub fn try_map<U, X, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> StdResult<U, X>,
        X: Into<E>,
    {
        match self {
            Self::Success(value) => match f(value) {
                Ok(mapped) => Result::Success(mapped),
                Err(error) => Result::Failure(error.into()),
            },
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Transforms the success value, converting a panic inside `f` into a failure.
    ///
    /// The panic payload is captured with [`std::panic::catch_unwind`] and
    /// stored as [`Panicked`](crate::types::Panicked). The process-wide panic
    /// hook still runs before the unwind is caught.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{BoxedError, Result};
    ///
    /// let r: Result<i32, BoxedError> = Result::success(0).map_catch_unwind(|d: i32| {
    ///     if d == 0 {
    ///         panic!("division by zero");
    ///     }
    ///     10 / d
    /// });
    /// assert!(r.is_failure());
    /// ```
    #[cfg(feature = "std")]
    pub fn map_catch_unwind<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
        E: From<crate::types::Panicked>,
    {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        match self {
            Self::Success(value) => match catch_unwind(AssertUnwindSafe(move || f(value))) {
                Ok(mapped) => Result::Success(mapped),
                Err(payload) => {
                    let panicked = crate::types::Panicked::from_payload(payload);
                    #[cfg(feature = "tracing")]
                    tracing::error!(panic_message = panicked.message(), "transform panicked");
                    Result::Failure(E::from(panicked))
                }
            },
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Chains a computation that returns a `Result` of its own.
    ///
    /// A failure is returned unchanged and `f` is never called. On success
    /// the result of `f` is returned as is, with no extra wrapping and no
    /// failure capture.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next step of the chain
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// fn half(x: i32) -> Result<i32, &'static str> {
    ///     if x % 2 == 0 {
    ///         Result::success(x / 2)
    ///     } else {
    ///         Result::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Result::success(8).flat_map(half).into_value(), Some(4));
    /// assert_eq!(Result::success(7).flat_map(half).into_error(), Some("odd"));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Alias of [`flat_map`](Result::flat_map) following the standard library's naming.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.flat_map(f)
    }

    /// Transforms the failure cause, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// let r = Result::<i32, u16>::failure(404).map_err(|code| format!("HTTP {code}"));
    /// assert_eq!(r.into_error(), Some("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Result<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(f(error)),
        }
    }

    /// Calls `op` with the failure cause, otherwise returns the success as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// let r = Result::<i32, &str>::failure("cache miss")
    ///     .or_else(|_| Result::<i32, &str>::success(0));
    /// assert_eq!(r.into_value(), Some(0));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> Result<T, G>
    where
        F: FnOnce(E) -> Result<T, G>,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => op(error),
        }
    }

    /// Calls `f` with a reference to the success value and returns `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the failure cause and returns `self` unchanged.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Returns the success value or `default`.
    #[must_use]
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the failure cause.
    #[must_use]
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Returns the success value or `T::default()`.
    #[must_use]
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Applies `f` to the success value, or returns `default` on failure.
    #[must_use]
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(_) => default,
        }
    }

    /// Folds both cases into a single value.
    #[must_use]
    #[inline]
    pub fn map_or_else<U, D, F>(self, on_failure: D, on_success: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Converts into the standard library `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// let r = Result::<i32, &str>::success(1);
    /// assert_eq!(r.into_std(), Ok(1));
    /// ```
    #[inline]
    pub fn into_std(self) -> StdResult<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// let nested = Result::<Result<i32, &str>, &str>::success(Result::success(3));
    /// assert_eq!(nested.flatten().into_value(), Some(3));
    /// ```
    #[inline]
    pub fn flatten(self) -> Result<T, E> {
        self.flat_map(|inner| inner)
    }
}
