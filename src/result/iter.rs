use crate::result::core::Result;

/// Borrowing iterator over the success value, created by [`Result::iter`].
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator over the success value, created by [`Result::iter_mut`].
pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Consuming iterator over the success value.
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Result<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> Result<T, E> {
    /// Returns an iterator yielding the success value once, or nothing on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Result;
    ///
    /// let r = Result::<i32, &str>::success(7);
    /// assert_eq!(r.iter().next(), Some(&7));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.value(),
        }
    }

    /// Returns a mutable iterator over the success value.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match self {
            Result::Success(value) => IterMut { inner: Some(value) },
            Result::Failure(_) => IterMut { inner: None },
        }
    }
}

/// Collects an iterator of results into a single result.
///
/// Successes are gathered into `V` until the first failure, which stops the
/// iteration and is returned unchanged. Later items are not pulled.
///
/// # Examples
///
/// ```
/// use result_rail::Result;
///
/// let all: Result<Vec<i32>, &str> =
///     vec![Result::success(1), Result::success(2)].into_iter().collect();
/// assert_eq!(all.into_value(), Some(vec![1, 2]));
///
/// let first_failure: Result<Vec<i32>, &str> =
///     vec![Result::success(1), Result::failure("a"), Result::failure("b")].into_iter().collect();
/// assert_eq!(first_failure.into_error(), Some("a"));
/// ```
impl<A, E, V> FromIterator<Result<A, E>> for Result<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Result::Success(value) => Some(value),
                Result::Failure(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Result::Failure(error),
            None => Result::Success(collected),
        }
    }
}
