use crate::types::{ErrorValue, ErrorVec};
use crate::validation::Validation;

/// Collects errors from independent checks without short-circuiting.
///
/// Each call appends zero or one error, in call order, so the final list always
/// follows the order in which checks are declared.
///
/// # Examples
///
/// ```
/// use outcome_rail::{validation_error, ContextMap, ErrorCollector};
///
/// let name = "";
/// let email = "";
///
/// let mut errors = ErrorCollector::new();
/// errors.require(!name.trim().is_empty(), || {
///     validation_error("name is required", ContextMap::new())
/// });
/// errors.require(!email.is_empty(), || {
///     validation_error("email is required", ContextMap::new())
/// });
///
/// let (valid, errors) = errors.finish().into_pair();
/// assert!(!valid);
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0].message(), "name is required");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorCollector<E = ErrorValue> {
    items: ErrorVec<E>,
}

impl<E> Default for ErrorCollector<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ErrorCollector<E> {
    /// Creates a new empty collector.
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorVec::new() }
    }

    /// Adds a single error.
    #[inline]
    pub fn push(&mut self, error: E) {
        self.items.push(error);
    }

    /// Records the error of a failed check, handing back the value of a passed one.
    #[inline]
    pub fn check<T>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.items.push(error);
                None
            }
        }
    }

    /// Records `error()` when `condition` is false. The closure only runs on failure.
    #[inline]
    pub fn require<F>(&mut self, condition: bool, error: F) -> bool
    where
        F: FnOnce() -> E,
    {
        if !condition {
            self.items.push(error());
        }
        condition
    }

    /// Extends the collector with errors from an iterator.
    #[inline]
    pub fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    /// Returns true if no error has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of errors recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the errors in record order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Finishes collection: valid iff nothing was recorded.
    #[inline]
    pub fn finish(self) -> Validation<E, ()> {
        self.finish_with(())
    }

    /// Finishes collection, carrying `value` on success.
    #[inline]
    pub fn finish_with<A>(self, value: A) -> Validation<E, A> {
        if self.items.is_empty() {
            Validation::Valid(value)
        } else {
            Validation::Invalid(self.items)
        }
    }

    /// Consumes the collector and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<E> {
        self.items
    }
}

impl<E> From<ErrorVec<E>> for ErrorCollector<E> {
    fn from(items: ErrorVec<E>) -> Self {
        Self { items }
    }
}

impl<E> FromIterator<E> for ErrorCollector<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<E> IntoIterator for ErrorCollector<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
