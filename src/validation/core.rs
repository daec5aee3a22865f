use crate::types::{ErrorValue, ErrorVec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Multi-error outcome that accumulates every failure instead of failing fast.
///
/// `Validation<E, A>` either succeeds with a value of type `A` or fails with
/// one or more errors of type `E`. The error list of an `Invalid` is never
/// empty, so "no errors" and "valid" always coincide.
///
/// # Type Parameters
///
/// * `E` - The error type, [`ErrorValue`] by default
/// * `A` - The success value type, `()` by default
///
/// # Examples
///
/// ```
/// use outcome_rail::validation::Validation;
///
/// let valid = Validation::<&str, i32>::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid = Validation::<&str, i32>::invalid("error");
/// assert!(invalid.is_invalid());
/// ```
#[must_use]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "ValidationRepr<E, A>")
)]
#[derive(Clone, PartialEq, Debug)]
pub enum Validation<E = ErrorValue, A = ()> {
    Valid(A),
    Invalid(ErrorVec<E>),
}

/// Wire form accepted by `Deserialize`; an empty `Invalid` is rejected on conversion.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "Validation")]
enum ValidationRepr<E, A> {
    Valid(A),
    Invalid(ErrorVec<E>),
}

#[cfg(feature = "serde")]
impl<E, A> TryFrom<ValidationRepr<E, A>> for Validation<E, A> {
    type Error = &'static str;

    fn try_from(repr: ValidationRepr<E, A>) -> Result<Self, Self::Error> {
        match repr {
            ValidationRepr::Valid(value) => Ok(Self::Valid(value)),
            ValidationRepr::Invalid(errors) if errors.is_empty() => {
                Err("Validation::Invalid must hold at least one error")
            }
            ValidationRepr::Invalid(errors) => Ok(Self::Invalid(errors)),
        }
    }
}

impl<E, A> Validation<E, A> {
    /// Creates a valid value.
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value from a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid("missing field");
    /// assert!(v.is_invalid());
    /// ```
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// Creates an invalid value from an iterator of errors.
    ///
    /// # Panics
    ///
    /// Panics if the iterator yields no error. Use [`Validation::from_errors`]
    /// when the list may legitimately be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid_many(["missing", "invalid"]);
    /// assert_eq!(v.into_errors().unwrap().len(), 2);
    /// ```
    #[track_caller]
    #[inline]
    pub fn invalid_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let errors: ErrorVec<E> = errors.into_iter().collect();
        assert!(!errors.is_empty(), "Validation::Invalid must hold at least one error");
        Self::Invalid(errors)
    }

    /// Builds a validation from collected errors: valid with `value` iff `errors` is empty.
    #[inline]
    pub fn from_errors<I>(errors: I, value: A) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let errors: ErrorVec<E> = errors.into_iter().collect();
        if errors.is_empty() {
            Self::Valid(value)
        } else {
            Self::Invalid(errors)
        }
    }

    /// Returns `true` when no error is recorded.
    ///
    /// The flag follows the error list, so a hand-built `Invalid` holding no
    /// errors reads as valid here and in [`Validation::into_pair`], even though
    /// it carries no value.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Number of accumulated errors; zero iff valid.
    #[must_use]
    #[inline]
    pub fn error_count(&self) -> usize {
        match self {
            Self::Valid(_) => 0,
            Self::Invalid(errors) => errors.len(),
        }
    }

    /// Maps the valid value using the provided function.
    ///
    /// If the validation is invalid, the errors are preserved unchanged and `f`
    /// is never called.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Chains computations that may produce additional validation errors.
    ///
    /// Behaves like [`Result::and_then`], propagating invalid states while
    /// invoking `f` only when the current validation is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::Validation;
    ///
    /// fn parse_even(input: i32) -> Validation<&'static str, i32> {
    ///     if input % 2 == 0 {
    ///         Validation::valid(input)
    ///     } else {
    ///         Validation::invalid("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Validation::valid(4).and_then(parse_even).into_value(), Some(4));
    /// assert!(Validation::valid(3).and_then(parse_even).is_invalid());
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Calls `op` if the validation is invalid, otherwise returns the `Valid` value.
    #[inline]
    pub fn or_else<F>(self, op: F) -> Validation<E, A>
    where
        F: FnOnce(ErrorVec<E>) -> Validation<E, A>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => op(errors),
        }
    }

    /// Combines two validations into a tuple, accumulating all errors.
    ///
    /// Errors from `self` come first, then errors from `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::Validation;
    ///
    /// let v1 = Validation::<&str, i32>::invalid("error1");
    /// let v2 = Validation::<&str, i32>::invalid("error2");
    /// assert_eq!(v1.zip(v2).into_errors().unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn zip<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Validation::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Validation::Invalid(e), Validation::Valid(_)) => Validation::Invalid(e),
            (Validation::Valid(_), Validation::Invalid(e)) => Validation::Invalid(e),
            (Validation::Invalid(mut e1), Validation::Invalid(e2)) => {
                e1.extend(e2);
                Validation::Invalid(e1)
            }
        }
    }

    /// Maps each error while preserving the success branch.
    #[inline]
    pub fn map_err<F, G>(self, f: F) -> Validation<G, A>
    where
        F: FnMut(E) -> G,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.into_iter().map(f).collect()),
        }
    }

    /// Converts into a `Result` keeping every accumulated error.
    #[inline]
    pub fn to_result(self) -> Result<A, ErrorVec<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Wraps a normal `Result` into a `Validation`, turning the error side into a singleton vec.
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    /// Extracts the error list, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Extracts the value, if valid.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// The `(valid, errors)` tuple view; `valid` is computed from the list, so
    /// the vector is empty iff `valid`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::Validation;
    ///
    /// let (valid, errors) = Validation::<&str, ()>::valid(()).into_pair();
    /// assert!(valid && errors.is_empty());
    /// ```
    #[must_use]
    #[inline]
    pub fn into_pair(self) -> (bool, Vec<E>) {
        match self {
            Self::Valid(_) => (true, Vec::new()),
            Self::Invalid(errors) => (errors.is_empty(), errors.into_vec()),
        }
    }
}

impl<A> Validation<ErrorValue, A> {
    /// Emits one `tracing` warning per accumulated error.
    pub fn log_errors(&self) {
        for error in self.iter_errors() {
            error.log();
        }
    }
}

impl<E, A> From<Result<A, E>> for Validation<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        Self::from_result(result)
    }
}

/// Collects many validations into one, keeping every error in iteration order.
///
/// # Examples
///
/// ```
/// use outcome_rail::validation::Validation;
///
/// let all: Validation<&str, Vec<i32>> =
///     vec![Validation::valid(1), Validation::invalid("a"), Validation::invalid("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(all.into_errors().unwrap().as_slice(), &["a", "b"]);
/// ```
impl<E, A> FromIterator<Validation<E, A>> for Validation<E, Vec<A>> {
    fn from_iter<I: IntoIterator<Item = Validation<E, A>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors = ErrorVec::new();

        for validation in iter {
            match validation {
                Validation::Valid(value) => values.push(value),
                Validation::Invalid(errs) => errors.extend(errs),
            }
        }

        if errors.is_empty() {
            Validation::Valid(values)
        } else {
            Validation::Invalid(errors)
        }
    }
}
