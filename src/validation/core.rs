use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Outcome of validating a value: either the value itself or the failures
/// that rejected it.
///
/// `Validation<E, A>` is the value every rule returns and the value a
/// [`Validator`](crate::validation::Validator) hands back to its caller.
/// Failures are ordinary data, never panics, so a rejected record is just
/// another return value to match on.
///
/// # Serde Support
///
/// With the `serde` feature, `Validation` implements `Serialize` and
/// `Deserialize` when `E` and `A` do, so boundary code can put it straight
/// into a response body. Deserializing an `Invalid` with no failures is an
/// error.
///
/// # Type Parameters
///
/// * `E` - The failure type
/// * `A` - The success value type
///
/// # Variants
///
/// * `Valid(A)` - Contains the (possibly rewritten) value
/// * `Invalid(ErrorVec<E>)` - Contains one or more failures, never zero
///
/// # Examples
///
/// ```
/// use signup_rail::validation::Validation;
///
/// let valid = Validation::<&str, i32>::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid = Validation::<&str, i32>::invalid("too small");
/// assert!(invalid.is_invalid());
/// assert_eq!(invalid.first_error(), Some(&"too small"));
/// ```
#[must_use]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "ValidationRepr<E, A>")
)]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Validation<E, A> {
    Valid(A),
    Invalid(ErrorVec<E>),
}

/// Wire shape of [`Validation`], checked before it becomes one.
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
                Err("Invalid must carry at least one failure")
            },
            ValidationRepr::Invalid(errors) => Ok(Self::Invalid(errors)),
        }
    }
}

impl<E, A> Validation<E, A> {
    /// Creates a valid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(42);
    /// assert_eq!(v.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value from a single failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid("missing field");
    /// assert_eq!(v.errors().map(|errors| errors.len()), Some(1));
    /// ```
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// Creates an invalid value from an iterator of failures.
    ///
    /// The iterator must yield at least one failure; an `Invalid` with no
    /// failures would carry neither a value nor a reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid_many(["missing", "invalid"]);
    /// assert_eq!(v.into_errors().unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn invalid_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let errors: ErrorVec<E> = errors.into_iter().collect();
        debug_assert!(!errors.is_empty(), "Validation::Invalid requires at least one error");
        Self::Invalid(errors)
    }

    /// Returns `true` if the validation contains a value.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if the validation contains failures.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrows the valid value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Borrows the failures, if any.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> Option<&[E]> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Returns the first failure, which is the one boundary code is expected
    /// to show to a user.
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::invalid_many(["first", "second"]);
    /// assert_eq!(v.first_error(), Some(&"first"));
    ///
    /// let v = Validation::<&str, i32>::valid(1);
    /// assert_eq!(v.first_error(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn first_error(&self) -> Option<&E> {
        self.errors().and_then(|errors| errors.first())
    }

    /// Maps the valid value using the provided function.
    ///
    /// If the validation is invalid, the failures are preserved unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(21);
    /// assert_eq!(v.map(|x| x * 2).into_value(), Some(42));
    /// ```
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

    /// Chains a further check onto a valid value.
    ///
    /// Behaves like [`Result::and_then`]: `f` only runs when the current
    /// validation is valid, and an invalid state is passed through untouched.
    /// This is the synchronous form of the fail-fast policy the
    /// [`Validator`](crate::validation::Validator) applies.
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_rail::validation::Validation;
    ///
    /// fn at_least_five(input: &str) -> Validation<&'static str, &str> {
    ///     if input.chars().count() >= 5 {
    ///         Validation::valid(input)
    ///     } else {
    ///         Validation::invalid("too short")
    ///     }
    /// }
    ///
    /// assert!(Validation::valid("johndoe").and_then(at_least_five).is_valid());
    /// assert!(Validation::valid("abc").and_then(at_least_five).is_invalid());
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

    /// Maps each failure while preserving the success branch.
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

    /// Converts into a `Result`, keeping every failure on the error side.
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(42);
    /// assert_eq!(v.to_result(), Ok(42));
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// assert!(v.to_result().is_err());
    /// ```
    #[inline]
    pub fn to_result(self) -> Result<A, ErrorVec<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Wraps a normal `Result`, turning the error side into a single failure.
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    /// Extracts the failure list, if any.
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
}

impl<E, A> From<Result<A, E>> for Validation<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        Self::from_result(result)
    }
}
