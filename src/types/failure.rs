use std::borrow::Cow;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name of the record attribute a [`ValidationFailure`] refers to.
///
/// The sign-up fields are available as associated constants; other record
/// types can name their own fields with [`FieldName::new`].
///
/// # Examples
///
/// ```
/// use signup_rail::FieldName;
///
/// assert_eq!(FieldName::EMAIL.as_str(), "email");
/// assert_eq!(FieldName::new("nickname").to_string(), "nickname");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldName(Cow<'static, str>);

impl FieldName {
    pub const USERNAME: Self = Self(Cow::Borrowed("username"));
    pub const EMAIL: Self = Self(Cow::Borrowed("email"));
    pub const PASSWORD: Self = Self(Cow::Borrowed("password"));

    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for FieldName {
    #[inline]
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

/// Machine-checkable tag describing which constraint a value violated.
///
/// The sign-up rule set uses the four built-in tags (`email`, `min`, `max`,
/// `unique`). Rule sets for other records may introduce their own with
/// [`Constraint::new`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Constraint(Cow<'static, str>);

impl Constraint {
    /// Value must have the shape of an email address.
    pub const EMAIL: Self = Self(Cow::Borrowed("email"));
    /// Value is shorter than the lower bound.
    pub const MIN: Self = Self(Cow::Borrowed("min"));
    /// Value is longer than the upper bound.
    pub const MAX: Self = Self(Cow::Borrowed("max"));
    /// Value collides with an existing record.
    pub const UNIQUE: Self = Self(Cow::Borrowed("unique"));

    #[inline]
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single field-scoped validation problem.
///
/// Failures compare structurally, so tests can assert on a whole failure at
/// once instead of picking it apart field by field.
///
/// # Examples
///
/// ```
/// use signup_rail::{Constraint, FieldName, ValidationFailure};
///
/// let failure = ValidationFailure::new(FieldName::EMAIL, Constraint::UNIQUE, "Email already in use");
///
/// assert_eq!(failure.field, FieldName::EMAIL);
/// assert_eq!(failure.to_string(), "email: Email already in use");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationFailure {
    pub field: FieldName,
    pub constraint: Constraint,
    pub message: Cow<'static, str>,
}

impl ValidationFailure {
    #[inline]
    pub fn new(
        field: FieldName,
        constraint: Constraint,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self { field, constraint, message: message.into() }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationFailure {}
