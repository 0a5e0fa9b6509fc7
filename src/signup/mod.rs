//! Sign-up record validation.
//!
//! [`SignUpValidator`] applies the sign-up rules in a fixed order:
//!
//! 1. email format
//! 2. username minimum length
//! 3. username maximum length
//! 4. email uniqueness (one lookup against the injected [`UserLookup`])
//! 5. password minimum length
//! 6. password maximum length
//!
//! The first failing rule decides the outcome; the order only matters for
//! which failure is reported when a record breaks several rules at once.
//!
//! # Examples
//!
//! ```
//! use signup_rail::signup::{SignUpRecord, SignUpValidator};
//! use signup_rail::traits::{UserCriteria, UserLookup};
//! use signup_rail::types::BoxFuture;
//! use signup_rail::{Constraint, FieldName};
//!
//! struct NoUsers;
//!
//! impl UserLookup for NoUsers {
//!     type Record = ();
//!     type Error = std::convert::Infallible;
//!
//!     fn find_one<'a>(&'a self, _: UserCriteria<'a>) -> BoxFuture<'a, Result<Option<()>, Self::Error>> {
//!         Box::pin(std::future::ready(Ok(None)))
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let validator = SignUpValidator::new(NoUsers);
//!
//! let record = SignUpRecord::new("abc", "valid@x.com", "123456");
//! let outcome = validator.validate(record).await.unwrap();
//!
//! let failure = outcome.first_error().unwrap();
//! assert_eq!(failure.field, FieldName::USERNAME);
//! assert_eq!(failure.constraint, Constraint::MIN);
//! # }
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::{Rule, SyncRule, UserLookup};
use crate::types::RuleResult;
use crate::validation::Validator;

pub mod rules;

pub use rules::{
    email_format, email_not_in_use, is_email, password_max_length, password_min_length,
    username_max_length, username_min_length, EmailNotInUse, PASSWORD_MAX_LEN, PASSWORD_MIN_LEN,
    USERNAME_MAX_LEN, USERNAME_MIN_LEN,
};

/// The raw sign-up form as submitted by a user.
///
/// Validation never edits a record in place; rules take it by value and hand
/// the same value back when it passes. The `Debug` output redacts the
/// password so records can be logged safely.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SignUpRecord {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignUpRecord {
    #[inline]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self { username: username.into(), email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for SignUpRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRecord")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Builds the ordered sign-up rule chain around a user store.
///
/// # Type Parameters
///
/// * `S` - The store consulted by the uniqueness rule
pub struct SignUpValidator<S>
where
    S: UserLookup,
{
    inner: Validator<SignUpRecord, S::Error>,
}

impl<S> SignUpValidator<S>
where
    S: UserLookup + 'static,
{
    pub fn new(store: S) -> Self {
        let rules: [Box<dyn Rule<SignUpRecord, S::Error>>; 6] = [
            Box::new(SyncRule::new("email-format", email_format)),
            Box::new(SyncRule::new("username-min-length", username_min_length)),
            Box::new(SyncRule::new("username-max-length", username_max_length)),
            Box::new(EmailNotInUse::new(store)),
            Box::new(SyncRule::new("password-min-length", password_min_length)),
            Box::new(SyncRule::new("password-max-length", password_max_length)),
        ];

        Self { inner: Validator::new(rules) }
    }

    /// Validates `record`, returning the first failure or the record itself.
    ///
    /// Errors from the store are returned as `Err` without interpretation.
    pub async fn validate(&self, record: SignUpRecord) -> RuleResult<SignUpRecord, S::Error> {
        self.inner.validate(record).await
    }

    /// The underlying rule chain.
    #[inline]
    pub fn as_validator(&self) -> &Validator<SignUpRecord, S::Error> {
        &self.inner
    }

    #[inline]
    pub fn into_validator(self) -> Validator<SignUpRecord, S::Error> {
        self.inner
    }
}

impl<S> fmt::Debug for SignUpValidator<S>
where
    S: UserLookup,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpValidator").field("inner", &self.inner).finish()
    }
}

/// Creates the sign-up validator for `store`.
///
/// Shorthand for [`SignUpValidator::new`].
#[inline]
pub fn make_signup_validator<S>(store: S) -> SignUpValidator<S>
where
    S: UserLookup + 'static,
{
    SignUpValidator::new(store)
}
