//! The individual sign-up checks.
//!
//! Each check is a plain function from a [`SignUpRecord`] to a
//! [`Validation`], so it can be exercised on its own. On success the record
//! comes back unchanged; on failure the result holds exactly one
//! [`ValidationFailure`]. Lengths are counted in characters of the raw field,
//! with no trimming or case folding, and every bound is inclusive.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::signup::SignUpRecord;
use crate::traits::{Rule, UserCriteria, UserLookup};
use crate::types::{BoxFuture, Constraint, FieldName, RuleResult, ValidationFailure};
use crate::validation::Validation;

pub const USERNAME_MIN_LEN: usize = 5;
pub const USERNAME_MAX_LEN: usize = 255;
pub const PASSWORD_MIN_LEN: usize = 5;
pub const PASSWORD_MAX_LEN: usize = 255;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

type Checked = Validation<ValidationFailure, SignUpRecord>;

fn reject(field: FieldName, constraint: Constraint, message: &'static str) -> Checked {
    Validation::invalid(ValidationFailure::new(field, constraint, message))
}

/// Returns `true` when `value` has the shape of an email address.
#[inline]
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// `email` must have the shape of an email address.
pub fn email_format(record: SignUpRecord) -> Checked {
    if is_email(&record.email) {
        Validation::valid(record)
    } else {
        reject(FieldName::EMAIL, Constraint::EMAIL, "Email must be valid")
    }
}

/// `username` must be at least [`USERNAME_MIN_LEN`] characters long.
pub fn username_min_length(record: SignUpRecord) -> Checked {
    if record.username.chars().count() >= USERNAME_MIN_LEN {
        Validation::valid(record)
    } else {
        reject(FieldName::USERNAME, Constraint::MIN, "Username must have at least 5 characters")
    }
}

/// `username` must be at most [`USERNAME_MAX_LEN`] characters long.
pub fn username_max_length(record: SignUpRecord) -> Checked {
    if record.username.chars().count() <= USERNAME_MAX_LEN {
        Validation::valid(record)
    } else {
        reject(
            FieldName::USERNAME,
            Constraint::MAX,
            "Username can't be longer than 255 characters",
        )
    }
}

/// `password` must be at least [`PASSWORD_MIN_LEN`] characters long.
pub fn password_min_length(record: SignUpRecord) -> Checked {
    if record.password.chars().count() >= PASSWORD_MIN_LEN {
        Validation::valid(record)
    } else {
        reject(FieldName::PASSWORD, Constraint::MIN, "Password must be at least 5 characters long")
    }
}

/// `password` must be at most [`PASSWORD_MAX_LEN`] characters long.
pub fn password_max_length(record: SignUpRecord) -> Checked {
    if record.password.chars().count() <= PASSWORD_MAX_LEN {
        Validation::valid(record)
    } else {
        reject(FieldName::PASSWORD, Constraint::MAX, "Password must be less 255 characters long")
    }
}

/// `email` must not belong to an existing user.
///
/// Issues exactly one [`UserLookup::find_one`] call keyed by the record's
/// email. Any returned record means the address is taken. A lookup error is
/// logged and returned unchanged.
pub async fn email_not_in_use<S>(
    store: &S,
    record: SignUpRecord,
) -> RuleResult<SignUpRecord, S::Error>
where
    S: UserLookup + ?Sized,
{
    let existing = match store.find_one(UserCriteria::by_email(&record.email)).await {
        Ok(existing) => existing,
        Err(error) => {
            warn!("user lookup failed while checking email uniqueness");
            return Err(error);
        },
    };

    if existing.is_some() {
        Ok(reject(FieldName::EMAIL, Constraint::UNIQUE, "Email already in use"))
    } else {
        Ok(Validation::valid(record))
    }
}

/// [`Rule`] wrapper around [`email_not_in_use`] that owns its store.
#[derive(Debug, Clone)]
pub struct EmailNotInUse<S> {
    store: S,
}

impl<S> EmailNotInUse<S> {
    #[inline]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> Rule<SignUpRecord, S::Error> for EmailNotInUse<S>
where
    S: UserLookup,
{
    #[inline]
    fn name(&self) -> &str {
        "email-uniqueness"
    }

    fn check<'a>(&'a self, value: SignUpRecord) -> BoxFuture<'a, RuleResult<SignUpRecord, S::Error>>
    where
        SignUpRecord: 'a,
        S::Error: 'a,
    {
        Box::pin(email_not_in_use(&self.store, value))
    }
}
