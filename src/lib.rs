//! Fail-fast, async-aware field validation for user sign-up records.
//!
//! The crate is built from three layers:
//!
//! - [`Validation`]: either a valid value or the failures that rejected it
//! - [`Validator`]: an ordered chain of [`Rule`](traits::Rule)s, applied one
//!   at a time and stopped at the first rejection
//! - [`signup`]: the concrete sign-up rules (email format, username and
//!   password length bounds, email uniqueness against a [`UserLookup`]
//!   store)
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `signup_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Validating a Sign-Up
//!
//! ```
//! use std::collections::HashSet;
//!
//! use signup_rail::prelude::*;
//!
//! struct Emails(HashSet<&'static str>);
//!
//! impl UserLookup for Emails {
//!     type Record = &'static str;
//!     type Error = std::convert::Infallible;
//!
//!     fn find_one<'a>(
//!         &'a self,
//!         criteria: UserCriteria<'a>,
//!     ) -> BoxFuture<'a, Result<Option<&'static str>, Self::Error>> {
//!         let found = self.0.get(criteria.email).copied();
//!         Box::pin(std::future::ready(Ok(found)))
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let validator = SignUpValidator::new(Emails(HashSet::from(["a@b.com"])));
//!
//! let taken = SignUpRecord::new("johndoe", "a@b.com", "123456");
//! let outcome = validator.validate(taken).await.unwrap();
//! assert_eq!(
//!     outcome.first_error(),
//!     Some(&ValidationFailure::new(FieldName::EMAIL, Constraint::UNIQUE, "Email already in use")),
//! );
//!
//! let fresh = SignUpRecord::new("johndoe", "c@d.com", "123456");
//! assert_eq!(validator.validate(fresh.clone()).await.unwrap(), Validation::valid(fresh));
//! # }
//! ```
//!
//! ## Building a Rule Chain for Another Record
//!
//! ```
//! use signup_rail::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let positive = Validator::<i64, ()>::builder()
//!     .check("positive", |n| {
//!         if n > 0 {
//!             Validation::valid(n)
//!         } else {
//!             Validation::invalid(ValidationFailure::new(
//!                 FieldName::new("amount"),
//!                 Constraint::MIN,
//!                 "Amount must be positive",
//!             ))
//!         }
//!     })
//!     .build();
//!
//! assert!(positive.validate(-3).await.unwrap().is_invalid());
//! # }
//! ```

/// Async sequencing primitives
pub mod async_ext;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Sign-up record and its rule set
pub mod signup;
/// Rule and store traits
pub mod traits;
/// Failure records and shared aliases
pub mod types;
/// Validation type and the fail-fast validator
pub mod validation;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use signup::{make_signup_validator, SignUpRecord, SignUpValidator};
pub use traits::{Rule, UserCriteria, UserLookup};
pub use types::{Constraint, ErrorVec, FieldName, RuleResult, ValidationFailure};
pub use validation::{Validation, Validator, ValidatorBuilder};
