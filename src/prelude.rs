//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use signup_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Validation`], [`Validator`], [`ValidationFailure`], [`FieldName`], [`Constraint`]
//! - **Sign-up**: [`SignUpRecord`], [`SignUpValidator`], [`make_signup_validator`]
//! - **Traits**: [`Rule`], [`UserLookup`], plus [`SyncRule`] / [`AsyncRule`] adapters
//! - **Aliases**: [`BoxFuture`], [`RuleResult`]

pub use crate::signup::{make_signup_validator, SignUpRecord, SignUpValidator};
pub use crate::traits::{AsyncRule, Rule, SyncRule, UserCriteria, UserLookup};
pub use crate::types::{BoxFuture, Constraint, FieldName, RuleResult, ValidationFailure};
pub use crate::validation::{Validation, Validator};
