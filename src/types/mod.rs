//! Failure records and shared type aliases.
//!
//! # Examples
//!
//! ```
//! use signup_rail::{Constraint, FieldName, ValidationFailure};
//!
//! let failure = ValidationFailure::new(
//!     FieldName::USERNAME,
//!     Constraint::MIN,
//!     "Username must have at least 5 characters",
//! );
//!
//! assert_eq!(failure.constraint.as_str(), "min");
//! ```
use smallvec::SmallVec;

pub mod failure;

pub use failure::*;

pub use futures_core::future::BoxFuture;

use crate::validation::Validation;

/// SmallVec-backed collection used for accumulating failures.
///
/// Uses inline storage for a single element, which is all a fail-fast
/// pipeline ever produces.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Outcome of a single rule or of a whole validator run.
///
/// The outer `Result` carries collaborator errors (for example a failed
/// lookup); the inner [`Validation`] carries domain failures.
///
/// # Type Parameters
///
/// * `T` - The record being validated
/// * `E` - The collaborator error type
pub type RuleResult<T, E> = Result<Validation<ValidationFailure, T>, E>;
