//! The validation result type and the fail-fast validator built on it.
//!
//! # Key Components
//!
//! - [`Validation`] - either a valid value or the failures that rejected it
//! - [`Validator`] - an ordered chain of rules applied with a fail-fast policy
//! - [`ValidatorBuilder`] - assembles a validator rule by rule
//!
//! # Examples
//!
//! ```
//! use signup_rail::validation::Validation;
//!
//! let valid: Validation<String, i32> = Validation::Valid(42);
//! assert!(valid.is_valid());
//!
//! let invalid: Validation<&str, i32> = Validation::invalid_many(["err1", "err2"]);
//! assert_eq!(invalid.errors().map(<[_]>::len), Some(2));
//! ```
pub mod core;
pub mod validator;

pub use self::core::*;
pub use self::validator::*;
