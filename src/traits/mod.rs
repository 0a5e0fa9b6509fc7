//! Seams of the validation pipeline.
//!
//! - [`Rule`]: a single named check, possibly asynchronous
//! - [`SyncRule`] / [`AsyncRule`]: adapters turning plain functions into rules
//! - [`UserLookup`]: the read capability the uniqueness rule depends on
//!
//! # Examples
//!
//! ```
//! use signup_rail::traits::{Rule, SyncRule};
//! use signup_rail::validation::Validation;
//! use signup_rail::ValidationFailure;
//!
//! let passthrough = SyncRule::new("passthrough", Validation::<ValidationFailure, u8>::valid);
//! assert_eq!(Rule::<u8, ()>::name(&passthrough), "passthrough");
//! ```

pub mod lookup;
pub mod rule;

pub use lookup::{UserCriteria, UserLookup};
pub use rule::{AsyncRule, Rule, SyncRule};
