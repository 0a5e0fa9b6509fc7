//! Async extensions for signup-rail.
//!
//! Every rule is treated as potentially asynchronous, so the sequencing
//! primitive lives here and works over any future, independent of runtime.
//!
//! # Examples
//!
//! ```ignore
//! use signup_rail::async_ext::try_validate_seq_async;
//!
//! async fn check_order(order: Order) -> Result<Validation<Failure, Order>, DbError> {
//!     try_validate_seq_async(
//!         order,
//!         [
//!             |order| async move { check_inventory(order).await },
//!             |order| async move { check_payment(order).await },
//!         ],
//!     )
//!     .await
//! }
//! ```

mod validation;

pub use validation::try_validate_seq_async;
