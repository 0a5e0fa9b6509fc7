//! Async validation utilities.
//!
//! Provides the sequential, fail-fast driver for ad-hoc step lists. It
//! follows the same policy as [`Validator::validate`].
//!
//! [`Validator::validate`]: crate::validation::Validator::validate

use std::future::Future;

use crate::validation::Validation;

/// Runs fallible async validation steps sequentially, where each step
/// receives the value produced by the previous one.
///
/// Stops at the first invalid result and returns it verbatim; the remaining
/// steps are never called. An `Err` from a step stops the run as well and is
/// returned as-is.
///
/// # Note
///
/// Steps are executed **sequentially**: each step's future is awaited to
/// completion before the next step is created. There is no timeout or
/// cancellation here; wrap the returned future if you need one.
///
/// # Example
///
/// ```
/// use signup_rail::async_ext::try_validate_seq_async;
/// use signup_rail::validation::Validation;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let steps: Vec<fn(i32) -> std::future::Ready<Result<Validation<&'static str, i32>, ()>>> = vec![
///     |n| std::future::ready(Ok(if n > 0 { Validation::valid(n) } else { Validation::invalid("must be positive") })),
///     |n| std::future::ready(Ok(Validation::valid(n * 2))),
/// ];
///
/// let result = try_validate_seq_async(21, steps).await;
/// assert_eq!(result, Ok(Validation::valid(42)));
/// # }
/// ```
pub async fn try_validate_seq_async<T, F, E, S, Fut>(
    initial: T,
    steps: impl IntoIterator<Item = S>,
) -> Result<Validation<F, T>, E>
where
    S: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<Validation<F, T>, E>>,
{
    let mut current = initial;

    for step in steps {
        match step(current).await? {
            Validation::Valid(v) => current = v,
            invalid => return Ok(invalid),
        }
    }

    Ok(Validation::Valid(current))
}
