use std::fmt;
use std::future::Future;

use crate::types::{BoxFuture, RuleResult, ValidationFailure};
use crate::validation::Validation;

/// A single named check over a record of type `T`.
///
/// A rule takes the record by value and returns it (unchanged or rewritten)
/// inside [`Validation::Valid`], or the failures that reject it inside
/// [`Validation::Invalid`]. Every rule is treated as potentially
/// asynchronous, so `check` hands back a boxed future; pure rules resolve it
/// immediately.
///
/// `E` is the error type of whatever collaborator the rule consults. A rule
/// never converts such an error into a [`ValidationFailure`]: it returns it as
/// `Err` and the validator propagates it to the caller.
///
/// Most rules are written as plain functions and wrapped with [`SyncRule`] or
/// [`AsyncRule`]; implement the trait directly when the rule owns state, such
/// as an injected store.
pub trait Rule<T, E>: Send + Sync {
    /// Short, stable name used in log output.
    fn name(&self) -> &str;

    /// Runs the check against `value`.
    fn check<'a>(&'a self, value: T) -> BoxFuture<'a, RuleResult<T, E>>
    where
        T: 'a,
        E: 'a;
}

impl<T, E, R> Rule<T, E> for Box<R>
where
    R: Rule<T, E> + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn check<'a>(&'a self, value: T) -> BoxFuture<'a, RuleResult<T, E>>
    where
        T: 'a,
        E: 'a,
    {
        (**self).check(value)
    }
}

/// Adapts a synchronous function into a [`Rule`].
///
/// # Examples
///
/// ```
/// use signup_rail::traits::SyncRule;
/// use signup_rail::validation::Validation;
/// use signup_rail::{Constraint, FieldName, ValidationFailure};
///
/// let not_empty = SyncRule::new("not-empty", |value: String| {
///     if value.is_empty() {
///         Validation::invalid(ValidationFailure::new(
///             FieldName::new("value"),
///             Constraint::MIN,
///             "Value must not be empty",
///         ))
///     } else {
///         Validation::valid(value)
///     }
/// });
/// # let _ = not_empty;
/// ```
#[derive(Clone)]
pub struct SyncRule<F> {
    name: &'static str,
    f: F,
}

impl<F> SyncRule<F> {
    #[inline]
    pub const fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> fmt::Debug for SyncRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncRule").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<T, E, F> Rule<T, E> for SyncRule<F>
where
    T: Send,
    E: Send,
    F: Fn(T) -> Validation<ValidationFailure, T> + Send + Sync,
{
    #[inline]
    fn name(&self) -> &str {
        self.name
    }

    fn check<'a>(&'a self, value: T) -> BoxFuture<'a, RuleResult<T, E>>
    where
        T: 'a,
        E: 'a,
    {
        let outcome = (self.f)(value);
        Box::pin(std::future::ready(Ok(outcome)))
    }
}

/// Adapts an asynchronous function into a [`Rule`].
///
/// Use this for checks that suspend, such as a lookup against an external
/// store the closure has captured. The returned future must own everything it
/// touches, so clone shared handles (an `Arc`, say) into it.
///
/// # Examples
///
/// ```
/// use signup_rail::traits::AsyncRule;
/// use signup_rail::validation::Validation;
/// use signup_rail::ValidationFailure;
///
/// let always_passes = AsyncRule::new("always-passes", |value: u32| async move {
///     Ok::<_, std::io::Error>(Validation::<ValidationFailure, u32>::valid(value))
/// });
/// # let _ = always_passes;
/// ```
#[derive(Clone)]
pub struct AsyncRule<F> {
    name: &'static str,
    f: F,
}

impl<F> AsyncRule<F> {
    #[inline]
    pub const fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> fmt::Debug for AsyncRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncRule").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<T, E, F, Fut> Rule<T, E> for AsyncRule<F>
where
    F: Fn(T) -> Fut + Send + Sync,
    Fut: Future<Output = RuleResult<T, E>> + Send + 'static,
{
    #[inline]
    fn name(&self) -> &str {
        self.name
    }

    #[inline]
    fn check<'a>(&'a self, value: T) -> BoxFuture<'a, RuleResult<T, E>>
    where
        T: 'a,
        E: 'a,
    {
        Box::pin((self.f)(value))
    }
}
