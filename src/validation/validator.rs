use std::fmt;
use std::future::Future;

use tracing::{debug, debug_span, trace, Instrument};

use crate::traits::{AsyncRule, Rule, SyncRule};
use crate::types::{RuleResult, ValidationFailure};
use crate::validation::Validation;

/// An ordered chain of [`Rule`]s applied with a fail-fast policy.
///
/// `validate` threads the record through every rule in the order they were
/// supplied. The output of each passing rule becomes the input of the next;
/// the first rule that rejects the record ends the run, and its
/// [`Validation::Invalid`] is returned verbatim. Later rules are never
/// invoked, so at most one rule's failures are ever reported.
///
/// Rules run one at a time: each rule's future is awaited to completion
/// before the next rule starts. Independent `validate` calls share nothing
/// but the rule list, so they may run concurrently.
///
/// A collaborator error returned by a rule (`Err(E)`) is not caught; it is
/// returned from `validate` as-is.
///
/// # Type Parameters
///
/// * `T` - The record being validated
/// * `E` - The error type of injected collaborators
///
/// # Examples
///
/// ```
/// use signup_rail::validation::{Validation, Validator};
/// use signup_rail::{Constraint, FieldName, ValidationFailure};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let validator = Validator::<String, ()>::builder()
///     .check("trim", |s: String| Validation::valid(s.trim().to_owned()))
///     .check("not-empty", |s: String| {
///         if s.is_empty() {
///             Validation::invalid(ValidationFailure::new(
///                 FieldName::new("name"),
///                 Constraint::MIN,
///                 "Name must not be empty",
///             ))
///         } else {
///             Validation::valid(s)
///         }
///     })
///     .build();
///
/// assert_eq!(validator.validate("  jo ".to_owned()).await, Ok(Validation::valid("jo".to_owned())));
/// assert!(validator.validate("   ".to_owned()).await.unwrap().is_invalid());
/// # }
/// ```
pub struct Validator<T, E> {
    rules: Vec<Box<dyn Rule<T, E>>>,
}

impl<T, E> Validator<T, E> {
    /// Creates a validator from rules in the order they should run.
    #[inline]
    pub fn new<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Rule<T, E>>>,
    {
        Self { rules: rules.into_iter().collect() }
    }

    #[inline]
    pub fn builder() -> ValidatorBuilder<T, E> {
        ValidatorBuilder::new()
    }

    /// Number of rules in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in execution order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }
}

impl<T, E> Validator<T, E>
where
    T: Send,
    E: Send,
{
    /// Runs every rule against `record`, stopping at the first rejection.
    ///
    /// Returns `Ok(Valid(record))` when every rule passes (an empty chain
    /// passes the record through untouched), `Ok(Invalid(..))` with the
    /// failures of the first rejecting rule, or `Err` when a rule's
    /// collaborator fails.
    pub async fn validate(&self, record: T) -> RuleResult<T, E> {
        let span = debug_span!("validate", rules = self.rules.len());

        async move {
            let mut current = record;

            for rule in &self.rules {
                match observe(&**rule, current).await? {
                    Validation::Valid(v) => current = v,
                    invalid => return Ok(invalid),
                }
            }

            Ok(Validation::Valid(current))
        }
        .instrument(span)
        .await
    }
}

async fn observe<'a, T, E>(rule: &'a dyn Rule<T, E>, value: T) -> RuleResult<T, E>
where
    T: 'a,
    E: 'a,
{
    let outcome = rule.check(value).await;

    match &outcome {
        Ok(Validation::Valid(_)) => trace!(rule = rule.name(), "rule passed"),
        Ok(Validation::Invalid(failures)) => {
            for failure in failures {
                debug!(
                    rule = rule.name(),
                    field = %failure.field,
                    constraint = %failure.constraint,
                    "rule rejected record"
                );
            }
        },
        Err(_) => debug!(rule = rule.name(), "rule aborted by collaborator error"),
    }

    outcome
}

impl<T, E> fmt::Debug for Validator<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").field("rules", &self.rule_names().collect::<Vec<_>>()).finish()
    }
}

/// Incrementally assembles a [`Validator`].
///
/// Rules run in the order they are added.
pub struct ValidatorBuilder<T, E> {
    rules: Vec<Box<dyn Rule<T, E>>>,
}

impl<T, E> ValidatorBuilder<T, E> {
    #[inline]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends an arbitrary rule.
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: Rule<T, E> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends a synchronous check.
    pub fn check<F>(self, name: &'static str, f: F) -> Self
    where
        T: Send,
        E: Send,
        F: Fn(T) -> Validation<ValidationFailure, T> + Send + Sync + 'static,
    {
        self.rule(SyncRule::new(name, f))
    }

    /// Appends a check that may suspend.
    pub fn check_async<F, Fut>(self, name: &'static str, f: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = RuleResult<T, E>> + Send + 'static,
    {
        self.rule(AsyncRule::new(name, f))
    }

    #[inline]
    pub fn build(self) -> Validator<T, E> {
        Validator { rules: self.rules }
    }
}

impl<T, E> Default for ValidatorBuilder<T, E> {
    fn default() -> Self {
        Self::new()
    }
}
