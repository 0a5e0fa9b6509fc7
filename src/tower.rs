//! Tower integration for signup-rail.
//!
//! This module provides a Tower `Layer` and `Service` that put a
//! [`Validator`] in front of an inner service. Requests that validate are
//! forwarded (with whatever the rules produced); requests that don't are
//! answered with [`ServiceError::Rejected`] and never reach the inner
//! service. This is the usual shape of a sign-up endpoint: validate, map a
//! rejection to a 4xx, otherwise go on to create the account.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! signup-rail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use signup_rail::signup::SignUpValidator;
//! use signup_rail::tower::ValidationLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(ValidationLayer::new(SignUpValidator::new(users).into_validator()))
//!     .service(create_account);
//! ```

use std::fmt;
use std::sync::Arc;
use std::task::{Context, Poll};

use tower::{Layer, Service};
use tracing::debug;

use crate::types::{BoxFuture, ErrorVec, ValidationFailure};
use crate::validation::{Validation, Validator};

/// Error returned by [`ValidationService`].
///
/// # Type Parameters
///
/// * `R` - The error type of the validator's collaborators
/// * `E` - The error type of the inner service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError<R, E> {
    /// The request failed validation; the inner service was not called.
    Rejected(ErrorVec<ValidationFailure>),
    /// A rule's collaborator failed while validating.
    Lookup(R),
    /// The inner service failed.
    Inner(E),
}

impl<R, E> ServiceError<R, E> {
    /// Returns the validation failures, if the request was rejected.
    #[inline]
    pub fn failures(&self) -> Option<&[ValidationFailure]> {
        match self {
            Self::Rejected(failures) => Some(failures),
            _ => None,
        }
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl<R: fmt::Display, E: fmt::Display> fmt::Display for ServiceError<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(failures) => match failures.first() {
                Some(failure) => write!(f, "validation failed: {}", failure),
                None => f.write_str("validation failed"),
            },
            Self::Lookup(error) => write!(f, "validation aborted: {}", error),
            Self::Inner(error) => write!(f, "{}", error),
        }
    }
}

impl<R, E> std::error::Error for ServiceError<R, E>
where
    R: std::error::Error + 'static,
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(failures) => {
                failures.first().map(|failure| failure as &(dyn std::error::Error + 'static))
            },
            Self::Lookup(error) => Some(error),
            Self::Inner(error) => Some(error),
        }
    }
}

/// A Tower [`Layer`] that validates requests before they reach the wrapped
/// service.
///
/// The validator is shared between every service the layer produces.
pub struct ValidationLayer<T, R> {
    validator: Arc<Validator<T, R>>,
}

impl<T, R> ValidationLayer<T, R> {
    /// Creates a layer around `validator`.
    #[inline]
    pub fn new(validator: impl Into<Arc<Validator<T, R>>>) -> Self {
        Self { validator: validator.into() }
    }

    /// Returns a reference to the validator.
    #[inline]
    pub fn validator(&self) -> &Validator<T, R> {
        &self.validator
    }
}

impl<T, R> Clone for ValidationLayer<T, R> {
    fn clone(&self) -> Self {
        Self { validator: Arc::clone(&self.validator) }
    }
}

impl<T, R> fmt::Debug for ValidationLayer<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationLayer").field("validator", &self.validator).finish()
    }
}

impl<S, T, R> Layer<S> for ValidationLayer<T, R> {
    type Service = ValidationService<S, T, R>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        ValidationService { inner, validator: Arc::clone(&self.validator) }
    }
}

/// A Tower [`Service`] that validates each request and forwards only the
/// ones that pass.
///
/// `poll_ready` forwards to the inner service, so its backpressure reaches
/// outer layers. The service that was driven to readiness is the one that
/// receives the request; a fresh clone takes its place for the next call.
pub struct ValidationService<S, T, R> {
    inner: S,
    validator: Arc<Validator<T, R>>,
}

impl<S, T, R> ValidationService<S, T, R> {
    /// Creates a new `ValidationService` wrapping the given service.
    #[inline]
    pub fn new(inner: S, validator: impl Into<Arc<Validator<T, R>>>) -> Self {
        Self { inner, validator: validator.into() }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Clone, T, R> Clone for ValidationService<S, T, R> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone(), validator: Arc::clone(&self.validator) }
    }
}

impl<S: fmt::Debug, T, R> fmt::Debug for ValidationService<S, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationService")
            .field("inner", &self.inner)
            .field("validator", &self.validator)
            .finish()
    }
}

impl<S, T, R> Service<T> for ValidationService<S, T, R>
where
    S: Service<T> + Clone + Send + 'static,
    S::Future: Send,
    T: Send + 'static,
    R: Send + 'static,
{
    type Response = S::Response;
    type Error = ServiceError<R, S::Error>;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(ServiceError::Inner)
    }

    fn call(&mut self, request: T) -> Self::Future {
        let validator = Arc::clone(&self.validator);
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            match validator.validate(request).await {
                Ok(Validation::Valid(request)) => {
                    inner.call(request).await.map_err(ServiceError::Inner)
                },
                Ok(Validation::Invalid(failures)) => {
                    debug!(failures = failures.len(), "request rejected before reaching service");
                    Err(ServiceError::Rejected(failures))
                },
                Err(error) => Err(ServiceError::Lookup(error)),
            }
        })
    }
}

/// Extension trait for wrapping services with validation.
pub trait ServiceValidationExt<T>: Service<T> + Sized {
    /// Wraps this service so every request is validated first.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use signup_rail::tower::ServiceValidationExt;
    ///
    /// let guarded = create_account.with_validation(validator);
    /// ```
    fn with_validation<R>(
        self,
        validator: impl Into<Arc<Validator<T, R>>>,
    ) -> ValidationService<Self, T, R> {
        ValidationService::new(self, validator)
    }
}

impl<S, T> ServiceValidationExt<T> for S where S: Service<T> {}
