use std::sync::Arc;

use crate::types::BoxFuture;

/// Criteria passed to [`UserLookup::find_one`].
///
/// Sign-up only ever asks about a contact address, so that is the only key
/// the criteria carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserCriteria<'a> {
    pub email: &'a str,
}

impl<'a> UserCriteria<'a> {
    #[inline]
    pub const fn by_email(email: &'a str) -> Self {
        Self { email }
    }
}

/// Read access to the user-record store, as far as validation needs it.
///
/// `find_one` answers "is there a record matching these criteria". Any
/// `Some(_)` counts as a match; the record itself is never inspected.
/// Implementations report storage problems through `Err`, which the
/// validation pipeline passes through to its caller unchanged.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use signup_rail::traits::{UserCriteria, UserLookup};
/// use signup_rail::types::BoxFuture;
///
/// struct KnownEmails(HashSet<String>);
///
/// impl UserLookup for KnownEmails {
///     type Record = String;
///     type Error = std::convert::Infallible;
///
///     fn find_one<'a>(
///         &'a self,
///         criteria: UserCriteria<'a>,
///     ) -> BoxFuture<'a, Result<Option<String>, Self::Error>> {
///         let found = self.0.get(criteria.email).cloned();
///         Box::pin(std::future::ready(Ok(found)))
///     }
/// }
/// ```
pub trait UserLookup: Send + Sync {
    type Record: Send;
    type Error: Send;

    fn find_one<'a>(
        &'a self,
        criteria: UserCriteria<'a>,
    ) -> BoxFuture<'a, Result<Option<Self::Record>, Self::Error>>;
}

impl<S> UserLookup for Arc<S>
where
    S: UserLookup + ?Sized,
{
    type Record = S::Record;
    type Error = S::Error;

    #[inline]
    fn find_one<'a>(
        &'a self,
        criteria: UserCriteria<'a>,
    ) -> BoxFuture<'a, Result<Option<Self::Record>, Self::Error>> {
        (**self).find_one(criteria)
    }
}

impl<S> UserLookup for &S
where
    S: UserLookup + ?Sized,
{
    type Record = S::Record;
    type Error = S::Error;

    #[inline]
    fn find_one<'a>(
        &'a self,
        criteria: UserCriteria<'a>,
    ) -> BoxFuture<'a, Result<Option<Self::Record>, Self::Error>> {
        (**self).find_one(criteria)
    }
}
