//! Test doubles for the user store.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use signup_rail::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDown;

impl fmt::Display for StoreDown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("user store unavailable")
    }
}

impl std::error::Error for StoreDown {}

enum Answer {
    Found(SignUpRecord),
    Missing,
    Fails,
}

/// Store that gives the same answer to every query and records what it was
/// asked.
pub struct StubUsers {
    answer: Answer,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl StubUsers {
    fn with(answer: Answer) -> Self {
        Self { answer, calls: AtomicUsize::new(0), seen: Mutex::new(Vec::new()) }
    }

    pub fn empty() -> Self {
        Self::with(Answer::Missing)
    }

    pub fn containing(record: SignUpRecord) -> Self {
        Self::with(Answer::Found(record))
    }

    pub fn failing() -> Self {
        Self::with(Answer::Fails)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl UserLookup for StubUsers {
    type Record = SignUpRecord;
    type Error = StoreDown;

    fn find_one<'a>(
        &'a self,
        criteria: UserCriteria<'a>,
    ) -> BoxFuture<'a, Result<Option<SignUpRecord>, StoreDown>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(criteria.email.to_string());

        let answer = match &self.answer {
            Answer::Found(record) => Ok(Some(record.clone())),
            Answer::Missing => Ok(None),
            Answer::Fails => Err(StoreDown),
        };

        Box::pin(async move {
            tokio::task::yield_now().await;
            answer
        })
    }
}

pub fn record(username: &str, email: &str, password: &str) -> SignUpRecord {
    SignUpRecord::new(username, email, password)
}

pub fn failure(
    field: FieldName,
    constraint: Constraint,
    message: &'static str,
) -> ValidationFailure {
    ValidationFailure::new(field, constraint, message)
}
