//! Validates a handful of sign-up attempts against an in-memory user store.
//!
//! Run with `cargo run --example signup`.

use std::collections::HashMap;
use std::sync::RwLock;

use signup_rail::prelude::*;

#[derive(Default)]
struct InMemoryUsers {
    by_email: RwLock<HashMap<String, SignUpRecord>>,
}

impl InMemoryUsers {
    fn insert(&self, record: SignUpRecord) {
        self.by_email.write().unwrap().insert(record.email.clone(), record);
    }
}

impl UserLookup for InMemoryUsers {
    type Record = SignUpRecord;
    type Error = std::convert::Infallible;

    fn find_one<'a>(
        &'a self,
        criteria: UserCriteria<'a>,
    ) -> BoxFuture<'a, Result<Option<SignUpRecord>, Self::Error>> {
        let found = self.by_email.read().unwrap().get(criteria.email).cloned();
        Box::pin(std::future::ready(Ok(found)))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let users = std::sync::Arc::new(InMemoryUsers::default());
    users.insert(SignUpRecord::new("existing", "taken@example.com", "s3cret"));

    let validator = make_signup_validator(std::sync::Arc::clone(&users));

    let attempts = [
        SignUpRecord::new("abc", "valid@x.com", "123456"),
        SignUpRecord::new("johndoe", "invalid_email", "123456"),
        SignUpRecord::new("johndoe", "taken@example.com", "123456"),
        SignUpRecord::new("johndoe", "john@example.com", "1234"),
        SignUpRecord::new("johndoe", "john@example.com", "123456"),
    ];

    for attempt in attempts {
        let label = format!("{attempt:?}");
        match validator.validate(attempt).await {
            Ok(Validation::Valid(record)) => {
                println!("accepted {label}");
                users.insert(record);
            },
            Ok(Validation::Invalid(failures)) => {
                let first = &failures[0];
                println!(
                    "rejected {label}: [{}/{}] {}",
                    first.field, first.constraint, first.message
                );
            },
            Err(never) => match never {},
        }
    }
}
