//! Puts the sign-up validator in front of an account-creation service.
//!
//! Run with `cargo run --example signup_service --features tower`.

use std::convert::Infallible;

use signup_rail::prelude::*;
use signup_rail::tower::{ServiceError, ValidationLayer};
use tower::{service_fn, ServiceBuilder, ServiceExt};

struct NoUsers;

impl UserLookup for NoUsers {
    type Record = ();
    type Error = Infallible;

    fn find_one<'a>(
        &'a self,
        _: UserCriteria<'a>,
    ) -> BoxFuture<'a, Result<Option<()>, Infallible>> {
        Box::pin(std::future::ready(Ok(None)))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let create_account = service_fn(|record: SignUpRecord| async move {
        Ok::<_, Infallible>(format!("account created for {}", record.username))
    });

    let service = ServiceBuilder::new()
        .layer(ValidationLayer::new(SignUpValidator::new(NoUsers).into_validator()))
        .service(create_account);

    for attempt in [
        SignUpRecord::new("johndoe", "john@example.com", "123456"),
        SignUpRecord::new("jd", "john@example.com", "123456"),
    ] {
        match service.clone().oneshot(attempt).await {
            Ok(message) => println!("201 {message}"),
            Err(ServiceError::Rejected(failures)) => {
                println!("422 {}", failures[0]);
            },
            Err(other) => println!("500 {other}"),
        }
    }
}
