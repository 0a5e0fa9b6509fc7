use std::sync::Arc;

use signup_rail::prelude::*;

use super::support::{failure, record, StoreDown, StubUsers};

fn validator_with(store: &Arc<StubUsers>) -> SignUpValidator<Arc<StubUsers>> {
    SignUpValidator::new(Arc::clone(store))
}

#[test]
fn validator_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<SignUpValidator<StubUsers>>();
    assert_send_sync::<SignUpValidator<Arc<StubUsers>>>();
}

#[test]
fn validate_future_is_send() {
    fn assert_send<F: std::future::Future + Send>(_: &F) {}

    let validator = SignUpValidator::new(StubUsers::empty());
    assert_send(&validator.validate(record("johndoe", "a@b.com", "123456")));
}

#[test]
fn rules_run_in_documented_order() {
    let validator = SignUpValidator::new(StubUsers::empty());

    assert_eq!(
        validator.as_validator().rule_names().collect::<Vec<_>>(),
        vec![
            "email-format",
            "username-min-length",
            "username-max-length",
            "email-uniqueness",
            "password-min-length",
            "password-max-length",
        ]
    );
}

#[tokio::test]
async fn short_username_is_rejected() {
    let validator = SignUpValidator::new(StubUsers::empty());

    let result = validator.validate(record("abc", "valid@x.com", "123456")).await;

    assert_eq!(
        result,
        Ok(Validation::invalid(failure(
            FieldName::USERNAME,
            Constraint::MIN,
            "Username must have at least 5 characters"
        )))
    );
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let validator = SignUpValidator::new(StubUsers::empty());

    let result = validator.validate(record("johndoe", "invalid_email", "123456")).await;

    assert_eq!(
        result,
        Ok(Validation::invalid(failure(FieldName::EMAIL, Constraint::EMAIL, "Email must be valid")))
    );
}

#[tokio::test]
async fn email_in_use_is_rejected() {
    let user = record("johndoe", "a@b.com", "123456");
    let store = Arc::new(StubUsers::containing(user.clone()));

    let result = validator_with(&store).validate(user).await;

    assert_eq!(
        result,
        Ok(Validation::invalid(failure(
            FieldName::EMAIL,
            Constraint::UNIQUE,
            "Email already in use"
        )))
    );
    assert_eq!(store.seen(), vec!["a@b.com".to_string()]);
}

#[tokio::test]
async fn free_email_passes_record_through_unchanged() {
    let user = record("johndoe", "a@b.com", "123456");
    let store = Arc::new(StubUsers::empty());

    let result = validator_with(&store).validate(user.clone()).await;

    assert_eq!(result, Ok(Validation::valid(user)));
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn long_username_is_rejected() {
    let validator = SignUpValidator::new(StubUsers::empty());

    let result = validator.validate(record(&"a".repeat(256), "a@b.com", "123456")).await;

    assert_eq!(
        result,
        Ok(Validation::invalid(failure(
            FieldName::USERNAME,
            Constraint::MAX,
            "Username can't be longer than 255 characters"
        )))
    );
}

#[tokio::test]
async fn short_and_long_passwords_are_rejected() {
    let validator = SignUpValidator::new(StubUsers::empty());

    let short = validator
        .validate(record("long_but_valid_username_123_abc", "valid_email@email.com", "a"))
        .await
        .unwrap();
    let long = validator
        .validate(record(
            "long_but_valid_username_123_abc",
            "valid_email@email.com",
            &"invalid_password".repeat(255),
        ))
        .await
        .unwrap();

    assert_eq!(
        short.first_error(),
        Some(&failure(
            FieldName::PASSWORD,
            Constraint::MIN,
            "Password must be at least 5 characters long"
        ))
    );
    assert_eq!(
        long.first_error(),
        Some(&failure(
            FieldName::PASSWORD,
            Constraint::MAX,
            "Password must be less 255 characters long"
        ))
    );
}

#[tokio::test]
async fn boundary_lengths_pass() {
    let validator = SignUpValidator::new(StubUsers::empty());

    let bounds = [("a".repeat(5), "p".repeat(5)), ("a".repeat(255), "p".repeat(255))];
    for (username, password) in bounds {
        let user = record(&username, "a@b.com", &password);
        assert_eq!(validator.validate(user.clone()).await, Ok(Validation::valid(user)));
    }
}

#[tokio::test]
async fn only_the_first_failing_rule_is_reported() {
    let validator = SignUpValidator::new(StubUsers::empty());

    // Email, username and password are all invalid; email is checked first.
    let outcome = validator.validate(record("abc", "invalid_email", "a")).await.unwrap();
    assert_eq!(outcome.errors().map(<[_]>::len), Some(1));
    assert_eq!(outcome.first_error().map(|f| &f.field), Some(&FieldName::EMAIL));

    // Username and password are invalid; username is checked first.
    let outcome = validator.validate(record("abc", "a@b.com", "a")).await.unwrap();
    assert_eq!(outcome.errors().map(<[_]>::len), Some(1));
    assert_eq!(outcome.first_error().map(|f| &f.constraint), Some(&Constraint::MIN));
    assert_eq!(outcome.first_error().map(|f| &f.field), Some(&FieldName::USERNAME));
}

#[tokio::test]
async fn uniqueness_is_reported_before_password_problems() {
    let store = Arc::new(StubUsers::containing(record("someone", "a@b.com", "secret")));

    let outcome = validator_with(&store).validate(record("johndoe", "a@b.com", "a")).await.unwrap();

    assert_eq!(
        outcome.first_error(),
        Some(&failure(FieldName::EMAIL, Constraint::UNIQUE, "Email already in use"))
    );
}

#[tokio::test]
async fn store_is_not_consulted_when_an_earlier_rule_fails() {
    let store = Arc::new(StubUsers::containing(record("someone", "a@b.com", "secret")));
    let validator = validator_with(&store);

    let outcome = validator.validate(record("abc", "a@b.com", "123456")).await.unwrap();

    assert_eq!(outcome.first_error().map(|f| &f.field), Some(&FieldName::USERNAME));
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn store_failure_propagates_to_the_caller() {
    let store = Arc::new(StubUsers::failing());

    let result = validator_with(&store).validate(record("johndoe", "a@b.com", "123456")).await;

    assert_eq!(result, Err(StoreDown));
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn concurrent_signups_each_consult_the_store() {
    let store = Arc::new(StubUsers::empty());
    let validator = Arc::new(make_signup_validator(Arc::clone(&store)));

    let handles: Vec<_> = ["one@x.com", "two@x.com"]
        .into_iter()
        .map(|email| {
            let validator = Arc::clone(&validator);
            tokio::spawn(async move {
                validator.validate(record("johndoe", email, "123456")).await
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_valid());
    }

    let mut seen = store.seen();
    seen.sort();
    assert_eq!(seen, vec!["one@x.com".to_string(), "two@x.com".to_string()]);
}

#[test]
fn record_debug_redacts_password() {
    let rendered = format!("{:?}", record("johndoe", "a@b.com", "hunter22"));

    assert!(rendered.contains("johndoe"));
    assert!(!rendered.contains("hunter22"));
    assert!(rendered.contains("<redacted>"));
}
