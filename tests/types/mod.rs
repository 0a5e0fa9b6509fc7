use std::error::Error;

use signup_rail::{Constraint, FieldName, ValidationFailure};


#[test]
fn builtin_field_names_and_constraints_render_as_tags() {
    assert_eq!(FieldName::USERNAME.as_str(), "username");
    assert_eq!(FieldName::EMAIL.as_str(), "email");
    assert_eq!(FieldName::PASSWORD.as_str(), "password");

    assert_eq!(Constraint::EMAIL.to_string(), "email");
    assert_eq!(Constraint::MIN.to_string(), "min");
    assert_eq!(Constraint::MAX.to_string(), "max");
    assert_eq!(Constraint::UNIQUE.to_string(), "unique");
}

#[test]
fn custom_names_compare_equal_to_builtins_with_same_text() {
    assert_eq!(FieldName::new("email"), FieldName::EMAIL);
    assert_eq!(FieldName::new(String::from("username")), FieldName::USERNAME);
    assert_eq!(Constraint::new("min"), Constraint::MIN);
    assert_ne!(Constraint::new("pattern"), Constraint::MAX);
}

#[test]
fn failures_compare_structurally() {
    let a = ValidationFailure::new(FieldName::EMAIL, Constraint::UNIQUE, "Email already in use");
    let b = ValidationFailure::new(
        FieldName::new("email"),
        Constraint::new("unique"),
        String::from("Email already in use"),
    );

    assert_eq!(a, b);
    assert_ne!(
        a,
        ValidationFailure::new(FieldName::EMAIL, Constraint::EMAIL, "Email already in use")
    );
}

#[test]
fn failure_display_names_field_and_message() {
    let failure = ValidationFailure::new(
        FieldName::PASSWORD,
        Constraint::MIN,
        "Password must be at least 5 characters long",
    );

    assert_eq!(failure.to_string(), "password: Password must be at least 5 characters long");
    assert_eq!(failure.message(), "Password must be at least 5 characters long");
}

#[test]
fn failure_is_a_std_error() {
    let failure =
        ValidationFailure::new(FieldName::EMAIL, Constraint::EMAIL, "Email must be valid");
    let boxed: Box<dyn Error + Send + Sync> = Box::new(failure);

    assert!(boxed.source().is_none());
    assert_eq!(boxed.to_string(), "email: Email must be valid");
}
