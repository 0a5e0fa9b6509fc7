use std::collections::HashMap;
use std::sync::Arc;

use signup_rail::prelude::*;

struct Directory(HashMap<&'static str, u64>);

impl UserLookup for Directory {
    type Record = u64;
    type Error = &'static str;

    fn find_one<'a>(
        &'a self,
        criteria: UserCriteria<'a>,
    ) -> BoxFuture<'a, Result<Option<u64>, Self::Error>> {
        Box::pin(async move { Ok(self.0.get(criteria.email).copied()) })
    }
}

fn directory() -> Directory {
    Directory(HashMap::from([("a@b.com", 1)]))
}

async fn lookup<S: UserLookup>(store: &S, email: &str) -> Result<Option<S::Record>, S::Error> {
    store.find_one(UserCriteria::by_email(email)).await
}

#[tokio::test]
async fn lookup_is_reachable_through_arc_and_reference() {
    let shared = Arc::new(directory());
    assert_eq!(lookup(&shared, "a@b.com").await, Ok(Some(1)));

    let borrowed = &*shared;
    assert_eq!(lookup(&borrowed, "c@d.com").await, Ok(None));
}

#[test]
fn criteria_carry_the_email() {
    let criteria = UserCriteria::by_email("a@b.com");
    assert_eq!(criteria.email, "a@b.com");
    assert_eq!(criteria, UserCriteria { email: "a@b.com" });
}

#[tokio::test]
async fn sync_rule_reports_name_and_outcome() {
    let rule = SyncRule::new("non-zero", |n: u32| {
        if n == 0 {
            Validation::invalid(ValidationFailure::new(
                FieldName::new("n"),
                Constraint::MIN,
                "n must not be zero",
            ))
        } else {
            Validation::valid(n)
        }
    });

    assert_eq!(Rule::<u32, ()>::name(&rule), "non-zero");
    assert_eq!(Rule::<u32, ()>::check(&rule, 3).await, Ok(Validation::valid(3)));
    assert!(Rule::<u32, ()>::check(&rule, 0).await.unwrap().is_invalid());
}

#[tokio::test]
async fn async_rule_can_consult_a_captured_store() {
    let store = Arc::new(directory());
    let rule = AsyncRule::new("known", move |email: String| {
        let store = Arc::clone(&store);
        async move {
            let found = store.find_one(UserCriteria::by_email(&email)).await?;
            Ok::<_, &'static str>(match found {
                Some(_) => Validation::valid(email),
                None => Validation::invalid(ValidationFailure::new(
                    FieldName::EMAIL,
                    Constraint::new("exists"),
                    "Email is not registered",
                )),
            })
        }
    });

    assert_eq!(
        rule.check("a@b.com".to_string()).await,
        Ok(Validation::valid("a@b.com".to_string()))
    );
    assert!(rule.check("x@y.com".to_string()).await.unwrap().is_invalid());
}

#[tokio::test]
async fn boxed_rules_delegate_to_the_inner_rule() {
    let boxed: Box<dyn Rule<u8, ()>> =
        Box::new(SyncRule::new("identity", Validation::<ValidationFailure, u8>::valid));
    let validator = Validator::<u8, ()>::builder().rule(boxed).build();

    assert_eq!(validator.rule_names().collect::<Vec<_>>(), vec!["identity"]);
    assert_eq!(validator.validate(9).await, Ok(Validation::valid(9)));
}
