//! End-to-end validation behaviour of the payload records.
//!
//! Covers the documented scenarios (profile requiredness, account type
//! membership, an invalid element in a tweet list, a missing nested
//! stat) plus short-circuiting, idempotence, and concurrent use.

use nsa_core::{AccountType, EnumType, IsoDate, Record, ValidationError, ValidationErrorKind};
use nsa_records::{all_schemas, schema_by_name, MyTweets, Profile, Stat, Stats, Tweet};
use proptest::prelude::*;

fn date() -> IsoDate {
    IsoDate::from_ymd(2024, 5, 1).unwrap()
}

fn base_profile() -> Profile {
    Profile::default()
        .with_id("p-1")
        .with_username("ada")
        .with_email("ada@example.com")
}

#[test]
fn test_profile_without_account_type_is_valid() {
    let profile = base_profile();
    assert!(profile.account_type.is_none());
    assert_eq!(profile.validate(), Ok(()));
}

#[test]
fn test_profile_account_type_membership() {
    assert_eq!(
        base_profile()
            .with_account_type(AccountType::new("CREATOR"))
            .validate(),
        Ok(())
    );

    let err = base_profile()
        .with_account_type(AccountType::new("HOBBYIST"))
        .validate()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "AccountType is invalid: HOBBYIST is not a valid AccountType value"
    );
    assert_eq!(err.field_path(), vec!["AccountType"]);
    assert_eq!(err.root_cause().kind(), ValidationErrorKind::InvalidEnumValue);
}

#[test]
fn test_my_tweets_reports_invalid_element() {
    let payload = MyTweets::default()
        .with_id("u-1")
        .with_username("ada")
        .with_tweets(vec![
            Tweet::new("t-1", date(), "first"),
            Tweet::default().with_id("t-2"),
        ]);

    let err = payload.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "An element of Tweets is invalid: Date is a required property of Tweet"
    );
    assert_eq!(err.kind(), ValidationErrorKind::NestedValidationFailure);
    assert_eq!(err.field_path(), vec!["Tweets", "Date"]);
    assert_eq!(
        err.root_cause(),
        &ValidationError::MissingRequiredField {
            record: "Tweet",
            field: "Date",
        }
    );
}

#[test]
fn test_stats_missing_nested_stat_reported_before_inspection() {
    let stats = Stats::default().with_id("t-1").with_date(date());
    assert_eq!(
        stats.validate().unwrap_err().to_string(),
        "Stats is a required property of Stats"
    );
}

#[test]
fn test_only_first_violation_is_reported() {
    // Username missing, Email missing, AccountType invalid.
    let profile = Profile::default()
        .with_id("p-1")
        .with_account_type(AccountType::new("nope"));
    let err = profile.validate().unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingRequiredField {
            record: "Profile",
            field: "Username",
        }
    );
    assert!(!err.to_string().contains("Email"));
    assert!(!err.to_string().contains("nope"));
}

#[test]
fn test_first_failing_element_wins() {
    let payload = MyTweets::default()
        .with_id("u-1")
        .with_username("ada")
        .with_tweets(vec![
            Tweet::default().with_id("t-1").with_date(date()),
            Tweet::default(),
        ]);
    assert_eq!(
        payload.validate().unwrap_err().to_string(),
        "An element of Tweets is invalid: Body is a required property of Tweet"
    );
}

#[test]
fn test_empty_present_collection_passes() {
    let payload = MyTweets::default()
        .with_id("u-1")
        .with_username("ada")
        .with_tweets(Vec::new());
    assert_eq!(payload.validate(), Ok(()));
}

#[test]
fn test_validation_is_idempotent_and_non_mutating() {
    let payload = MyTweets::default()
        .with_id("u-1")
        .with_tweets(vec![Tweet::default()]);
    let before = payload.clone();
    let first = payload.validate();
    let second = payload.validate();
    assert_eq!(first, second);
    assert_eq!(payload, before);
}

#[test]
fn test_concurrent_validation_of_shared_record() {
    let stats = Stats::default()
        .with_id("t-1")
        .with_date(date())
        .with_stats(Stat::new(1, 2, 3, 4));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| stats.validate())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(()));
        }
    });
}

#[test]
fn test_nested_kinds_resolve_to_known_records() {
    for schema in all_schemas() {
        for field in schema.fields {
            if let Some(name) = field.kind.record_name() {
                assert!(
                    schema_by_name(name).is_some(),
                    "{}.{} refers to unknown record {name}",
                    schema.name,
                    field.name
                );
            }
        }
    }
}

fn opt_string() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z]{0,8}")
}

fn opt_account_type() -> impl Strategy<Value = Option<AccountType>> {
    proptest::option::of(
        prop_oneof![Just("BUSINESS"), Just("CREATOR"), Just("creator"), Just("HOBBYIST")]
            .prop_map(AccountType::new),
    )
}

proptest! {
    /// A profile validates iff its required fields are present and its
    /// account type, when present, is a declared literal.
    #[test]
    fn test_profile_valid_iff_invariants_hold(
        id in opt_string(),
        username in opt_string(),
        email in opt_string(),
        bio in opt_string(),
        account_type in opt_account_type(),
        verified in proptest::option::of(any::<bool>()),
    ) {
        let expected = id.is_some()
            && username.is_some()
            && email.is_some()
            && account_type.as_ref().map_or(true, |t| t.is_valid());
        let profile = Profile {
            id,
            username,
            email,
            bio,
            account_type,
            verified,
            ..Profile::default()
        };
        prop_assert_eq!(profile.validate().is_ok(), expected);
        prop_assert_eq!(profile.validate(), profile.validate());
    }

    /// A tweet list validates iff every element has all three fields.
    #[test]
    fn test_tweet_list_valid_iff_every_element_complete(
        shape in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 0..6),
    ) {
        let tweets: Vec<Tweet> = shape
            .iter()
            .map(|&(id, dated, body)| Tweet {
                id: id.then(|| "t".to_string()),
                date: dated.then(date),
                body: body.then(|| "b".to_string()),
            })
            .collect();
        let expected = shape.iter().all(|&(a, b, c)| a && b && c);
        let payload = MyTweets::default()
            .with_id("u-1")
            .with_username("ada")
            .with_tweets(tweets);
        prop_assert_eq!(payload.validate().is_ok(), expected);
    }
}
