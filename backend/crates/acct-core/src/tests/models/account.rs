use crate::{Account, CoreError, NewAccount};

use chrono::{DateTime, FixedOffset, TimeZone, Timelike, Utc};

fn request(subject: &str) -> NewAccount {
    NewAccount {
        subject: subject.to_string(),
        email: "ada@example.com".to_string(),
        email_verified: true,
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        picture: None,
        locale: Some("en-GB".to_string()),
    }
}

#[test]
fn test_account_new_copies_request_fields() {
    let now = Utc::now();
    let account = Account::new(request("auth0|ada"), now).unwrap();

    assert_eq!(account.auth0_id, "ada");
    assert_eq!(account.email, "ada@example.com");
    assert!(account.email_verified);
    assert_eq!(account.first_name.as_deref(), Some("Ada"));
    assert_eq!(account.last_name.as_deref(), Some("Lovelace"));
    assert_eq!(account.picture, None);
    assert_eq!(account.locale.as_deref(), Some("en-GB"));
    assert_eq!(account.id.get_version_num(), 4);
}

#[test]
fn test_account_new_assigns_distinct_ids() {
    let now = Utc::now();
    let first = Account::new(request("auth0|ada"), now).unwrap();
    let second = Account::new(request("auth0|ada"), now).unwrap();

    assert_ne!(first.id, second.id);
}

#[test]
fn test_account_new_normalizes_created_to_utc_seconds() {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let now = offset
        .with_ymd_and_hms(2024, 3, 1, 12, 30, 15)
        .unwrap()
        .with_nanosecond(987_654_321)
        .unwrap();

    let account = Account::new(request("auth0|ada"), now).unwrap();

    let expected: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 15).unwrap();
    assert_eq!(account.created, expected);
    assert_eq!(account.created.nanosecond(), 0);
}

#[test]
fn test_account_new_rejects_malformed_subject() {
    let result = Account::new(request("auth0"), Utc::now());

    assert!(matches!(
        result,
        Err(CoreError::InvalidIdentityFormat { .. })
    ));
}

#[test]
fn test_account_new_keeps_empty_string_distinct_from_absent() {
    let mut req = request("auth0|ada");
    req.picture = Some(String::new());

    let account = Account::new(req, Utc::now()).unwrap();

    assert_eq!(account.picture, Some(String::new()));
    assert_ne!(account.picture, None);
}
