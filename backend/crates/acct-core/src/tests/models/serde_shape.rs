use crate::{Account, AccountUpdate, NewAccount};

use chrono::Utc;
use serde_json::json;

#[test]
fn test_new_account_deserializes_camel_case_payload() {
    let payload = json!({
        "auth0Id": "auth0|abc",
        "email": "abc@example.com",
        "emailVerified": false,
        "firstName": "Abc",
        "lastName": null,
        "picture": null,
        "locale": "fr"
    });

    let request: NewAccount = serde_json::from_value(payload).unwrap();

    assert_eq!(request.subject, "auth0|abc");
    assert!(!request.email_verified);
    assert_eq!(request.first_name.as_deref(), Some("Abc"));
    assert_eq!(request.last_name, None);
    assert_eq!(request.locale.as_deref(), Some("fr"));
}

#[test]
fn test_account_serializes_with_camel_case_keys() {
    let account = Account::new(NewAccount::new("auth0|abc", "abc@example.com", true), Utc::now())
        .unwrap();

    let value = serde_json::to_value(&account).unwrap();

    assert_eq!(value["auth0Id"], "abc");
    assert_eq!(value["emailVerified"], true);
    assert!(value["firstName"].is_null());
    assert!(value.get("created").is_some());
}

#[test]
fn test_account_update_defaults_to_all_absent() {
    let update: AccountUpdate = serde_json::from_value(json!({ "locale": "de" })).unwrap();

    assert_eq!(update.locale.as_deref(), Some("de"));
    assert_eq!(update.first_name, None);
    assert_eq!(update.last_name, None);
    assert_eq!(update.picture, None);
}
