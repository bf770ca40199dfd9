use acct_core::NewAccount;

/// Creates a creation request with every profile field populated
pub fn create_test_new_account(subject: &str) -> NewAccount {
    NewAccount {
        subject: subject.to_string(),
        email: "grace@example.com".to_string(),
        email_verified: true,
        first_name: Some("Grace".to_string()),
        last_name: Some("Hopper".to_string()),
        picture: Some("https://example.com/grace.png".to_string()),
        locale: Some("en-US".to_string()),
    }
}

/// Creates a creation request with no optional profile fields
pub fn create_minimal_new_account(subject: &str) -> NewAccount {
    NewAccount::new(subject, "minimal@example.com", false)
}
