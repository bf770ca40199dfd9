use serde::{Deserialize, Serialize};

/// Input for creating an account. Consumed by [`crate::Account::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    /// Full subject as issued by the identity provider, e.g. `auth0|abc123`
    #[serde(rename = "auth0Id")]
    pub subject: String,
    pub email: String,
    pub email_verified: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub picture: Option<String>,
    pub locale: Option<String>,
}

impl NewAccount {
    /// Request with only the required fields set
    pub fn new(subject: impl Into<String>, email: impl Into<String>, email_verified: bool) -> Self {
        Self {
            subject: subject.into(),
            email: email.into(),
            email_verified,
            first_name: None,
            last_name: None,
            picture: None,
            locale: None,
        }
    }
}
