//! Account entity - one row of the `users` table.

use crate::{NewAccount, Result as CoreErrorResult, extract_local_id};

use chrono::{DateTime, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted user account.
///
/// `id` and `auth0_id` are fixed at creation. `created` is stored with
/// whole-second precision, so values built by [`Account::new`] are already
/// truncated and compare equal to what the store hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    /// Provider-local id extracted from the subject
    #[serde(rename = "auth0Id")]
    pub auth0_id: String,
    pub email: String,
    pub email_verified: bool,

    // Profile
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub picture: Option<String>,
    pub locale: Option<String>,

    pub created: DateTime<Utc>,
}

impl Account {
    /// Build a fresh account from a creation request.
    ///
    /// Extracts the provider-local id from `request.subject`, assigns a new
    /// random (v4) id and stamps `created` with `now` converted to UTC.
    #[track_caller]
    pub fn new<Tz: TimeZone>(request: NewAccount, now: DateTime<Tz>) -> CoreErrorResult<Self> {
        let auth0_id = extract_local_id(&request.subject)?.to_string();

        Ok(Self {
            id: Uuid::new_v4(),
            auth0_id,
            email: request.email,
            email_verified: request.email_verified,
            first_name: request.first_name,
            last_name: request.last_name,
            picture: request.picture,
            locale: request.locale,
            created: now.with_timezone(&Utc).trunc_subsecs(0),
        })
    }
}
