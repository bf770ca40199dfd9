//! User repository for the `users` table.
//!
//! Accounts are looked up by the provider-local id carried in the subject
//! (`<provider>|<local-id>`) and created from a [`NewAccount`]. Each call is a
//! single parameterized statement; uniqueness of `id` and `auth0id` is left to
//! the database, so two racing creates for the same subject end with one row
//! and one [`DbError::DuplicateAccount`].

use crate::{DbError, Result as DbErrorResult};

use acct_core::{Account, NewAccount, extract_local_id};

use std::panic::Location;

use chrono::{DateTime, TimeZone};
use error_location::ErrorLocation;
use log::{debug, warn};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const SELECT_BY_AUTH0_ID: &str = r#"
    SELECT id, auth0id, email, emailverified,
           firstname, lastname, picture, locale, created
    FROM users
    WHERE auth0id = ?
"#;

const INSERT_USER: &str = r#"
    INSERT INTO users (
        id, auth0id, email, emailverified,
        firstname, lastname, picture, locale, created
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

#[derive(FromRow)]
struct AccountRow {
    id: String,
    auth0id: String,
    email: String,
    emailverified: bool,
    firstname: Option<String>,
    lastname: Option<String>,
    picture: Option<String>,
    locale: Option<String>,
    created: i64,
}

impl TryFrom<AccountRow> for Account {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: AccountRow) -> DbErrorResult<Self> {
        Ok(Account {
            id: Uuid::parse_str(&row.id).map_err(|e| DbError::CorruptRow {
                table: "users",
                column: "id",
                message: format!("Invalid UUID '{}': {}", row.id, e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            created: DateTime::from_timestamp(row.created, 0).ok_or_else(|| {
                DbError::CorruptRow {
                    table: "users",
                    column: "created",
                    message: format!("Timestamp out of range: {}", row.created),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            auth0_id: row.auth0id,
            email: row.email,
            email_verified: row.emailverified,
            first_name: row.firstname,
            last_name: row.lastname,
            picture: row.picture,
            locale: row.locale,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Close the underlying pool, waiting for in-flight statements to finish
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Fetch the account belonging to `subject`.
    ///
    /// A malformed subject is rejected before any query is issued.
    pub async fn find_by_subject(&self, subject: &str) -> DbErrorResult<Account> {
        let auth0_id = extract_local_id(subject)?;

        let row = sqlx::query_as::<_, AccountRow>(SELECT_BY_AUTH0_ID)
            .bind(auth0_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DbError::storage(format!("selecting users where auth0id = '{auth0_id}'"), e)
            })?;

        let account = match row {
            Some(row) => Account::try_from(row)?,
            None => {
                return Err(DbError::NotFound {
                    auth0_id: auth0_id.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        debug!("Found account {} for auth0id {}", account.id, account.auth0_id);

        Ok(account)
    }

    /// Create and persist a new account, returning it exactly as stored.
    ///
    /// `now` is converted to UTC and truncated to whole seconds, matching the
    /// precision of the `created` column.
    pub async fn create<Tz: TimeZone>(
        &self,
        request: NewAccount,
        now: DateTime<Tz>,
    ) -> DbErrorResult<Account> {
        let account = Account::new(request, now)?;

        let id = account.id.to_string();
        let created = account.created.timestamp();

        let result = sqlx::query(INSERT_USER)
            .bind(&id)
            .bind(&account.auth0_id)
            .bind(&account.email)
            .bind(account.email_verified)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.picture)
            .bind(&account.locale)
            .bind(created)
            .execute(&self.pool)
            .await;

        if let Err(source) = result {
            return Err(Self::insert_error(&account, source));
        }

        debug!("Created account {} for auth0id {}", account.id, account.auth0_id);

        Ok(account)
    }

    #[track_caller]
    fn insert_error(account: &Account, source: sqlx::Error) -> DbError {
        let unique_violation =
            matches!(&source, sqlx::Error::Database(e) if e.is_unique_violation());

        if unique_violation {
            warn!("Duplicate account for auth0id {}", account.auth0_id);
            return DbError::DuplicateAccount {
                auth0_id: account.auth0_id.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            };
        }

        DbError::storage(
            format!(
                "inserting into users (id = '{}', auth0id = '{}')",
                account.id, account.auth0_id
            ),
            source,
        )
    }
}
