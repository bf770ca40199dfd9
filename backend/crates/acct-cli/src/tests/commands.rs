use crate::tests::test_repository;
use crate::{Cli, CliError, Commands};

use acct_db::ErrorKind;

use googletest::prelude::*;

fn create_command(subject: &str) -> Commands {
    Commands::Create {
        subject: subject.to_string(),
        email: "ada@example.com".to_string(),
        email_verified: true,
        first_name: Some("Ada".to_string()),
        last_name: None,
        picture: None,
        locale: None,
    }
}

#[tokio::test]
async fn given_create_then_find_when_executed_then_same_account_returned() {
    // Given
    let (_temp, repo) = test_repository().await;

    // When
    let created = create_command("auth0|ada").execute(&repo).await.unwrap();
    let found = Commands::Find {
        subject: "auth0|ada".to_string(),
    }
    .execute(&repo)
    .await
    .unwrap();

    // Then
    assert_that!(found, eq(&created));
    assert_that!(found.first_name, some(eq("Ada")));
}

#[tokio::test]
async fn given_unknown_subject_when_find_executed_then_not_found_code() {
    let (_temp, repo) = test_repository().await;

    let err = Commands::Find {
        subject: "auth0|nobody".to_string(),
    }
    .execute(&repo)
    .await
    .unwrap_err();

    assert_that!(err.error_code(), eq("NOT_FOUND"));
    assert!(matches!(
        err,
        CliError::Db { ref source } if source.kind() == ErrorKind::NotFound
    ));
}

#[tokio::test]
async fn given_duplicate_create_when_executed_then_duplicate_account_code() {
    let (_temp, repo) = test_repository().await;
    create_command("auth0|ada").execute(&repo).await.unwrap();

    let err = create_command("auth0|ada").execute(&repo).await.unwrap_err();

    assert_that!(err.error_code(), eq("DUPLICATE_ACCOUNT"));
}

#[tokio::test]
async fn given_pretty_flag_when_run_then_json_is_indented_camel_case() {
    // Given
    let (_temp, repo) = test_repository().await;
    let cli = Cli {
        command: create_command("auth0|ada"),
        pretty: true,
    };

    // When
    let json = crate::run(cli, &repo).await.unwrap();

    // Then
    assert_that!(json, contains_substring("\n  \"auth0Id\": \"ada\""));
    assert_that!(json, contains_substring("\"emailVerified\": true"));
}

#[tokio::test]
async fn given_malformed_subject_when_run_then_invalid_identity_code() {
    let (_temp, repo) = test_repository().await;
    let cli = Cli {
        command: Commands::Find {
            subject: "ada".to_string(),
        },
        pretty: false,
    };

    let err = crate::run(cli, &repo).await.unwrap_err();

    assert_that!(err.error_code(), eq("INVALID_IDENTITY_FORMAT"));
}
