//! Tests for the signup endpoint covering both identity provider modes:
//! immediate session and pending email confirmation.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sizevault::{
    model::auth::CredentialsDto,
    server::{
        controller::auth::signup, data::profile::ProfileRepository,
        model::session::account::SessionAccount,
    },
};
use sizevault_test_utils::prelude::*;

use crate::TestSetupExt;

#[tokio::test]
/// Expect 200 with a session and a profile row when the provider hands back a session
async fn establishes_session_and_profile() -> Result<(), TestError> {
    let mut test = test_setup_with_family_tables!()?;
    let mock = test
        .identity()
        .create_sign_up_endpoint(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, 1);

    let result = signup(
        State(test.into_app_state()),
        test.session.clone(),
        Json(CredentialsDto {
            email: TEST_ACCOUNT_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let account = SessionAccount::get(&test.session).await.unwrap();
    assert_eq!(account.unwrap().id, TEST_ACCOUNT_ID);

    let profile = ProfileRepository::new(&test.db).get(TEST_ACCOUNT_ID).await?;
    assert!(profile.is_some());
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect 200 with no session and no profile while email confirmation is pending
async fn leaves_session_empty_when_confirmation_pending() -> Result<(), TestError> {
    let mut test = test_setup_with_family_tables!()?;
    let mock = test.identity().create_sign_up_confirmation_endpoint(
        TEST_ACCOUNT_ID,
        TEST_ACCOUNT_EMAIL,
        1,
    );

    let result = signup(
        State(test.into_app_state()),
        test.session.clone(),
        Json(CredentialsDto {
            email: TEST_ACCOUNT_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let account = SessionAccount::get(&test.session).await.unwrap();
    assert!(account.is_none());

    // The profile only appears once the account can actually sign in
    let profile = ProfileRepository::new(&test.db).get(TEST_ACCOUNT_ID).await?;
    assert!(profile.is_none());
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect 400 passing through the provider's rejection message
async fn bad_request_when_provider_rejects() -> Result<(), TestError> {
    let mut test = test_setup_with_family_tables!()?;
    let mock = test.identity().create_sign_up_failure_endpoint(1);

    let result = signup(
        State(test.into_app_state()),
        test.session.clone(),
        Json(CredentialsDto {
            email: TEST_ACCOUNT_EMAIL.to_string(),
            password: "short".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let account = SessionAccount::get(&test.session).await.unwrap();
    assert!(account.is_none());
    mock.assert();

    Ok(())
}
