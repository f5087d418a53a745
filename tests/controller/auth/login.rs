use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sizevault::{
    model::auth::CredentialsDto,
    server::{
        controller::auth::login, data::profile::ProfileRepository,
        model::session::account::SessionAccount,
    },
};
use sizevault_test_utils::prelude::*;

use crate::TestSetupExt;

#[tokio::test]
/// Expect 200 and a session for valid credentials
async fn signs_in_with_valid_credentials() -> Result<(), TestError> {
    let mut test = test_setup_with_family_tables!()?;
    let mock = test
        .identity()
        .create_sign_in_endpoint(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, 1);

    let result = login(
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
    assert_eq!(account.unwrap().email, TEST_ACCOUNT_EMAIL);

    // First sign-in provisions the profile row
    let profile = ProfileRepository::new(&test.db).get(TEST_ACCOUNT_ID).await?;
    assert!(profile.is_some());
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect 401 and no session for rejected credentials
async fn unauthorized_for_invalid_credentials() -> Result<(), TestError> {
    let mut test = test_setup_with_family_tables!()?;
    let mock = test.identity().create_sign_in_failure_endpoint(1);

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Json(CredentialsDto {
            email: TEST_ACCOUNT_EMAIL.to_string(),
            password: "wrong password".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let account = SessionAccount::get(&test.session).await.unwrap();
    assert!(account.is_none());
    mock.assert();

    Ok(())
}
