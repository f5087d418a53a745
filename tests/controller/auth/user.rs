use axum::{http::StatusCode, response::IntoResponse};
use sizevault::server::{controller::auth::user, model::session::account::SessionAccount};
use sizevault_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 with the signed-in account
async fn returns_signed_in_account() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = user(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 when no account is in session
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = user(test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
