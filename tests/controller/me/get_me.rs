//! Tests for the me endpoint, which returns the signed-in account's profile,
//! own measurements, and children in a single payload.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use sizevault::server::{controller::me::get_me, model::session::account::SessionAccount};
use sizevault_test_utils::prelude::*;

use crate::TestSetupExt;

/// Expect 200 with the account's own page
#[tokio::test]
async fn returns_own_page() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, None)
        .await?;
    test.profile()
        .insert_child(
            "Maya",
            NaiveDate::from_ymd_opt(2019, 4, 2).unwrap(),
            TEST_ACCOUNT_ID,
            None,
        )
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = get_me(State(test.into_app_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 without a session
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;

    let result = get_me(State(test.into_app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 and a cleared session when the account has no profile row
#[tokio::test]
async fn clears_stale_session_without_profile() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = get_me(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // The stale session data is gone afterwards
    let account = SessionAccount::get(&test.session).await.unwrap();
    assert!(account.is_none());

    Ok(())
}
