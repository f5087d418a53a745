use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sizevault::{
    model::profile::UpdateNameDto,
    server::{
        controller::me::update_name, data::profile::ProfileRepository,
        model::session::account::SessionAccount,
    },
};
use sizevault_test_utils::prelude::*;

use crate::TestSetupExt;

/// Expect 200 and the stored name to change
#[tokio::test]
async fn updates_display_name() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, None)
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = update_name(
        State(test.into_app_state()),
        test.session,
        Json(UpdateNameDto {
            full_name: "Jane Doe".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let profile = ProfileRepository::new(&test.db).get(TEST_ACCOUNT_ID).await?;
    assert_eq!(profile.unwrap().full_name, Some("Jane Doe".to_string()));

    Ok(())
}

/// Expect 400 for a blank name, leaving the stored name untouched
#[tokio::test]
async fn rejects_blank_name() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, None)
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = update_name(
        State(test.into_app_state()),
        test.session,
        Json(UpdateNameDto {
            full_name: "   ".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let profile = ProfileRepository::new(&test.db).get(TEST_ACCOUNT_ID).await?;
    assert_eq!(profile.unwrap().full_name, None);

    Ok(())
}
