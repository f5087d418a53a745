use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::family_member::FamilyRole;
use sizevault::server::{
    controller::family::{family_overview, FamilyOverviewParams},
    model::session::account::SessionAccount,
};
use sizevault_test_utils::prelude::*;

use crate::TestSetupExt;

/// Expect 200 for a family member
#[tokio::test]
async fn returns_overview() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    let family = test.family().insert_family("The Does").await?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, Some(family.id))
        .await?;
    test.family()
        .insert_member(family.id, TEST_ACCOUNT_ID, FamilyRole::Admin)
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = family_overview(
        State(test.into_app_state()),
        test.session,
        Query(FamilyOverviewParams { member: None }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 409 when the account has no family
#[tokio::test]
async fn conflict_when_not_in_family() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, None)
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = family_overview(
        State(test.into_app_state()),
        test.session,
        Query(FamilyOverviewParams { member: None }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 with another roster member's detail selected
#[tokio::test]
async fn returns_selected_member_detail() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    let family = test.family().insert_family("The Does").await?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, Some(family.id))
        .await?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID_B, "partner@example.com", Some(family.id))
        .await?;
    test.family()
        .insert_member(family.id, TEST_ACCOUNT_ID, FamilyRole::Admin)
        .await?;
    test.family()
        .insert_member(family.id, TEST_ACCOUNT_ID_B, FamilyRole::Member)
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = family_overview(
        State(test.into_app_state()),
        test.session,
        Query(FamilyOverviewParams {
            member: Some(TEST_ACCOUNT_ID_B.to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
