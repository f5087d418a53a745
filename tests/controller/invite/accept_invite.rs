use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{Duration, Utc};
use entity::family_member::FamilyRole;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use sizevault::{
    model::family::AcceptInviteDto,
    server::{
        controller::invite::accept_invite, data::profile::ProfileRepository,
        model::session::account::SessionAccount,
    },
};
use sizevault_test_utils::prelude::*;

use crate::TestSetupExt;

/// Expect 200 and a membership row for the redeeming account
#[tokio::test]
async fn joins_family() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    let family = test.family().insert_family("The Does").await?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, Some(family.id))
        .await?;
    let expires_at = Utc::now().naive_utc() + Duration::days(7);
    test.family()
        .insert_invite(family.id, TEST_ACCOUNT_ID, "token-one", expires_at)
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID_B, "partner@example.com")
        .await
        .unwrap();

    let result = accept_invite(
        State(test.into_app_state()),
        test.session,
        Json(AcceptInviteDto {
            token: "token-one".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let member = entity::prelude::FamilyMember::find()
        .filter(entity::family_member::Column::ProfileId.eq(TEST_ACCOUNT_ID_B))
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(member.family_id, family.id);
    assert_eq!(member.role, FamilyRole::Member);

    // A first-time account gets a profile row linked to the family
    let profile = ProfileRepository::new(&test.db)
        .get(TEST_ACCOUNT_ID_B)
        .await?
        .unwrap();
    assert_eq!(profile.family_id, Some(family.id));

    Ok(())
}

/// Expect 404 for an unknown token
#[tokio::test]
async fn not_found_for_unknown_token() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID_B, "partner@example.com")
        .await
        .unwrap();

    let result = accept_invite(
        State(test.into_app_state()),
        test.session,
        Json(AcceptInviteDto {
            token: "no-such-token".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 410 for an expired token, leaving the account outside the family
#[tokio::test]
async fn gone_for_expired_token() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    let family = test.family().insert_family("The Does").await?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, Some(family.id))
        .await?;
    let expires_at = Utc::now().naive_utc() - Duration::days(1);
    test.family()
        .insert_invite(family.id, TEST_ACCOUNT_ID, "token-one", expires_at)
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID_B, "partner@example.com")
        .await
        .unwrap();

    let result = accept_invite(
        State(test.into_app_state()),
        test.session,
        Json(AcceptInviteDto {
            token: "token-one".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::GONE);

    let member = entity::prelude::FamilyMember::find()
        .filter(entity::family_member::Column::ProfileId.eq(TEST_ACCOUNT_ID_B))
        .one(&test.db)
        .await?;
    assert!(member.is_none());

    Ok(())
}
