//! End-to-end invite journey: one account signs up, creates a family, issues
//! an invite, a second account redeems the token, and a third arrives after
//! the token has lapsed.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{Duration, Utc};
use entity::family_member::FamilyRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter,
};
use sizevault::{
    model::{
        auth::CredentialsDto,
        family::{AcceptInviteDto, CreateFamilyDto},
    },
    server::{
        controller::{
            auth::signup,
            family::create_family,
            invite::{accept_invite, create_invite},
        },
        model::session::account::SessionAccount,
    },
};
use sizevault_test_utils::prelude::*;

use crate::TestSetupExt;

/// Expect signup, family creation, issuance, redemption, and expiry to chain
#[tokio::test]
async fn invite_round_trip() -> Result<(), TestError> {
    let mut test = test_setup_with_family_tables!()?;
    let mock = test
        .identity()
        .create_sign_up_endpoint(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, 1);
    let state = test.into_app_state();

    // First account signs up and starts a family
    let result = signup(
        State(state.clone()),
        test.session.clone(),
        Json(CredentialsDto {
            email: TEST_ACCOUNT_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;
    assert!(result.is_ok());
    mock.assert();

    let result = create_family(
        State(state.clone()),
        test.session.clone(),
        Json(CreateFamilyDto {
            name: "The Does".to_string(),
        }),
    )
    .await;
    assert!(result.is_ok());

    let result = create_invite(State(state.clone()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let invite = entity::prelude::FamilyInvite::find()
        .one(&test.db)
        .await?
        .unwrap();

    // Second account redeems the token
    test.session.clear().await;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID_B, "partner@example.com")
        .await
        .unwrap();

    let result = accept_invite(
        State(state.clone()),
        test.session.clone(),
        Json(AcceptInviteDto {
            token: invite.token.clone(),
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
    assert_eq!(member.family_id, invite.family_id);
    assert_eq!(member.role, FamilyRole::Member);

    // Redeeming the same token again stays a no-op
    let result = accept_invite(
        State(state.clone()),
        test.session.clone(),
        Json(AcceptInviteDto {
            token: invite.token.clone(),
        }),
    )
    .await;
    assert!(result.is_ok());

    let members = entity::prelude::FamilyMember::find()
        .filter(entity::family_member::Column::ProfileId.eq(TEST_ACCOUNT_ID_B))
        .all(&test.db)
        .await?;
    assert_eq!(members.len(), 1);

    // The token lapses before a third account tries it
    let mut invite_am = invite.clone().into_active_model();
    invite_am.expires_at = ActiveValue::Set(Utc::now().naive_utc() - Duration::days(1));
    invite_am.update(&test.db).await?;

    test.session.clear().await;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID_C, "cousin@example.com")
        .await
        .unwrap();

    let result = accept_invite(
        State(state),
        test.session.clone(),
        Json(AcceptInviteDto {
            token: invite.token,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::GONE);

    // The latecomer never entered the family
    let profile = entity::prelude::Profile::find_by_id(TEST_ACCOUNT_ID_C)
        .one(&test.db)
        .await?;
    assert!(profile.is_none());

    Ok(())
}
