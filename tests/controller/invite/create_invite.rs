use axum::{extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use sizevault::server::{controller::invite::create_invite, model::session::account::SessionAccount};
use sizevault_test_utils::prelude::*;

use crate::TestSetupExt;

/// Expect 200 and a stored invite row for the account's family
#[tokio::test]
async fn issues_invite() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    let family = test.family().insert_family("The Does").await?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, Some(family.id))
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = create_invite(State(test.into_app_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let invite = entity::prelude::FamilyInvite::find()
        .filter(entity::family_invite::Column::FamilyId.eq(family.id))
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(invite.invited_by, TEST_ACCOUNT_ID);

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

    let result = create_invite(State(test.into_app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
