use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::family_member::FamilyRole;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use sizevault::{
    model::family::CreateFamilyDto,
    server::{
        controller::family::create_family, data::profile::ProfileRepository,
        model::session::account::SessionAccount,
    },
};
use sizevault_test_utils::prelude::*;

use crate::TestSetupExt;

/// Expect 200, a family row, an admin membership, and the profile linked to it
#[tokio::test]
async fn creates_family_with_admin() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, None)
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = create_family(
        State(test.into_app_state()),
        test.session,
        Json(CreateFamilyDto {
            name: "The Does".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let family = entity::prelude::Family::find().one(&test.db).await?.unwrap();
    assert_eq!(family.name, "The Does");

    let member = entity::prelude::FamilyMember::find()
        .filter(entity::family_member::Column::FamilyId.eq(family.id))
        .filter(entity::family_member::Column::ProfileId.eq(TEST_ACCOUNT_ID))
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(member.role, FamilyRole::Admin);

    let profile = ProfileRepository::new(&test.db).get(TEST_ACCOUNT_ID).await?;
    assert_eq!(profile.unwrap().family_id, Some(family.id));

    Ok(())
}

/// Expect 400 for a blank family name
#[tokio::test]
async fn rejects_blank_name() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, None)
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = create_family(
        State(test.into_app_state()),
        test.session,
        Json(CreateFamilyDto {
            name: "  ".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let families = entity::prelude::Family::find().all(&test.db).await?;
    assert!(families.is_empty());

    Ok(())
}

/// Expect 401 without a session
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;

    let result = create_family(
        State(test.into_app_state()),
        test.session,
        Json(CreateFamilyDto {
            name: "The Does".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
