use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use sizevault::{
    model::profile::CreateChildDto,
    server::{controller::child::create_child, model::session::account::SessionAccount},
};
use sizevault_test_utils::prelude::*;

use crate::TestSetupExt;

/// Expect 200 and a child row owned by the creator
#[tokio::test]
async fn adds_child() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, None)
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = create_child(
        State(test.into_app_state()),
        test.session,
        Json(CreateChildDto {
            name: "Maya".to_string(),
            birthdate: "2019-04-02".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let children = entity::prelude::Child::find()
        .filter(entity::child::Column::CreatedBy.eq(TEST_ACCOUNT_ID))
        .all(&test.db)
        .await?;
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name, "Maya");

    Ok(())
}

/// Expect 400 when the birthdate does not parse
#[tokio::test]
async fn rejects_unparseable_birthdate() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, None)
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = create_child(
        State(test.into_app_state()),
        test.session,
        Json(CreateChildDto {
            name: "Maya".to_string(),
            birthdate: "02/04/2019".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let children = entity::prelude::Child::find().all(&test.db).await?;
    assert!(children.is_empty());

    Ok(())
}

/// Expect 401 without a session
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;

    let result = create_child(
        State(test.into_app_state()),
        test.session,
        Json(CreateChildDto {
            name: "Maya".to_string(),
            birthdate: "2019-04-02".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
