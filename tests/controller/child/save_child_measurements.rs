use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use sizevault::{
    model::measurement::MeasurementsDto,
    server::{controller::child::save_child_measurements, model::session::account::SessionAccount},
};
use sizevault_test_utils::prelude::*;

use crate::TestSetupExt;

/// Expect 200 and a measurement row for the child
#[tokio::test]
async fn saves_child_record() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, None)
        .await?;
    let child = test
        .profile()
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

    let result = save_child_measurements(
        State(test.into_app_state()),
        test.session,
        Path(child.id),
        Json(MeasurementsDto {
            height_cm: Some(104.0),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = entity::prelude::ChildMeasurement::find()
        .filter(entity::child_measurement::Column::ChildId.eq(child.id))
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.height_cm, Some(104.0));

    Ok(())
}

/// Expect 403 when the child belongs to another account
#[tokio::test]
async fn forbidden_for_foreign_child() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, None)
        .await?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID_B, "other@example.com", None)
        .await?;
    let child = test
        .profile()
        .insert_child(
            "Liam",
            NaiveDate::from_ymd_opt(2021, 9, 15).unwrap(),
            TEST_ACCOUNT_ID_B,
            None,
        )
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = save_child_measurements(
        State(test.into_app_state()),
        test.session,
        Path(child.id),
        Json(MeasurementsDto {
            height_cm: Some(90.0),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 403 when the child does not exist
#[tokio::test]
async fn forbidden_for_unknown_child() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, None)
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = save_child_measurements(
        State(test.into_app_state()),
        test.session,
        Path(999),
        Json(MeasurementsDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
