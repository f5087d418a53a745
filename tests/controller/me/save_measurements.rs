use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use sizevault::{
    model::measurement::MeasurementsDto,
    server::{controller::me::save_measurements, model::session::account::SessionAccount},
};
use sizevault_test_utils::prelude::*;

use crate::TestSetupExt;

/// Expect 200 and a measurement row for the profile
#[tokio::test]
async fn saves_measurement_record() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;
    test.profile()
        .insert_profile(TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL, None)
        .await?;
    SessionAccount::insert(&test.session, TEST_ACCOUNT_ID, TEST_ACCOUNT_EMAIL)
        .await
        .unwrap();

    let result = save_measurements(
        State(test.into_app_state()),
        test.session,
        Json(MeasurementsDto {
            height_cm: Some(172.0),
            shoe_size: Some(40.5),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = entity::prelude::ProfileMeasurement::find()
        .filter(entity::profile_measurement::Column::ProfileId.eq(TEST_ACCOUNT_ID))
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.height_cm, Some(172.0));
    assert_eq!(stored.shoe_size, Some(40.5));
    assert_eq!(stored.weight_kg, None);

    Ok(())
}

/// Expect 401 without a session
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_family_tables!()?;

    let result = save_measurements(
        State(test.into_app_state()),
        test.session,
        Json(MeasurementsDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
