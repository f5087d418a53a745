use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        measurement::MeasurementsDto,
        profile::{ChildDto, CreateChildDto},
    },
    server::{
        controller::util::get_profile::get_profile_from_session,
        error::Error,
        model::app::AppState,
        service::{child::ChildService, measurement::MeasurementService},
    },
};

pub static CHILD_TAG: &str = "child";

/// Add a child record under the signed-in account
#[utoipa::path(
    post,
    path = "/api/children",
    tag = CHILD_TAG,
    request_body = CreateChildDto,
    responses(
        (status = 200, description = "Child added", body = ChildDto),
        (status = 400, description = "Name is blank or birthdate does not parse", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_child(
    State(state): State<AppState>,
    session: Session,
    Json(child): Json<CreateChildDto>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;

    let created = ChildService::new(&state.db).add_child(&profile, &child).await?;

    Ok((StatusCode::OK, Json(created)))
}

/// Save a child's measurement record
#[utoipa::path(
    put,
    path = "/api/children/{child_id}/measurements",
    tag = CHILD_TAG,
    request_body = MeasurementsDto,
    params(
        ("child_id" = i32, Path, description = "Child to save measurements for")
    ),
    responses(
        (status = 200, description = "Measurements saved", body = MeasurementsDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Child does not exist or belongs to another account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_child_measurements(
    State(state): State<AppState>,
    session: Session,
    Path(child_id): Path<i32>,
    Json(measurements): Json<MeasurementsDto>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;

    let saved = MeasurementService::new(&state.db)
        .save_child_measurements(&profile.id, child_id, &measurements)
        .await?;

    Ok((StatusCode::OK, Json(saved)))
}
