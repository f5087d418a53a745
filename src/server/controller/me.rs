use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        measurement::MeasurementsDto,
        profile::{MeViewDto, ProfileDto, UpdateNameDto},
    },
    server::{
        controller::util::get_profile::get_profile_from_session,
        error::Error,
        model::app::AppState,
        service::{measurement::MeasurementService, profile::ProfileService},
    },
};

pub static ME_TAG: &str = "me";

/// Get the signed-in account's profile, measurements, and children
#[utoipa::path(
    get,
    path = "/api/me",
    tag = ME_TAG,
    responses(
        (status = 200, description = "The account's own page", body = MeViewDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;

    let view = ProfileService::new(&state.db).me_view(profile).await?;

    Ok((StatusCode::OK, Json(view)))
}

/// Update the signed-in account's display name
#[utoipa::path(
    put,
    path = "/api/me/name",
    tag = ME_TAG,
    request_body = UpdateNameDto,
    responses(
        (status = 200, description = "Name updated", body = ProfileDto),
        (status = 400, description = "Name is blank", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_name(
    State(state): State<AppState>,
    session: Session,
    Json(update): Json<UpdateNameDto>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;

    let updated = ProfileService::new(&state.db)
        .update_full_name(&profile.id, &update.full_name)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// Save the signed-in account's measurement record
#[utoipa::path(
    put,
    path = "/api/me/measurements",
    tag = ME_TAG,
    request_body = MeasurementsDto,
    responses(
        (status = 200, description = "Measurements saved", body = MeasurementsDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_measurements(
    State(state): State<AppState>,
    session: Session,
    Json(measurements): Json<MeasurementsDto>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;

    let saved = MeasurementService::new(&state.db)
        .save_profile_measurements(&profile.id, &measurements)
        .await?;

    Ok((StatusCode::OK, Json(saved)))
}
