use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        family::{CreateFamilyDto, FamilyDto, FamilyOverviewDto},
    },
    server::{
        controller::util::get_profile::get_profile_from_session,
        error::{auth::AuthError, Error},
        model::{app::AppState, session::account::SessionAccount},
        service::family::FamilyService,
    },
};

pub static FAMILY_TAG: &str = "family";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct FamilyOverviewParams {
    /// Roster member whose read-only detail to show; defaults to the
    /// signed-in account
    pub member: Option<String>,
}

/// Create a family group with the signed-in account as admin
#[utoipa::path(
    post,
    path = "/api/family",
    tag = FAMILY_TAG,
    request_body = CreateFamilyDto,
    responses(
        (status = 200, description = "Family created", body = FamilyDto),
        (status = 400, description = "Family name is blank", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_family(
    State(state): State<AppState>,
    session: Session,
    Json(family): Json<CreateFamilyDto>,
) -> Result<impl IntoResponse, Error> {
    let Some(account) = SessionAccount::get(&session).await? else {
        return Err(AuthError::NotAuthenticated.into());
    };

    let created = FamilyService::new(&state.db)
        .create_family(&account.id, &account.email, &family.name)
        .await?;

    Ok((StatusCode::OK, Json(created)))
}

/// Get the family page: roster and one member's read-only detail
#[utoipa::path(
    get,
    path = "/api/family",
    tag = FAMILY_TAG,
    params(FamilyOverviewParams),
    responses(
        (status = 200, description = "The family overview", body = FamilyOverviewDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 409, description = "Account is not in a family", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn family_overview(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<FamilyOverviewParams>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;

    let overview = FamilyService::new(&state.db)
        .family_overview(&profile, params.member.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(overview)))
}
