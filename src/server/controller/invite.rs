use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        family::{AcceptInviteDto, FamilyDto, InviteDto},
    },
    server::{
        controller::util::get_profile::get_profile_from_session,
        error::{auth::AuthError, Error},
        model::{app::AppState, session::account::SessionAccount},
        service::invite::InviteService,
    },
};

pub static INVITE_TAG: &str = "invite";

/// Issue an invite token for the signed-in account's family
#[utoipa::path(
    post,
    path = "/api/family/invites",
    tag = INVITE_TAG,
    responses(
        (status = 200, description = "Invite issued", body = InviteDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 409, description = "Account is not in a family", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_invite(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;

    let invite = InviteService::new(&state.db)
        .create_invite(&profile, &state.public_origin)
        .await?;

    Ok((StatusCode::OK, Json(invite)))
}

/// Redeem an invite token, joining its family
#[utoipa::path(
    post,
    path = "/api/family/invites/accept",
    tag = INVITE_TAG,
    request_body = AcceptInviteDto,
    responses(
        (status = 200, description = "Joined the family", body = FamilyDto),
        (status = 400, description = "Token is blank", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Token does not match any invite", body = ErrorDto),
        (status = 410, description = "Invite has expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_invite(
    State(state): State<AppState>,
    session: Session,
    Json(accept): Json<AcceptInviteDto>,
) -> Result<impl IntoResponse, Error> {
    let Some(account) = SessionAccount::get(&session).await? else {
        return Err(AuthError::NotAuthenticated.into());
    };

    let family = InviteService::new(&state.db)
        .accept_invite(&account.id, &account.email, &accept.token)
        .await?;

    Ok((StatusCode::OK, Json(family)))
}
