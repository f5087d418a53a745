use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AccountDto, CredentialsDto, SignUpDto},
    },
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::account::SessionAccount},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account with the identity provider
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Account registered; session established unless email confirmation is pending", body = SignUpDto),
        (status = 400, description = "Identity provider rejected the registration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.identity);

    let outcome = auth_service
        .sign_up(&credentials.email, &credentials.password)
        .await?;

    if let Some(account) = &outcome.account {
        SessionAccount::insert(&session, &account.id, &account.email).await?;
    }

    Ok((StatusCode::OK, Json(outcome)))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Signed in", body = AccountDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.identity);

    let account = auth_service
        .sign_in(&credentials.email, &credentials.password)
        .await?;

    SessionAccount::insert(&session, &account.id, &account.email).await?;

    Ok((StatusCode::OK, Json(account)))
}

/// Log out by clearing the session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let account = SessionAccount::get(&session).await?;

    // Only clear the session if an account is actually present
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if account.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::OK)
}

/// Get the currently signed-in account
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The signed-in account", body = AccountDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn user(session: Session) -> Result<impl IntoResponse, Error> {
    let Some(account) = SessionAccount::get(&session).await? else {
        return Err(AuthError::NotAuthenticated.into());
    };

    Ok((
        StatusCode::OK,
        Json(AccountDto {
            id: account.id,
            email: account.email,
        }),
    ))
}
