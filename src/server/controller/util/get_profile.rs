use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    data::profile::ProfileRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, db::ProfileModel, session::account::SessionAccount},
};

/// Resolves the signed-in account's profile from session and database
///
/// # Arguments
/// - `state`: Application state with the database connection
/// - `session`: The request's session
///
/// # Returns
/// - `Ok(ProfileModel)`: Profile for the session's account
/// - `Err(Error::AuthError(AuthError::NotAuthenticated))`: No account present in session
/// - `Err(Error::AuthError(AuthError::ProfileNotInDatabase))`: Account has a session but no
///   profile row (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_profile_from_session(
    state: &AppState,
    session: &Session,
) -> Result<ProfileModel, Error> {
    // Get account from session
    let Some(account) = SessionAccount::get(session).await? else {
        return Err(Error::AuthError(AuthError::NotAuthenticated));
    };

    // Get profile from database
    let Some(profile) = ProfileRepository::new(&state.db).get(&account.id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for account {} with active session but no profile in database",
            account.id
        );

        return Err(Error::AuthError(AuthError::ProfileNotInDatabase(
            account.id,
        )));
    };

    Ok(profile)
}
