use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Account is not present in session")]
    NotAuthenticated,
    #[error("Account {0:?} has no profile in database despite having an active session")]
    ProfileNotInDatabase(String),
}

impl AuthError {
    fn not_signed_in() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Not signed in".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated => {
                tracing::debug!("{}", Self::NotAuthenticated);

                Self::not_signed_in()
            }
            Self::ProfileNotInDatabase(ref account_id) => {
                tracing::debug!(
                    account_id = %account_id,
                    "{}",
                    self
                );

                Self::not_signed_in()
            }
        }
    }
}
