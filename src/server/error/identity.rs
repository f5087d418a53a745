use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity provider rejected the credentials")]
    InvalidCredentials,
    #[error("Identity provider returned status {status}: {message}")]
    Provider { status: u16, message: String },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => {
                tracing::debug!("{}", Self::InvalidCredentials);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid email or password".to_string(),
                    }),
                )
                    .into_response()
            }
            // Provider 4xx responses carry messages meant for the end user,
            // such as "User already registered".
            Self::Provider { status, message } if (400..500).contains(&status) => {
                tracing::debug!(status = %status, "Identity provider rejection: {}", message);

                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
