use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum FamilyError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Operation requires family membership")]
    NotInFamily,
    #[error("Invite token does not match any invite")]
    InvalidToken,
    #[error("Invite token is past its expiry")]
    TokenExpired,
    #[error("Account lacks access to the requested resource")]
    Forbidden,
}

impl IntoResponse for FamilyError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(message) => {
                tracing::debug!("Validation failed: {}", message);

                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            Self::NotInFamily => {
                tracing::debug!("{}", Self::NotInFamily);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "You are not in a family group".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidToken => {
                tracing::debug!("{}", Self::InvalidToken);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Invite not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::TokenExpired => {
                tracing::debug!("{}", Self::TokenExpired);

                (
                    StatusCode::GONE,
                    Json(ErrorDto {
                        error: "This invite has expired".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Forbidden => {
                tracing::debug!("{}", Self::Forbidden);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have access to this".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
