use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eventboard_shared::Error as DomainError;
use thiserror::Error;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid event id")]
    InvalidEventId,

    #[error("you must be logged in")]
    Unauthenticated,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let status_code = match self {
            AppError::InvalidEventId => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated | AppError::Domain(DomainError::Unauthorized(_)) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            e @ (AppError::Domain(DomainError::Unknown(_)) | AppError::InternalError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );

                return (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response();
            }
        };

        (status_code, message).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
