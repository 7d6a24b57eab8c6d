use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Failed to login user {0:?} due to unknown username or wrong password")]
    InvalidCredentials(String),
    #[error("User ID {user_id:?} is not a member of required group {group:?}")]
    MissingGroup { user_id: i32, group: String },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => {
                error_response(StatusCode::UNAUTHORIZED, "No active session found.")
            }
            Self::UserNotInDatabase(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::InvalidCredentials(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid username or password")
            }
            Self::MissingGroup { .. } => {
                error_response(StatusCode::FORBIDDEN, "Insufficient permissions")
            }
        }
    }
}
