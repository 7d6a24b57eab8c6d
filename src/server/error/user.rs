use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Username {0:?} already exists")]
    UsernameTaken(String),
    #[error("Username must not be empty")]
    EmptyUsername,
    #[error("User with uid {0:?} not found")]
    UserNotFound(String),
    #[error("User data with uid {body:?} does not match requested uid {path:?}")]
    UidMismatch { path: String, body: String },
    #[error("Password must not be empty")]
    EmptyPassword,
    #[error("Old password of user {0:?} is incorrect")]
    WrongPassword(String),
    #[error("User ID {user_id:?} attempted to change the password of {uid:?}")]
    PasswordChangeForbidden { user_id: i32, uid: String },
    #[error("Group ID {0:?} not found")]
    GroupNotFound(i32),
    #[error("Group {0:?} is missing from the database, were migrations applied?")]
    DefaultGroupMissing(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::UsernameTaken(_) => (StatusCode::CONFLICT, "Username already exist!"),
            Self::EmptyUsername => (StatusCode::BAD_REQUEST, "Username must not be empty"),
            Self::UserNotFound(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::UidMismatch { .. } => (
                StatusCode::BAD_REQUEST,
                "Cannot update user. User data does not match the given uid.",
            ),
            Self::EmptyPassword => (StatusCode::BAD_REQUEST, "Password must not be empty"),
            Self::WrongPassword(_) => (StatusCode::BAD_REQUEST, "Old password is incorrect"),
            Self::PasswordChangeForbidden { .. } => (
                StatusCode::FORBIDDEN,
                "Changing a password is allowed only for its owner.",
            ),
            Self::GroupNotFound(_) => (StatusCode::NOT_FOUND, "Group not found"),
            Self::DefaultGroupMissing(_) => {
                return InternalServerError(self).into_response();
            }
        };

        tracing::debug!("{}", self);

        error_response(status, message)
    }
}
