//! Error types for the Timebook server application.
//!
//! Each domain (authentication, configuration, users, bookings, projects, statistics) has
//! its own error enum deciding which HTTP response it turns into. [`Error`] aggregates them
//! with the errors of external libraries so handlers can use `?` throughout.

pub mod auth;
pub mod booking;
pub mod config;
pub mod project;
pub mod statistic;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, booking::BookingError, config::ConfigError, project::ProjectError,
        statistic::StatisticError, user::UserError,
    },
};

/// Main error type for the Timebook server application.
///
/// Uses `thiserror`'s `#[from]` attribute so domain and library errors convert via `?`.
/// The `IntoResponse` implementation maps errors to HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, credentials, permissions).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// User administration error (unknown users, taken names, password changes).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Booking error (validation, ownership, unknown bookings).
    #[error(transparent)]
    BookingError(#[from] BookingError),
    /// Project error (validation).
    #[error(transparent)]
    ProjectError(#[from] ProjectError),
    /// Statistics could not be calculated.
    #[error(transparent)]
    StatisticError(#[from] StatisticError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug or an inconsistent database.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors choose their own status codes, everything else is an internal server
/// error which is logged and answered with a generic message.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::BookingError(err) => err.into_response(),
            Self::ProjectError(err) => err.into_response(),
            Self::StatisticError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Build a JSON [`ErrorDto`] response with the provided status and message.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}
