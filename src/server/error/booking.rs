use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Booking ID {0:?} not found")]
    BookingNotFound(i32),
    #[error("User ID {user_id:?} is not the owner of booking ID {booking_id:?}")]
    NotOwner { user_id: i32, booking_id: i32 },
    #[error("Booking finishes before it started")]
    InvalidInterval,
    #[error("Pause of {0:?} minutes is negative or longer than the booked time")]
    InvalidPause(i32),
    #[error("Project ID {0:?} not found")]
    ProjectNotFound(i32),
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::BookingNotFound(_) => error_response(StatusCode::NOT_FOUND, "Booking not found"),
            Self::NotOwner { .. } => error_response(
                StatusCode::FORBIDDEN,
                "Updating of booking is allowed only for the owner of the booking.",
            ),
            Self::InvalidInterval => error_response(
                StatusCode::BAD_REQUEST,
                "Work must not finish before it started",
            ),
            Self::InvalidPause(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Pause must be between 0 and the booked duration",
            ),
            Self::ProjectNotFound(_) => error_response(StatusCode::BAD_REQUEST, "Unknown project"),
        }
    }
}
