use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Reasons booking statistics can't be calculated.
///
/// Every variant is answered with the same generic message, the details only end up in
/// the log.
#[derive(Error, Debug)]
pub enum StatisticError {
    /// Bookings, persons or projects could not be fetched.
    #[error("Failed to fetch statistics input: {0}")]
    UpstreamFetch(#[source] sea_orm::DbErr),
    #[error("Booking ID {booking_id:?} references unknown person ID {person_id:?}")]
    PersonNotFound { booking_id: i32, person_id: i32 },
    #[error("Booking ID {booking_id:?} references unknown project ID {project_id:?}")]
    ProjectNotFound { booking_id: i32, project_id: i32 },
}

impl IntoResponse for StatisticError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Cannot calculate statistics",
        )
    }
}
