use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, statistic::BookingStatisticsDto},
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::statistic::StatisticService,
    },
};

pub static STATISTIC_TAG: &str = "statistic";

/// Calculates hours booked per day, project & employee
///
/// Statistics are calculated on every request over the first 1000 bookings.
///
/// # Responses
/// - 200 (OK): Statistics
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): Fetching the bookings, persons or projects failed or a
///   booking references an unknown person or project
#[utoipa::path(
    get,
    path = "/api/statistics/bookings",
    tag = STATISTIC_TAG,
    responses(
        (status = 200, description = "Booking statistics", body = BookingStatisticsDto),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 500, description = "Cannot calculate statistics", body = ErrorDto)
    ),
)]
pub async fn get_booking_statistics(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    tracing::info!("User {} requests booking statistics", user.uid);

    let statistics = StatisticService::new(&state.db)
        .calculate_booking_statistics()
        .await?;

    Ok((StatusCode::OK, Json(statistics)))
}
