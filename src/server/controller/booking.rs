use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        booking::{
            BookingDto, BookingInputDto, BookingPageDto, DeletedBookingDto, UpdateBookingDto,
        },
    },
    server::{
        controller::util::{get_user::get_user_from_session, require_group::require_admin},
        error::Error,
        model::app::AppState,
        service::booking::{BookingService, MAX_BOOKING_PAGE_LIMIT},
    },
};

pub static BOOKING_TAG: &str = "booking";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingPageParams {
    /// Number of bookings to skip, defaults to 0
    pub offset: Option<u64>,
    /// Maximum number of bookings to return, defaults to & is capped at 1000
    pub limit: Option<u64>,
}

/// Lists the bookings of the logged in user
///
/// # Responses
/// - 200 (OK): Bookings of the logged in user ordered by ID
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/api/bookings/user",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Bookings of the logged in user", body = Vec<BookingDto>),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let bookings = BookingService::new(&state.db)
        .get_user_bookings(user.id)
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}

/// Lists a page of the bookings of all users
///
/// # Responses
/// - 200 (OK): Page of bookings with the total number of bookings
/// - 401 (Unauthorized): No user in session
/// - 403 (Forbidden): User isn't an administrator
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(BookingPageParams),
    responses(
        (status = 200, description = "Page of bookings", body = BookingPageDto),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<BookingPageParams>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let page = BookingService::new(&state.db)
        .get_booking_page(
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(MAX_BOOKING_PAGE_LIMIT),
        )
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Creates a booking for the logged in user
///
/// # Responses
/// - 200 (OK): Created booking
/// - 400 (Bad Request): Finish before start, pause outside of the interval or unknown project
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = BookingInputDto,
    responses(
        (status = 200, description = "Created booking", body = BookingDto),
        (status = 400, description = "Invalid booking", body = ErrorDto),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(booking): Json<BookingInputDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let booking = BookingService::new(&state.db)
        .create_booking(user.id, booking)
        .await?;

    tracing::info!("User {} created booking ID {}", user.uid, booking.id);

    Ok((StatusCode::OK, Json(booking)))
}

/// Updates a booking of the logged in user
///
/// # Responses
/// - 200 (OK): Updated booking
/// - 400 (Bad Request): Finish before start, pause outside of the interval or unknown project
/// - 401 (Unauthorized): No user in session
/// - 403 (Forbidden): Booking or the user ID of the body belongs to another user
/// - 404 (Not Found): Unknown booking
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    put,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(("booking_id" = i32, Path, description = "ID of the booking")),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Updated booking", body = BookingDto),
        (status = 400, description = "Invalid booking", body = ErrorDto),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 403, description = "Updating of booking is allowed only for the owner of the booking.", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
    Json(update): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let booking = BookingService::new(&state.db)
        .update_booking(user.id, booking_id, update)
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// Deletes a booking of the logged in user
///
/// Bookings of other users are answered like unknown bookings.
///
/// # Responses
/// - 200 (OK): ID of the deleted booking
/// - 401 (Unauthorized): No user in session
/// - 404 (Not Found): Unknown booking or booking of another user
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    delete,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(("booking_id" = i32, Path, description = "ID of the booking")),
    responses(
        (status = 200, description = "Booking deleted", body = DeletedBookingDto),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    BookingService::new(&state.db)
        .delete_booking(user.id, booking_id)
        .await?;

    tracing::info!("User {} deleted booking ID {}", user.uid, booking_id);

    Ok((
        StatusCode::OK,
        Json(DeletedBookingDto {
            deleted: booking_id,
        }),
    ))
}
