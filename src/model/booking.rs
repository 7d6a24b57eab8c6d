use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub user_id: i32,
    pub person_id: i32,
    pub project_id: i32,
    pub work_day: NaiveDate,
    pub work_started: NaiveDateTime,
    pub work_finished: NaiveDateTime,
    /// Pause in minutes
    pub pause: i32,
}

/// Booking fields sent by the client when creating a booking
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingInputDto {
    pub project_id: i32,
    pub work_day: NaiveDate,
    pub work_started: NaiveDateTime,
    pub work_finished: NaiveDateTime,
    /// Pause in minutes
    pub pause: i32,
}

/// Booking fields sent by the client when updating a booking
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingDto {
    /// ID of the user owning the booking, must be the logged in user
    pub user_id: i32,
    #[serde(flatten)]
    pub booking: BookingInputDto,
}

/// A page of bookings across all users
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookingPageDto {
    pub data: Vec<BookingDto>,
    pub offset: u64,
    pub limit: u64,
    /// Number of bookings stored in total
    pub total: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeletedBookingDto {
    /// ID of the deleted booking
    pub deleted: i32,
}
