use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use timebook::{
    model::booking::{
        BookingDto, BookingInputDto, BookingPageDto, DeletedBookingDto, UpdateBookingDto,
    },
    server::{
        controller::booking::{
            create_booking, delete_booking, get_bookings, get_user_bookings, update_booking,
            BookingPageParams,
        },
        model::app::AppState,
    },
};
use timebook_test_utils::prelude::*;

use crate::util::{json_body, log_in};

fn work_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn booking_input(project_id: i32, started: u32, finished: u32, pause: i32) -> BookingInputDto {
    BookingInputDto {
        project_id,
        work_day: work_day(),
        work_started: work_day().and_hms_opt(started, 0, 0).unwrap(),
        work_finished: work_day().and_hms_opt(finished, 0, 0).unwrap(),
        pause,
    }
}

#[tokio::test]
/// Expect 200 with the created booking owned by the logged in user
async fn create_booking_returns_created_booking() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_project("Website")
        .build()
        .await?;
    let (user, person) = test
        .user()
        .insert_user_with_person("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe")
        .await?;
    log_in(&test.session, user.id).await?;
    let state: AppState = test.to_app_state();

    let result = create_booking(
        State(state),
        test.session.clone(),
        Json(booking_input(1, 9, 17, 60)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let booking: BookingDto = json_body(resp).await;
    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.person_id, person.id);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the booking finishes before it starts
async fn create_booking_returns_bad_request_for_reversed_interval() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_project("Website")
        .build()
        .await?;
    let (user, _) = test
        .user()
        .insert_user_with_person("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe")
        .await?;
    log_in(&test.session, user.id).await?;
    let state: AppState = test.to_app_state();

    let result = create_booking(
        State(state),
        test.session.clone(),
        Json(booking_input(1, 17, 9, 0)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 401 when creating a booking without a session
async fn create_booking_returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_project("Website")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let result = create_booking(
        State(state),
        test.session.clone(),
        Json(booking_input(1, 9, 17, 0)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect only the bookings of the logged in user
async fn get_user_bookings_returns_own_bookings() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let (jdoe, _) = test
        .user()
        .insert_user_with_person("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe")
        .await?;
    let (max, _) = test
        .user()
        .insert_user_with_person("mmuster", TEST_PASSWORD_HASH, "Max", "Muster")
        .await?;
    let project = test.project().insert_project("Website").await?;
    let own = test
        .booking()
        .insert_booking(&jdoe, project.id, work_day(), (9, 0), (12, 0), 0)
        .await?;
    test.booking()
        .insert_booking(&max, project.id, work_day(), (9, 0), (12, 0), 0)
        .await?;
    log_in(&test.session, jdoe.id).await?;
    let state: AppState = test.to_app_state();

    let result = get_user_bookings(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let bookings: Vec<BookingDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, own.id);

    Ok(())
}

#[tokio::test]
/// Expect a page with default offset & limit for an administrator
async fn get_bookings_returns_page_for_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let (admin, _) = test.user().insert_admin("admin", TEST_PASSWORD_HASH).await?;
    let project = test.project().insert_project("Website").await?;
    test.booking()
        .insert_booking(&admin, project.id, work_day(), (9, 0), (12, 0), 0)
        .await?;
    log_in(&test.session, admin.id).await?;
    let state: AppState = test.to_app_state();

    let result = get_bookings(
        State(state),
        test.session.clone(),
        Query(BookingPageParams {
            offset: None,
            limit: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let page: BookingPageDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(page.offset, 0);
    assert_eq!(page.limit, 1000);
    assert_eq!(page.total, 1);
    assert_eq!(page.data.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect 403 when an employee lists the bookings of all users
async fn get_bookings_returns_forbidden_for_employee() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_user("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe", Some("employee"))
        .build()
        .await?;
    log_in(&test.session, 1).await?;
    let state: AppState = test.to_app_state();

    let result = get_bookings(
        State(state),
        test.session.clone(),
        Query(BookingPageParams {
            offset: None,
            limit: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 200 when the owner updates their booking
async fn update_booking_updates_own_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let (user, _) = test
        .user()
        .insert_user_with_person("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe")
        .await?;
    let project = test.project().insert_project("Website").await?;
    let booking = test
        .booking()
        .insert_booking(&user, project.id, work_day(), (9, 0), (12, 0), 0)
        .await?;
    log_in(&test.session, user.id).await?;
    let state: AppState = test.to_app_state();

    let result = update_booking(
        State(state),
        test.session.clone(),
        Path(booking.id),
        Json(UpdateBookingDto {
            user_id: user.id,
            booking: booking_input(project.id, 8, 16, 45),
        }),
    )
    .await;

    assert!(result.is_ok());
    let updated: BookingDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(updated.pause, 45);

    Ok(())
}

#[tokio::test]
/// Expect 403 when updating the booking of another user
async fn update_booking_returns_forbidden_for_other_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let (owner, _) = test
        .user()
        .insert_user_with_person("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe")
        .await?;
    let (other, _) = test
        .user()
        .insert_user_with_person("mmuster", TEST_PASSWORD_HASH, "Max", "Muster")
        .await?;
    let project = test.project().insert_project("Website").await?;
    let booking = test
        .booking()
        .insert_booking(&owner, project.id, work_day(), (9, 0), (12, 0), 0)
        .await?;
    let other_session = test.new_session();
    log_in(&test.session, owner.id).await?;
    log_in(&other_session, other.id).await?;
    let state: AppState = test.to_app_state();

    let result = update_booking(
        State(state.clone()),
        other_session,
        Path(booking.id),
        Json(UpdateBookingDto {
            user_id: other.id,
            booking: booking_input(project.id, 8, 16, 45),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let bookings = get_user_bookings(State(state), test.session.clone()).await;

    assert!(bookings.is_ok());
    let bookings: Vec<BookingDto> = json_body(bookings.unwrap().into_response()).await;
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].pause, 0);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the deleted booking ID when the owner deletes their booking
async fn delete_booking_deletes_own_booking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let (user, _) = test
        .user()
        .insert_user_with_person("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe")
        .await?;
    let project = test.project().insert_project("Website").await?;
    let booking = test
        .booking()
        .insert_booking(&user, project.id, work_day(), (9, 0), (12, 0), 0)
        .await?;
    log_in(&test.session, user.id).await?;
    let state: AppState = test.to_app_state();

    let result = delete_booking(State(state), test.session.clone(), Path(booking.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: DeletedBookingDto = json_body(resp).await;
    assert_eq!(body.deleted, booking.id);

    Ok(())
}

#[tokio::test]
/// Expect 404 when deleting the booking of another user
async fn delete_booking_returns_not_found_for_other_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let (owner, _) = test
        .user()
        .insert_user_with_person("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe")
        .await?;
    let (other, _) = test
        .user()
        .insert_user_with_person("mmuster", TEST_PASSWORD_HASH, "Max", "Muster")
        .await?;
    let project = test.project().insert_project("Website").await?;
    let booking = test
        .booking()
        .insert_booking(&owner, project.id, work_day(), (9, 0), (12, 0), 0)
        .await?;
    log_in(&test.session, other.id).await?;
    let state: AppState = test.to_app_state();

    let result = delete_booking(State(state), test.session.clone(), Path(booking.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
