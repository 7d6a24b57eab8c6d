use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use timebook::{
    model::{api::ErrorDto, statistic::BookingStatisticsDto},
    server::{controller::statistic::get_booking_statistics, model::app::AppState},
};
use timebook_test_utils::prelude::*;

use crate::util::{json_body, log_in};

#[tokio::test]
/// Expect 200 with hours grouped by day, project & employee
async fn returns_statistics_for_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let (user, _) = test
        .user()
        .insert_user_with_person("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe")
        .await?;
    let project = test.project().insert_project("Alpha").await?;
    let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    test.booking()
        .insert_booking(&user, project.id, day, (9, 0), (17, 0), 60)
        .await?;
    log_in(&test.session, user.id).await?;
    let state: AppState = test.to_app_state();

    let result = get_booking_statistics(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let statistics: BookingStatisticsDto = json_body(resp).await;
    assert_eq!(statistics.total_entries, 1);
    assert_eq!(statistics.hours_day.labels, vec!["1/1/2020"]);
    assert_eq!(statistics.hours_day.data, vec![vec![7]]);
    assert_eq!(statistics.hours_project.labels, vec!["Alpha"]);
    assert_eq!(statistics.hours_project.data, vec![7]);
    assert_eq!(statistics.hours_employee.labels, vec!["Jane Doe"]);
    assert_eq!(statistics.hours_employee.data, vec![7]);

    Ok(())
}

#[tokio::test]
/// Expect the wire format to use camelCase keys & nested day data
async fn serializes_statistics_in_camel_case() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let (user, _) = test
        .user()
        .insert_user_with_person("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe")
        .await?;
    log_in(&test.session, user.id).await?;
    let state: AppState = test.to_app_state();

    let result = get_booking_statistics(State(state), test.session.clone()).await;

    let body: serde_json::Value = json_body(result.unwrap().into_response()).await;
    assert!(body["timestamp"].is_i64());
    assert_eq!(body["totalEntries"], 0);
    assert_eq!(body["hoursDay"]["data"], serde_json::json!([[]]));
    assert_eq!(body["hoursProject"]["data"], serde_json::json!([]));
    assert_eq!(body["hoursEmployee"]["labels"], serde_json::json!([]));

    Ok(())
}

#[tokio::test]
/// Expect 500 with the fixed message when the statistics can't be calculated
async fn returns_internal_error_when_fetch_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .with_table(entity::prelude::TimebookUser)
        .with_table(entity::prelude::TimebookGroup)
        .with_table(entity::prelude::TimebookUserGroup)
        .build()
        .await?;
    let (user, _) = test
        .user()
        .insert_user_with_person("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe")
        .await?;
    log_in(&test.session, user.id).await?;
    let state: AppState = test.to_app_state();

    let result = get_booking_statistics(State(state), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Cannot calculate statistics");

    Ok(())
}

#[tokio::test]
/// Expect 401 without a user in session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let state: AppState = test.to_app_state();

    let result = get_booking_statistics(State(state), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
