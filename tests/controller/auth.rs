use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use timebook::{
    model::auth::{AuthDataDto, LoginDto, RegisterDto},
    server::{
        controller::auth::{get_auth_data, login, logout, register},
        model::{app::AppState, session::user::SessionUserId},
    },
};
use timebook_test_utils::prelude::*;

use crate::util::{json_body, log_in};

fn credentials(uid: &str, password: &str) -> LoginDto {
    LoginDto {
        uid: uid.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
/// Expect 200 with auth data & user ID stored in session for valid credentials
async fn login_returns_auth_data_for_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_user("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe", Some("employee"))
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let result = login(
        State(state),
        test.session.clone(),
        Json(credentials("jdoe", TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let auth_data: AuthDataDto = json_body(resp).await;
    assert_eq!(auth_data.user_id, "jdoe");
    assert_eq!(auth_data.groups, vec!["employee"]);
    assert!(auth_data.session.is_some());

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user_id, Some(auth_data.id));

    Ok(())
}

#[tokio::test]
/// Expect 401 and no user in session for a wrong password
async fn login_returns_unauthorized_for_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_user("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe", None)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let result = login(
        State(state),
        test.session.clone(),
        Json(credentials("jdoe", "wrong")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 200 with the employee group after registering a new user
async fn register_returns_auth_data_for_new_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let state: AppState = test.to_app_state();

    let result = register(
        State(state),
        test.session.clone(),
        Json(RegisterDto {
            uid: "jdoe".to_string(),
            password: TEST_PASSWORD.to_string(),
            forename: "Jane".to_string(),
            surname: "Doe".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let auth_data: AuthDataDto = json_body(resp).await;
    assert_eq!(auth_data.user_id, "jdoe");
    assert_eq!(auth_data.groups, vec!["employee"]);

    Ok(())
}

#[tokio::test]
/// Expect 409 when registering a uid that is already taken
async fn register_returns_conflict_for_taken_uid() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_user("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe", None)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let result = register(
        State(state),
        test.session.clone(),
        Json(RegisterDto {
            uid: "jdoe".to_string(),
            password: TEST_PASSWORD.to_string(),
            forename: "John".to_string(),
            surname: "Doe".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 200 and a cleared session after logout with a user ID in session
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    log_in(&test.session, 1).await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 401 when logging out without a user in session
async fn logout_returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the auth data of the logged in user
async fn get_auth_data_returns_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let (user, person) = test.user().insert_admin("admin", TEST_PASSWORD_HASH).await?;
    log_in(&test.session, user.id).await?;
    let state: AppState = test.to_app_state();

    let result = get_auth_data(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let auth_data: AuthDataDto = json_body(resp).await;
    assert_eq!(auth_data.id, user.id);
    assert_eq!(auth_data.person_id, person.id);
    assert_eq!(auth_data.groups, vec!["admin"]);

    Ok(())
}

#[tokio::test]
/// Expect 404 and a cleared session when the user in session no longer exists
async fn get_auth_data_returns_not_found_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let nonexistent_user_id = 1;
    log_in(&test.session, nonexistent_user_id).await?;
    let state: AppState = test.to_app_state();

    let result = get_auth_data(State(state), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 401 without a user in session
async fn get_auth_data_returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let state: AppState = test.to_app_state();

    let result = get_auth_data(State(state), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
