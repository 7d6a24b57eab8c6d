use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use timebook::{
    model::project::{CreateProjectDto, ProjectDto},
    server::{
        controller::project::{create_project, get_projects},
        model::app::AppState,
    },
};
use timebook_test_utils::prelude::*;

use crate::util::{json_body, log_in};

#[tokio::test]
/// Expect all projects for a logged in user
async fn get_projects_returns_projects() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_project("Website")
        .with_mock_project("Backend")
        .with_mock_user("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe", Some("employee"))
        .build()
        .await?;
    log_in(&test.session, 1).await?;
    let state: AppState = test.to_app_state();

    let result = get_projects(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let projects: Vec<ProjectDto> = json_body(result.unwrap().into_response()).await;
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Website", "Backend"]);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the created project for an administrator
async fn create_project_returns_project_for_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let (admin, _) = test.user().insert_admin("admin", TEST_PASSWORD_HASH).await?;
    log_in(&test.session, admin.id).await?;
    let state: AppState = test.to_app_state();

    let result = create_project(
        State(state),
        test.session.clone(),
        Json(CreateProjectDto {
            name: "Website".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let project: ProjectDto = json_body(resp).await;
    assert_eq!(project.name, "Website");

    Ok(())
}

#[tokio::test]
/// Expect 400 for a blank project name
async fn create_project_returns_bad_request_for_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let (admin, _) = test.user().insert_admin("admin", TEST_PASSWORD_HASH).await?;
    log_in(&test.session, admin.id).await?;
    let state: AppState = test.to_app_state();

    let result = create_project(
        State(state),
        test.session.clone(),
        Json(CreateProjectDto {
            name: "".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 403 when an employee creates a project
async fn create_project_returns_forbidden_for_employee() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_user("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe", Some("employee"))
        .build()
        .await?;
    log_in(&test.session, 1).await?;
    let state: AppState = test.to_app_state();

    let result = create_project(
        State(state),
        test.session.clone(),
        Json(CreateProjectDto {
            name: "Website".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
