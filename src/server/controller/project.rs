use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        project::{CreateProjectDto, ProjectDto},
    },
    server::{
        controller::util::{get_user::get_user_from_session, require_group::require_admin},
        error::Error,
        model::app::AppState,
        service::project::ProjectService,
    },
};

pub static PROJECT_TAG: &str = "project";

/// Lists all projects ordered by ID
///
/// # Responses
/// - 200 (OK): All projects
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectDto>),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let projects = ProjectService::new(&state.db).list_projects().await?;

    Ok((StatusCode::OK, Json(projects)))
}

/// Creates a project
///
/// # Responses
/// - 200 (OK): Created project
/// - 400 (Bad Request): Name is blank
/// - 401 (Unauthorized): No user in session
/// - 403 (Forbidden): User isn't an administrator
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 200, description = "Created project", body = ProjectDto),
        (status = 400, description = "Project name must not be empty", body = ErrorDto),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Json(project): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    tracing::info!("User {} creates project {}", admin.uid, project.name);

    let project = ProjectService::new(&state.db).create_project(project).await?;

    Ok((StatusCode::OK, Json(project)))
}
