use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{
            ChangePasswordDto, GroupDto, PasswordChangedDto, ResetPasswordDto, UpdateUserDto,
            UserDto, UserExistsDto, UserWithPersonDto,
        },
    },
    server::{
        controller::util::{get_user::get_user_from_session, require_group::require_admin},
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Checks whether a uid is already taken
///
/// # Responses
/// - 200 (OK): Whether a user with the uid exists
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/users/{uid}/exists",
    tag = USER_TAG,
    params(("uid" = String, Path, description = "Login name to check")),
    responses(
        (status = 200, description = "Whether a user with the uid exists", body = UserExistsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn user_exists(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user_exist = UserService::new(&state.db).user_exists(&uid).await?;

    Ok((StatusCode::OK, Json(UserExistsDto { user_exist })))
}

/// Lists all groups ordered by ID
///
/// # Responses
/// - 200 (OK): All groups
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All groups", body = Vec<GroupDto>),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let groups = UserService::new(&state.db).list_groups().await?;

    Ok((StatusCode::OK, Json(groups)))
}

/// Lists all users with their person profile
///
/// # Responses
/// - 200 (OK): All users
/// - 401 (Unauthorized): No user in session
/// - 403 (Forbidden): User isn't an administrator
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users with their person profile", body = Vec<UserWithPersonDto>),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    tracing::info!("User {} lists all users", admin.uid);

    let users = UserService::new(&state.db).list_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Updates the person profile of a user
///
/// # Responses
/// - 200 (OK): Updated user
/// - 400 (Bad Request): uid of the body differs from the path
/// - 401 (Unauthorized): No user in session
/// - 403 (Forbidden): User isn't an administrator
/// - 404 (Not Found): Unknown uid
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    put,
    path = "/api/users/{uid}",
    tag = USER_TAG,
    params(("uid" = String, Path, description = "Login name of the user to update")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserWithPersonDto),
        (status = 400, description = "uid mismatch", body = ErrorDto),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(uid): Path<String>,
    Json(update): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    tracing::info!("User {} updates user {}", admin.uid, uid);

    let user = UserService::new(&state.db).update_user(&uid, update).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Changes the password of the logged in user
///
/// # Responses
/// - 200 (OK): Password changed
/// - 400 (Bad Request): Old password is wrong or new password is empty
/// - 401 (Unauthorized): No user in session
/// - 403 (Forbidden): uid isn't the logged in user
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    put,
    path = "/api/users/{uid}/password",
    tag = USER_TAG,
    params(("uid" = String, Path, description = "Login name of the logged in user")),
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = PasswordChangedDto),
        (status = 400, description = "Wrong old password or empty new password", body = ErrorDto),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 403, description = "Password of another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Path(uid): Path<String>,
    Json(change): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    UserService::new(&state.db)
        .change_password(user.id, &uid, change)
        .await?;

    Ok((StatusCode::OK, Json(PasswordChangedDto { success: true })))
}

/// Replaces the password of a user with a generated one
///
/// The generated password is only returned by this response.
///
/// # Responses
/// - 200 (OK): Generated password
/// - 401 (Unauthorized): No user in session
/// - 403 (Forbidden): User isn't an administrator
/// - 404 (Not Found): Unknown uid
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    post,
    path = "/api/users/{uid}/password/reset",
    tag = USER_TAG,
    params(("uid" = String, Path, description = "Login name of the user")),
    responses(
        (status = 200, description = "Generated password", body = ResetPasswordDto),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    session: Session,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    tracing::info!("User {} resets password of user {}", admin.uid, uid);

    let resetted_password = UserService::new(&state.db).reset_password(&uid).await?;

    Ok((StatusCode::OK, Json(ResetPasswordDto { resetted_password })))
}

/// Makes a group the only group of a user
///
/// # Responses
/// - 200 (OK): User with their new group
/// - 401 (Unauthorized): No user in session
/// - 403 (Forbidden): User isn't an administrator
/// - 404 (Not Found): Unknown uid or group
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    put,
    path = "/api/users/{uid}/group/{group_id}",
    tag = USER_TAG,
    params(
        ("uid" = String, Path, description = "Login name of the user"),
        ("group_id" = i32, Path, description = "ID of the new group")
    ),
    responses(
        (status = 200, description = "User with their new group", body = UserDto),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "User or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_group(
    State(state): State<AppState>,
    session: Session,
    Path((uid, group_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    tracing::info!(
        "User {} moves user {} to group ID {}",
        admin.uid,
        uid,
        group_id
    );

    let user = UserService::new(&state.db).change_group(&uid, group_id).await?;

    Ok((StatusCode::OK, Json(user)))
}
