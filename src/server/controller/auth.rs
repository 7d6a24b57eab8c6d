use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthDataDto, LoginDto, RegisterDto},
        user::UserDto,
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Logs a user in with uid & password
///
/// Stores the user's ID in the session and returns their authentication data.
///
/// # Responses
/// - 200 (OK): Credentials valid, user is logged in
/// - 401 (Unauthorized): Unknown uid or wrong password
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthDataDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Login of user {}", credentials.uid);

    let user = AuthService::new(&state.db)
        .login(&credentials.uid, &credentials.password)
        .await?;

    let auth_data = start_session(&session, user).await?;

    Ok((StatusCode::OK, Json(auth_data)))
}

/// Registers a new user and logs them in
///
/// # Responses
/// - 200 (OK): User registered & logged in
/// - 400 (Bad Request): Empty uid or password
/// - 409 (Conflict): uid is already taken
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Registered & logged in", body = AuthDataDto),
        (status = 400, description = "Empty uid or password", body = ErrorDto),
        (status = 409, description = "Username already exist!", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(registration): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Registration of user {}", registration.uid);

    let user = AuthService::new(&state.db).register(registration).await?;

    let auth_data = start_session(&session, user).await?;

    Ok((StatusCode::OK, Json(auth_data)))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 200 (OK): Session cleared
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): Session error
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = String),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session without data fails in the store, only clear sessions with a user
    if SessionUserId::get(&session).await?.is_none() {
        return Err(AuthError::UserNotInSession.into());
    }

    session.clear().await;

    Ok((StatusCode::OK, Json("Logged out")))
}

/// Returns the authentication data of the logged in user
///
/// # Responses
/// - 200 (OK): User is logged in
/// - 401 (Unauthorized): No user in session
/// - 404 (Not Found): User in session no longer exists, session is cleared
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authentication data of the logged in user", body = AuthDataDto),
        (status = 401, description = "No active session found.", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auth_data(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let auth_data = auth_data(&session, user);

    Ok((StatusCode::OK, Json(auth_data)))
}

/// Stores the user in the session and persists it so the session ID can be returned
async fn start_session(session: &Session, user: UserDto) -> Result<AuthDataDto, Error> {
    SessionUserId::insert(session, user.id).await?;
    session.save().await?;

    Ok(auth_data(session, user))
}

fn auth_data(session: &Session, user: UserDto) -> AuthDataDto {
    AuthDataDto {
        id: user.id,
        person_id: user.person_id,
        user_id: user.uid,
        groups: user.groups,
        session: session.id().map(|id| id.to_string()),
    }
}
