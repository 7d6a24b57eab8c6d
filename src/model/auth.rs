use serde::{Deserialize, Serialize};

/// Credentials posted to the login endpoint
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub uid: String,
    pub password: String,
}

/// Registration form creating a user and its person profile
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterDto {
    pub uid: String,
    pub password: String,
    pub forename: String,
    pub surname: String,
}

/// Information about the authenticated user sent after login
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthDataDto {
    /// Database ID of the user
    pub id: i32,
    pub person_id: i32,
    /// Login name of the user
    pub user_id: String,
    pub groups: Vec<String>,
    /// Session ID, absent until the session has been persisted
    pub session: Option<String>,
}
