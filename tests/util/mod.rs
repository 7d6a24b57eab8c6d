use axum::response::Response;
use serde::de::DeserializeOwned;
use timebook::server::model::session::user::{SessionUserId, SESSION_USER_ID_KEY};
use timebook_test_utils::prelude::*;
use tower_sessions::Session;

/// Put a user ID into the session like a successful login does
pub async fn log_in(session: &Session, user_id: i32) -> Result<(), TestError> {
    session
        .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
        .await?;

    Ok(())
}

/// Read the body of a response as JSON
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
