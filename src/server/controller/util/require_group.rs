use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        controller::util::get_user::get_user_from_session,
        error::{auth::AuthError, Error},
        model::{app::AppState, group::ADMIN_GROUP},
    },
};

/// Retrieves the logged in user and requires them to be a member of `group`
///
/// # Returns
/// - `Ok(UserDto)`: User is logged in and member of the group
/// - `Err(Error::AuthError(AuthError::MissingGroup))`: User isn't a member of the group
/// - `Err(Error)`: Any error of [`get_user_from_session`]
pub async fn require_group(
    state: &AppState,
    session: &Session,
    group: &str,
) -> Result<UserDto, Error> {
    let user = get_user_from_session(state, session).await?;

    if !user.groups.iter().any(|name| name == group) {
        return Err(Error::AuthError(AuthError::MissingGroup {
            user_id: user.id,
            group: group.to_string(),
        }));
    }

    Ok(user)
}

/// Shorthand for [`require_group`] with the admin group
pub async fn require_admin(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    require_group(state, session, ADMIN_GROUP).await
}
