//! Server functions for the signed-in user.

use crate::types::UserInfo;
use leptos::prelude::*;

/// Returns the signed-in user, or `None` when there is no live session.
#[server]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::error::SessionError;
    use crate::server_helpers::get_authenticated_user;

    match get_authenticated_user().await {
        Ok(auth) => Ok(Some(UserInfo {
            label: auth.display_label(),
            email: auth.user().email().map(str::to_string),
        })),
        Err(
            SessionError::NotAuthenticated
            | SessionError::NotFound { .. }
            | SessionError::Expired { .. }
            | SessionError::UserNotFound { .. },
        ) => Ok(None),
        Err(e) => Err(e.into_server_error()),
    }
}
