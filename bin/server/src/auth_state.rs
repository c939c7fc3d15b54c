//! Client-side view of the user's authentication status.
//!
//! `provide_auth_context` is called once by the root component; pages read the
//! status through `use_auth`.

use crate::pages::landing::state::AuthStatus;
use crate::types::UserInfo;
use crate::user::get_current_user;
use leptos::prelude::*;

/// Path of the server route that starts the OIDC authorization-code flow.
pub const LOGIN_ROUTE: &str = "/auth/login";

/// Path of the server route that ends the session.
pub const LOGOUT_ROUTE: &str = "/auth/logout";

type CurrentUser = Result<Option<UserInfo>, ServerFnError>;

/// Auth status shared through the Leptos context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    user: Resource<CurrentUser>,
}

impl AuthContext {
    /// Current status; tracked, so effects re-run when the lookup settles.
    pub fn status(&self) -> AuthStatus {
        status_of(self.user.get().as_ref())
    }

    /// The signed-in user, if the lookup has settled on one.
    pub fn user(&self) -> Option<UserInfo> {
        self.user.get().and_then(Result::ok).flatten()
    }

    /// Leaves the app for the identity provider via the server login route.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn signin_redirect(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                leptos::logging::error!("sign-in redirect: no window");
                return;
            };
            if let Err(e) = window.location().set_href(LOGIN_ROUTE) {
                leptos::logging::error!("sign-in redirect failed: {e:?}");
            }
        }
    }
}

/// Maps the session lookup onto an auth status.
///
/// A failed lookup counts as signed out so the sign-in button stays reachable.
pub fn status_of<E>(lookup: Option<&Result<Option<UserInfo>, E>>) -> AuthStatus {
    match lookup {
        None => AuthStatus::LOADING,
        Some(Ok(Some(_))) => AuthStatus::settled(true),
        Some(Ok(None) | Err(_)) => AuthStatus::settled(false),
    }
}

/// Starts the session lookup and provides the `AuthContext`.
pub fn provide_auth_context() -> AuthContext {
    let user = Resource::new(|| (), |_| get_current_user());
    let context = AuthContext { user };
    provide_context(context);
    context
}

/// Returns the `AuthContext` provided by the root component.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
