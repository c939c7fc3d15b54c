//! Landing page state machine.
//!
//! `Loading` settles into either `Authenticated` (navigate to the main route)
//! or `SignIn` (show the page). From `SignIn` a click moves the page into the
//! redirecting state, which it never leaves.

/// Route the landing page sends signed-in users to.
pub const MAIN_ROUTE: &str = "/app";

/// Upstream authentication status as reported by the auth provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthStatus {
    pub is_loading: bool,
    pub is_authenticated: bool,
}

impl AuthStatus {
    /// Session lookup still in flight.
    pub const LOADING: Self = Self {
        is_loading: true,
        is_authenticated: false,
    };

    /// Session lookup finished.
    pub const fn settled(is_authenticated: bool) -> Self {
        Self {
            is_loading: false,
            is_authenticated,
        }
    }
}

/// What the landing page renders for a given auth status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingView {
    /// Centered spinner and nothing else.
    Loading,
    /// Signed in; a replace-navigation to the main route is pending.
    Authenticated,
    /// Full page with the sign-in button.
    SignIn,
}

impl LandingView {
    /// `is_loading` wins over `is_authenticated`.
    pub fn for_status(status: AuthStatus) -> Self {
        if status.is_loading {
            Self::Loading
        } else if status.is_authenticated {
            Self::Authenticated
        } else {
            Self::SignIn
        }
    }

    /// Whether the sign-in button and the rest of the page are shown.
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::SignIn)
    }
}

/// One-shot latch for the navigation to the main route.
///
/// Auth status can be observed many times while the page is mounted; only the
/// first authenticated observation asks for a navigation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MainRouteRedirect {
    issued: bool,
}

impl MainRouteRedirect {
    /// Returns true exactly once, on the first settled authenticated status.
    pub fn observe(&mut self, status: AuthStatus) -> bool {
        if self.issued || LandingView::for_status(status) != LandingView::Authenticated {
            return false;
        }
        self.issued = true;
        true
    }

    #[cfg(test)]
    fn is_issued(&self) -> bool {
        self.issued
    }
}

/// Per-instance view state of the landing page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    is_redirecting: bool,
}

impl ViewState {
    pub fn is_redirecting(&self) -> bool {
        self.is_redirecting
    }

    /// The sign-in button is disabled while a redirect is in progress.
    pub fn button_disabled(&self) -> bool {
        self.is_redirecting
    }

    /// Marks the redirect as started. Returns false if it already was.
    pub fn begin_redirect(&mut self) -> bool {
        if self.is_redirecting {
            return false;
        }
        self.is_redirecting = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_regardless_of_authentication() {
        for is_authenticated in [false, true] {
            let status = AuthStatus {
                is_loading: true,
                is_authenticated,
            };
            assert_eq!(LandingView::for_status(status), LandingView::Loading);
            assert!(!LandingView::for_status(status).is_interactive());
        }
    }

    #[test]
    fn settled_status_picks_view() {
        assert_eq!(
            LandingView::for_status(AuthStatus::settled(true)),
            LandingView::Authenticated
        );
        assert_eq!(
            LandingView::for_status(AuthStatus::settled(false)),
            LandingView::SignIn
        );
    }

    #[test]
    fn only_sign_in_view_is_interactive() {
        assert!(LandingView::SignIn.is_interactive());
        assert!(!LandingView::Authenticated.is_interactive());
        assert!(!LandingView::Loading.is_interactive());
    }

    #[test]
    fn main_route_redirect_fires_once_for_repeated_authenticated_status() {
        let mut redirect = MainRouteRedirect::default();

        assert!(!redirect.observe(AuthStatus::LOADING));
        assert!(redirect.observe(AuthStatus::settled(true)));
        assert!(!redirect.observe(AuthStatus::settled(true)));
        assert!(!redirect.observe(AuthStatus::settled(true)));
        assert!(redirect.is_issued());
    }

    #[test]
    fn main_route_redirect_ignores_signed_out_and_loading() {
        let mut redirect = MainRouteRedirect::default();

        assert!(!redirect.observe(AuthStatus::LOADING));
        assert!(!redirect.observe(AuthStatus::settled(false)));
        assert!(!redirect.observe(AuthStatus {
            is_loading: true,
            is_authenticated: true,
        }));
        assert!(!redirect.is_issued());
    }

    #[test]
    fn view_state_starts_enabled() {
        let state = ViewState::default();
        assert!(!state.is_redirecting());
        assert!(!state.button_disabled());
    }

    #[test]
    fn begin_redirect_disables_button_and_is_not_repeatable() {
        let mut state = ViewState::default();

        assert!(state.begin_redirect());
        assert!(state.is_redirecting());
        assert!(state.button_disabled());

        assert!(!state.begin_redirect());
        assert!(state.button_disabled());
    }
}
