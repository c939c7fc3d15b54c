//! Main app page for signed-in users.

use crate::auth_state::{LOGOUT_ROUTE, use_auth};
use crate::branding::TOOL_TITLE;
use crate::components::{HeaderBar, LoadingScreen, SiteFooter};
use crate::pages::landing::state::{AuthStatus, LandingView};
use crate::types::UserInfo;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Route the workspace sends signed-out visitors back to.
const LANDING_ROUTE: &str = "/";

/// Whether a settled auth status means the visitor must leave the workspace.
fn must_leave(status: AuthStatus) -> bool {
    LandingView::for_status(status) == LandingView::SignIn
}

/// The main app page, mounted at `/app`.
#[component]
pub fn WorkspacePage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move || {
        if must_leave(auth.status()) {
            navigate(
                LANDING_ROUTE,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Suspense fallback=|| view! { <LoadingScreen/> }>
            {move || match auth.user() {
                Some(user) => view! { <Workspace user=user/> }.into_any(),
                None => view! { <LoadingScreen/> }.into_any(),
            }}
        </Suspense>
    }
}

fn greeting(user: &UserInfo) -> String {
    format!("Signed in as {}.", user.label)
}

#[component]
fn Workspace(user: UserInfo) -> impl IntoView {
    let email = user.email.clone();
    let label = user.label.clone();
    let greeting = greeting(&user);

    view! {
        <div class="page">
            <HeaderBar>
                <span class="user-name" title=email>{label}</span>
                <a href=LOGOUT_ROUTE rel="external" class="logout-link">"Log out"</a>
            </HeaderBar>
            <main class="page-content">
                <h2 class="page-title">{TOOL_TITLE}</h2>
                <p class="workspace-greeting">{greeting}</p>
            </main>
            <SiteFooter/>
        </div>
    }
}
