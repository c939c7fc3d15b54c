//! Landing page: branding, announcements and the sign-in button.
//!
//! Signed-in visitors are forwarded to the main route; everyone else gets the
//! page and a button that hands off to the identity provider.

pub mod sign_in;
pub mod state;

use crate::auth_state::use_auth;
use crate::branding::{SIGN_IN_LABEL, TOOL_TITLE};
use crate::components::{
    AnnouncementsPanel, HeaderBar, LoadingScreen, LoginIcon, SiteFooter, Spinner,
};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use sign_in::{BrowserTimer, SignInFlow};
use state::{LandingView, MAIN_ROUTE, MainRouteRedirect, ViewState};

/// The landing page component, mounted at `/`.
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let redirect = StoredValue::new(MainRouteRedirect::default());

    Effect::new(move || {
        let status = auth.status();
        let mut should_navigate = false;
        redirect.update_value(|r| should_navigate = r.observe(status));
        if should_navigate {
            navigate(
                MAIN_ROUTE,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Suspense fallback=|| view! { <LoadingScreen/> }>
            {move || {
                if LandingView::for_status(auth.status()).is_interactive() {
                    view! { <SignInPage/> }.into_any()
                } else {
                    view! { <LoadingScreen/> }.into_any()
                }
            }}
        </Suspense>
    }
}

/// Full landing page shown to signed-out visitors.
#[component]
fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let view_state = RwSignal::new(ViewState::default());
    let flow = SignInFlow::new(BrowserTimer);

    let on_press = Callback::new(move |()| {
        view_state.update(|state| {
            flow.press(state, move || auth.signin_redirect());
        });
    });

    view! { <SignInLayout view_state=view_state on_press=on_press/> }
}

/// Landing page body: header, title, sign-in button, announcements, footer.
#[component]
fn SignInLayout(view_state: RwSignal<ViewState>, on_press: Callback<()>) -> impl IntoView {
    view! {
        <div class="page">
            <HeaderBar/>
            <main class="page-content">
                <h2 class="page-title">{TOOL_TITLE}</h2>
                <SignInButton view_state=view_state on_press=on_press/>
                <AnnouncementsPanel/>
            </main>
            <SiteFooter/>
        </div>
    }
}

/// The sign-in button; shows a spinner and stays disabled once pressed.
#[component]
fn SignInButton(view_state: RwSignal<ViewState>, on_press: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="sign-in-button"
            on:click=move |_| on_press.run(())
            disabled=move || view_state.get().button_disabled()
        >
            {move || {
                if view_state.get().is_redirecting() {
                    view! { <Spinner/> }.into_any()
                } else {
                    view! {
                        <LoginIcon/>
                        <span>{SIGN_IN_LABEL}</span>
                    }
                        .into_any()
                }
            }}
        </button>
    }
}
