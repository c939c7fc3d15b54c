//! Page chrome shared by the landing page and the main app page.

use crate::branding::{
    ANNOUNCEMENTS_HEADING, INSTITUTION_NAME, SUPPORT_EMAIL, WELCOME_TEXT, copyright_notice,
    current_year, support_mailto,
};
use leptos::prelude::*;

/// Circular progress indicator.
#[component]
pub fn Spinner(#[prop(optional)] large: bool) -> impl IntoView {
    let class = if large { "spinner spinner-large" } else { "spinner" };
    view! { <span class=class role="progressbar" aria-label="Loading"></span> }
}

/// Full-height page holding only a centered spinner.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <Spinner large=true/>
        </div>
    }
}

/// Green header bar with the institution name and optional trailing content.
#[component]
pub fn HeaderBar(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <header class="header-bar">
            <h1 class="institution-name">{INSTITUTION_NAME}</h1>
            {children.map(|c| view! { <div class="header-actions">{c()}</div> })}
        </header>
    }
}

/// Footer with the copyright line for the current year.
#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>{move || copyright_notice(current_year())}</p>
        </footer>
    }
}

/// Static announcements box.
#[component]
pub fn AnnouncementsPanel() -> impl IntoView {
    view! {
        <section class="announcements">
            <div class="announcements-heading">
                <h3>{ANNOUNCEMENTS_HEADING}</h3>
            </div>
            <div class="announcements-body">
                <p>{WELCOME_TEXT}</p>
                <p>
                    "For questions or support, please contact "
                    <a href=support_mailto() title=SUPPORT_EMAIL>"support"</a>
                    "."
                </p>
            </div>
        </section>
    }
}

/// Door-and-arrow sign-in glyph.
#[component]
pub fn LoginIcon() -> impl IntoView {
    view! {
        <svg class="login-icon" viewBox="0 0 24 24" width="24" height="24" aria-hidden="true">
            <path
                fill="currentColor"
                d="M11 7 9.6 8.4l2.6 2.6H2v2h10.2l-2.6 2.6L11 17l5-5-5-5zm9 12h-8v2h8c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2h-8v2h8v14z"
            ></path>
        </svg>
    }
}
