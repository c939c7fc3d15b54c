//! Main Leptos application component and routing.

use crate::auth_state::provide_auth_context;
use crate::branding::TOOL_TITLE;
use crate::pages::{LandingPage, WorkspacePage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth_context();

    view! {
        <Title text=TOOL_TITLE/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=LandingPage/>
                <Route path=path!("/app") view=WorkspacePage/>
            </Routes>
        </Router>
    }
}
