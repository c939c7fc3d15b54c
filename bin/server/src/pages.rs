//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route.

pub mod landing;
pub mod workspace;

pub use landing::LandingPage;
pub use workspace::WorkspacePage;
