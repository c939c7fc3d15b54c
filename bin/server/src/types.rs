//! Shared types used across server functions and UI components.

/// Signed-in user as shown in the UI.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserInfo {
    /// Display name, falling back to email.
    pub label: String,
    pub email: Option<String>,
}
