//! Institution branding and the fixed copy shown on the portal pages.

use chrono::Datelike;

pub const INSTITUTION_NAME: &str = "William & Mary";

pub const TOOL_TITLE: &str = "PDF Accessibility Remediation Tool";

pub const SIGN_IN_LABEL: &str = "Login to Remediate PDF";

pub const ANNOUNCEMENTS_HEADING: &str = "Announcements & Information";

pub const WELCOME_TEXT: &str = "Welcome to the William & Mary PDF Accessibility Remediation Tool. \
This service helps ensure your PDF documents meet accessibility standards.";

pub const SUPPORT_EMAIL: &str = "support@wm.edu";

/// Calendar year on the local clock.
///
/// Read on every render so a long-lived tab picks up the new year.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Footer line, e.g. "© 2026 William & Mary".
pub fn copyright_notice(year: i32) -> String {
    format!("© {year} {INSTITUTION_NAME}")
}

/// `mailto:` link target for the support address.
pub fn support_mailto() -> String {
    format!("mailto:{SUPPORT_EMAIL}")
}
