//! Core types shared by the PDF remediation portal crates.
//!
//! Identity and session handling live in `pdf-remediation-platform-access`;
//! this crate only carries the identifiers and the error plumbing they share.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ParseIdError, UserId};
