//! Strongly-typed identifiers.
//!
//! IDs wrap a ULID so they sort by creation time and render with a short
//! type prefix (`usr_01H...`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Error returned when parsing an ID from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

/// Unique identifier for a portal user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Ulid);

impl UserId {
    const PREFIX: &'static str = "usr";

    /// Creates a new ID with a randomly generated ULID.
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Creates an ID from a ULID.
    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Returns the underlying ULID.
    #[must_use]
    pub const fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", Self::PREFIX, self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIdError;

    /// Accepts both the prefixed display form and a bare ULID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .strip_prefix(Self::PREFIX)
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(s);

        Ulid::from_str(raw).map(Self).map_err(|e| ParseIdError {
            id_type: "UserId",
            reason: e.to_string(),
        })
    }
}

impl From<Ulid> for UserId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_prefix() {
        let id = UserId::new();
        assert!(id.to_string().starts_with("usr_"));
    }

    #[test]
    fn parse_with_prefix() {
        let id = UserId::new();
        let parsed: UserId = id.to_string().parse().expect("should parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_without_prefix() {
        let ulid = Ulid::new();
        let id: UserId = ulid.to_string().parse().expect("should parse");
        assert_eq!(id.as_ulid(), ulid);
    }

    #[test]
    fn parse_invalid_ulid() {
        let err = "usr_not_a_ulid"
            .parse::<UserId>()
            .expect_err("should reject");
        assert_eq!(err.id_type, "UserId");
    }

    #[test]
    fn ids_from_same_ulid_are_equal() {
        let ulid = Ulid::new();
        assert_eq!(UserId::from_ulid(ulid), UserId::from(ulid));
    }

    #[test]
    fn serializes_as_bare_ulid() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", id.as_ulid()));
    }
}
