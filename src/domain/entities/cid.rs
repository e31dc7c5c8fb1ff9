//! User identifier used as the route and query key.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;
use url::form_urlencoded;

use crate::error::AppError;

/// Reserved route value meaning "the currently authenticated user".
pub const ME_SENTINEL: &str = "me";

/// A validated user identifier.
///
/// Either a real identifier or the [`ME_SENTINEL`]. A `Cid` is always
/// non-empty and safe to place into a single URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cid(String);

impl Cid {
    /// Parses a raw path segment into a `Cid`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the value is empty or contains
    /// whitespace, control characters, or URL delimiters (`/`, `?`, `#`, `\`).
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.is_empty() {
            return Err(AppError::bad_request("cid must not be empty", json!({})));
        }

        if let Some(bad) = raw.chars().find(|c| !is_allowed(*c)) {
            return Err(AppError::bad_request(
                "cid contains an invalid character",
                json!({ "cid": raw, "character": bad.to_string() }),
            ));
        }

        Ok(Self(raw.to_string()))
    }

    /// Returns true if this is the "current user" sentinel.
    ///
    /// The comparison is exact: `"Me"` is an ordinary identifier.
    pub fn is_me(&self) -> bool {
        self.0 == ME_SENTINEL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical page path for this identifier.
    ///
    /// The identifier is percent-encoded so the path decodes back to the
    /// same `Cid` (`a%2Fb` becomes `/stats/a%252Fb`).
    pub fn stats_path(&self) -> String {
        let segment: String = form_urlencoded::byte_serialize(self.0.as_bytes()).collect();
        format!("/stats/{segment}")
    }
}

fn is_allowed(c: char) -> bool {
    !(c.is_whitespace() || c.is_control() || matches!(c, '/' | '?' | '#' | '\\'))
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Cid {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cid> for String {
    fn from(cid: Cid) -> Self {
        cid.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_identifier() {
        let cid = Cid::parse("abc123").unwrap();
        assert_eq!(cid.as_str(), "abc123");
        assert!(!cid.is_me());
    }

    #[test]
    fn test_parse_sentinel() {
        assert!(Cid::parse("me").unwrap().is_me());
        assert!(!Cid::parse("Me").unwrap().is_me());
        assert!(!Cid::parse("me2").unwrap().is_me());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(Cid::parse(""), Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_parse_rejects_delimiters_and_whitespace() {
        for raw in ["a/b", "a?b", "a#b", "a\\b", "a b", "a\tb", "a\nb"] {
            assert!(Cid::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_allows_common_identifier_shapes() {
        for raw in ["ab-cd", "user_1", "first.last", "ÅÄÖ"] {
            assert!(Cid::parse(raw).is_ok(), "{raw:?} should be accepted");
        }
    }

    #[test]
    fn test_stats_path() {
        assert_eq!(Cid::parse("abc123").unwrap().stats_path(), "/stats/abc123");
        assert_eq!(Cid::parse("first.last").unwrap().stats_path(), "/stats/first.last");
    }

    #[test]
    fn test_stats_path_escapes_segment() {
        assert_eq!(Cid::parse("a%2Fb").unwrap().stats_path(), "/stats/a%252Fb");
        assert_eq!(Cid::parse("100%").unwrap().stats_path(), "/stats/100%25");
        assert_eq!(Cid::parse("Åsa").unwrap().stats_path(), "/stats/%C3%85sa");
        assert_eq!(Cid::parse("a+b").unwrap().stats_path(), "/stats/a%2Bb");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Cid = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(ok.as_str(), "abc");

        let err = serde_json::from_str::<Cid>("\"a b\"");
        assert!(err.is_err());
    }
}
