//! The success-or-error envelope returned by mutating commands
//!
//! Exactly one of the two sides is ever populated. The fields are private
//! and the only constructors are [`CommandResult::success`] and
//! [`CommandResult::error`], so a both-present or both-absent value cannot
//! be built.

use serde::{Deserialize, Serialize};

/// Outcome envelope for every command that is not a list-returning
/// introspection.
///
/// Serializes with the wire keys the clients already consume:
///
/// ```json
/// {"Success": "1 row(s) affected", "Error": null}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    #[serde(rename = "Success")]
    success: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: Some(message.into()),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: None,
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn as_success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn as_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_side_is_populated() {
        let ok = CommandResult::success("CREATE TABLE");
        assert!(ok.as_success().is_some());
        assert!(ok.as_error().is_none());
        assert!(!ok.is_error());

        let err = CommandResult::error("relation \"foo\" already exists");
        assert!(err.as_success().is_none());
        assert!(err.as_error().is_some());
        assert!(err.is_error());
    }

    #[test]
    fn serializes_with_wire_keys() {
        let ok = CommandResult::success("1 row(s) affected");
        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(json, r#"{"Success":"1 row(s) affected","Error":null}"#);

        let err = CommandResult::error("boom");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"Success":null,"Error":"boom"}"#);
    }

    #[test]
    fn deserializes_from_wire_form() {
        let parsed: CommandResult =
            serde_json::from_str(r#"{"Success":null,"Error":"no such column"}"#).unwrap();
        assert_eq!(parsed.as_error(), Some("no such column"));
    }
}
