//! Identifier validation and quoting
//!
//! Caller-supplied table, column, index, owner, and user names are spliced
//! into statements as quoted identifiers. Quoting alone cannot stop a name
//! carrying its own quote characters from breaking out of the identifier
//! position, so names are first checked against the standard identifier
//! syntax: an ASCII letter or `_`, followed by letters, digits, `_` or `$`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid identifier '{0}'")]
pub struct IdentError(String);

/// Check `name` against the allowed identifier syntax.
pub fn validate(name: &str) -> Result<&str, IdentError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };
    if valid {
        Ok(name)
    } else {
        Err(IdentError(name.to_string()))
    }
}

/// Validate and double-quote an identifier for use in a statement.
pub fn quote(name: &str) -> Result<String, IdentError> {
    validate(name).map(|name| format!("\"{name}\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert_eq!(quote("foo").unwrap(), "\"foo\"");
        assert_eq!(quote("_private").unwrap(), "\"_private\"");
        assert_eq!(quote("t2").unwrap(), "\"t2\"");
        assert_eq!(quote("pay$roll").unwrap(), "\"pay$roll\"");
    }

    #[test]
    fn rejects_structural_injection() {
        assert!(quote("foo\"bar").is_err());
        assert!(quote("foo;drop table x").is_err());
        assert!(quote("foo bar").is_err());
        assert!(quote("foo'").is_err());
    }

    #[test]
    fn rejects_empty_and_leading_digit() {
        assert!(quote("").is_err());
        assert!(quote("1foo").is_err());
        assert!(quote("$foo").is_err());
    }

    #[test]
    fn error_names_the_offender() {
        let err = quote("no good").unwrap_err();
        assert_eq!(err.to_string(), "invalid identifier 'no good'");
    }
}
