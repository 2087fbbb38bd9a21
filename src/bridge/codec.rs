//! Argument and result codec.
//!
//! Values cross the boundary as JSON: a JSON literal is also a valid script
//! literal, so encoding through [`literal`] is what guarantees no value can
//! break out of its intended position in generated script text, however
//! adversarial its content. Results come back as the engine's serialized
//! JSON and are decoded strictly; a shape mismatch is a
//! [`BridgeError::ProtocolMismatch`], never a silent coercion.
//!
//! Structured values use lower-camel-case keys in both directions; the
//! renames live on the types in [`crate::protocol`].

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{BridgeError, Result};

/// Encode a typed value as a script literal.
pub fn literal<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(BridgeError::Encode)
}

/// Decode an engine result into its expected shape.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| BridgeError::ProtocolMismatch {
        expected: std::any::type_name::<T>(),
        raw: raw.to_string(),
        source,
    })
}

/// The engine reports `null` for statements with no value, and an empty
/// result when evaluation produced nothing at all.
pub fn is_null(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed == "null"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_encode_as_quoted_literals() {
        assert_eq!(literal(&"plain").unwrap(), r#""plain""#);
        assert_eq!(literal(&42u32).unwrap(), "42");
        assert_eq!(literal(&true).unwrap(), "true");
    }

    #[test]
    fn adversarial_strings_stay_inside_their_literal() {
        let hostile = "\"); alert('pwned'); (\"";
        let encoded = literal(&hostile).unwrap();
        // Interior quotes must be escaped so the literal cannot terminate
        // early inside generated script. An escaped `\");` is harmless and
        // expected; only an unescaped one breaks out.
        assert!(encoded.starts_with('"') && encoded.ends_with('"'));
        let interior = &encoded[1..encoded.len() - 1];
        let breakout = interior
            .match_indices("\");")
            .any(|(i, _)| i == 0 || interior.as_bytes()[i - 1] != b'\\');
        assert!(!breakout, "unescaped quote in {encoded}");
        assert_eq!(decode::<String>(&encoded).unwrap(), hostile);
    }

    #[test]
    fn backslashes_and_newlines_round_trip() {
        let tricky = "line1\nline2\\end\t\"quoted\"";
        let encoded = literal(&tricky).unwrap();
        assert_eq!(decode::<String>(&encoded).unwrap(), tricky);
    }

    #[test]
    fn shape_mismatch_is_a_protocol_error() {
        let err = decode::<u32>(r#""not a number""#).unwrap_err();
        match err {
            BridgeError::ProtocolMismatch { expected, raw, .. } => {
                assert_eq!(expected, "u32");
                assert_eq!(raw, r#""not a number""#);
            }
            other => panic!("expected ProtocolMismatch, got {other:?}"),
        }
    }

    #[test]
    fn null_detection() {
        assert!(is_null("null"));
        assert!(is_null("  null "));
        assert!(is_null(""));
        assert!(!is_null("\"null\""));
    }
}
