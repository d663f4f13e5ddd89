//! Request adapter — turns an inbound request body into a single text string.
//!
//! Extraction order:
//! 1. Parse the body as JSON and read the first non-empty string field
//!    among `emailBody`, `email_body`, `body` (fixed priority).
//! 2. Fall back to the whole raw body decoded as UTF-8.
//!
//! A malformed JSON body is not an error: it falls through to the raw path.

use serde_json::Value;
use tracing::debug;

use crate::error::RequestError;

/// Accepted JSON field names, in priority order. First non-empty wins.
const BODY_FIELDS: [&str; 3] = ["emailBody", "email_body", "body"];

/// Extract the email text from an inbound request body.
///
/// Returns `RequestError::Decode` if the raw body is not valid UTF-8, and
/// `RequestError::EmptyBody` if neither path yields non-whitespace text.
pub fn extract_email_body(body: &[u8]) -> Result<String, RequestError> {
    let text = match structured_field(body) {
        Some(text) => text,
        None => std::str::from_utf8(body)
            .map_err(|_| RequestError::Decode)?
            .to_string(),
    };

    if text.trim().is_empty() {
        return Err(RequestError::EmptyBody);
    }

    Ok(text)
}

/// Read the email text from a structured (JSON) body.
///
/// Returns `None` when the body is not JSON, no accepted field is present,
/// or every accepted field is empty or not a string.
fn structured_field(body: &[u8]) -> Option<String> {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "Body is not structured, falling back to raw text");
            return None;
        }
    };

    BODY_FIELDS.iter().find_map(|field| {
        value
            .get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(String::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_email_body_camel_case_field() {
        let body = br#"{"emailBody": "Hello there"}"#;
        assert_eq!(extract_email_body(body).unwrap(), "Hello there");
    }

    #[test]
    fn reads_email_body_snake_case_field() {
        let body = br#"{"email_body": "Hello there"}"#;
        assert_eq!(extract_email_body(body).unwrap(), "Hello there");
    }

    #[test]
    fn reads_plain_body_field() {
        let body = br#"{"body": "Hello there"}"#;
        assert_eq!(extract_email_body(body).unwrap(), "Hello there");
    }

    #[test]
    fn camel_case_field_wins_over_the_others() {
        let body = br#"{"body": "third", "email_body": "second", "emailBody": "first"}"#;
        assert_eq!(extract_email_body(body).unwrap(), "first");
    }

    #[test]
    fn empty_field_falls_through_to_next_name() {
        let body = br#"{"emailBody": "", "body": "fallback"}"#;
        assert_eq!(extract_email_body(body).unwrap(), "fallback");
    }

    #[test]
    fn all_fields_empty_falls_back_to_raw_body() {
        // The raw body here is the JSON text itself, which is non-empty.
        let body = br#"{"email_body": ""}"#;
        assert_eq!(extract_email_body(body).unwrap(), r#"{"email_body": ""}"#);
    }

    #[test]
    fn non_string_field_falls_through() {
        let body = br#"{"emailBody": 42, "body": "text"}"#;
        assert_eq!(extract_email_body(body).unwrap(), "text");
    }

    #[test]
    fn malformed_json_falls_back_to_raw_body() {
        let body = b"{not json at all";
        assert_eq!(extract_email_body(body).unwrap(), "{not json at all");
    }

    #[test]
    fn plain_text_body_passes_through() {
        let body = b"Just a plain email body.";
        assert_eq!(extract_email_body(body).unwrap(), "Just a plain email body.");
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let body = [0xff, 0xfe, 0x80];
        assert!(matches!(
            extract_email_body(&body),
            Err(RequestError::Decode)
        ));
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(matches!(
            extract_email_body(b""),
            Err(RequestError::EmptyBody)
        ));
    }

    #[test]
    fn whitespace_only_body_is_rejected() {
        assert!(matches!(
            extract_email_body(b"  \n\t  "),
            Err(RequestError::EmptyBody)
        ));
    }

    #[test]
    fn whitespace_only_structured_field_is_rejected() {
        // A whitespace-only field is "non-empty" and wins the field priority,
        // but still fails the final usable-text check.
        let body = br#"{"emailBody": "   "}"#;
        assert!(matches!(
            extract_email_body(body),
            Err(RequestError::EmptyBody)
        ));
    }
}
