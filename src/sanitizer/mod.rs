//! Text sanitizer — ordered pattern-substitution pipeline.
//!
//! Cleans raw email text by applying a fixed sequence of regex stages:
//! 1. Known disclaimer templates (removed wholesale)
//! 2. Contact redaction (email/phone → placeholders)
//! 3. URL redaction
//! 4. Thread metadata, separators, keywords, org names, titles,
//!    meeting IDs, dates, inline media, leftover markup (removed)
//! 5. Whitespace collapse + trim
//!
//! Order matters: disclaimers go before contact redaction so embedded
//! addresses disappear with the block, and whitespace collapse runs last
//! over the gaps the earlier stages leave behind. `clean()` is pure and
//! deterministic; it never fails and never returns an empty string.

use std::borrow::Cow;

use tracing::debug;

mod stages;

pub use stages::{EMAIL_PLACEHOLDER, PHONE_PLACEHOLDER, URL_PLACEHOLDER};

use stages::Stage;

/// Returned when cleaning strips the entire message.
pub const EMPTY_FALLBACK: &str = "No meaningful content found in the email.";

/// Sanitizer with the default stage pipeline compiled once.
pub struct Sanitizer {
    stages: Vec<Stage>,
}

impl Sanitizer {
    /// Create a sanitizer with the default stage tables.
    pub fn new() -> Self {
        Self {
            stages: stages::default_stages(),
        }
    }

    /// Apply every stage in order and return the cleaned text.
    ///
    /// The result is trimmed and never empty: if nothing survives the
    /// pipeline, the fixed fallback message is returned instead.
    pub fn clean(&self, input: &str) -> String {
        let mut text = input.to_string();

        for stage in &self.stages {
            if let Cow::Owned(changed) = stage.pattern.replace_all(&text, stage.replacement) {
                debug!(stage = stage.name, "Stage matched");
                text = changed;
            }
        }

        let text = text.trim();
        if text.is_empty() {
            EMPTY_FALLBACK.to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}
