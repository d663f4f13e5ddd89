//! Fixed transformation stage tables.
//!
//! Each stage is a (name, pattern, replacement) triple. The tables are
//! static configuration: adding a new disclaimer template or redaction
//! rule means adding a row here, not touching the pipeline control flow.
//!
//! Ordering within `default_stages()` is load-bearing, see `super`.

use regex::Regex;

/// Replacement marker for redacted email addresses.
pub const EMAIL_PLACEHOLDER: &str = "[EMAIL]";
/// Replacement marker for redacted phone numbers.
pub const PHONE_PLACEHOLDER: &str = "[PHONE]";
/// Replacement marker for redacted URLs.
pub const URL_PLACEHOLDER: &str = "[URL]";

/// A single substitution stage with a compiled regex.
#[derive(Debug, Clone)]
pub struct Stage {
    /// Short name for logging.
    pub name: &'static str,
    /// Compiled pattern for matching.
    pub pattern: Regex,
    /// Replacement text (empty string = removal).
    pub replacement: &'static str,
}

impl Stage {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

/// Build the default stage pipeline, in application order.
///
/// Disclaimer templates come first so that contact details embedded in
/// boilerplate vanish with the block; if a template's wording doesn't
/// match, the later redaction stages still catch the residue.
pub fn default_stages() -> Vec<Stage> {
    vec![
        // Known disclaimer templates: literal opening phrase through
        // literal closing phrase, lazy so adjacent blocks are matched
        // independently.
        Stage::new(
            "generic_disclaimer",
            r"(?is)This email may contain confidential information.*?Thank you\.",
            "",
        ),
        Stage::new(
            "privileged_disclaimer",
            r"(?is)This e-mail message may contain confidential and/or privileged information.*?Thank you\.",
            "",
        ),
        Stage::new(
            "external_caution_banner",
            r"(?is)CAUTION: This email originated from outside of the organization.*?safe\.",
            "",
        ),
        Stage::new(
            "bcg_disclaimer",
            r"(?is)This e-mail message may contain confidential and/or privileged information\. If you are not an addressee or otherwise authorized to receive this message, you should not use, copy, disclose or take any action based on this e-mail or any information contained in the message\. If you have received this material in error, please advise the sender immediately by reply e-mail and delete this message\.\s*We may share your contact details with other BCG entities and our third party service providers\. Please see BCG privacy policy https://www\.bcg\.com/about/privacy-policy\.aspx for further information\.?",
            "",
        ),
        Stage::new(
            "penguin_disclaimer",
            r"(?is)This email may contain confidential Penguin International information\. If received in error or if you're not the intended recipient, please notify the sender and delete it\.\s*By accessing this email, you consent to sharing your contact details within our network\. Refer to our privacy policy at https://www\.penguin-international\.com/privacy-policy/ for more details\.?\s*(?:Thank you\.?)?",
            "",
        ),
        // Contact redaction.
        Stage::new(
            "email_address",
            r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
            EMAIL_PLACEHOLDER,
        ),
        // Deliberately lenient: four digit groups with optional single
        // separators, so it also swallows IDs, amounts, and bare years.
        Stage::new(
            "phone_number",
            r"\+?[0-9]{1,4}?[-.\s]?[0-9]{1,3}[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,4}",
            PHONE_PLACEHOLDER,
        ),
        Stage::new("url", r"https?://\S+|www\.\S+", URL_PLACEHOLDER),
        // Thread metadata: header label through end of line.
        Stage::new("thread_metadata", r"(?i)(From|To|CC|Sent|Date):[^\n]*", ""),
        // Horizontal-rule reply separators.
        Stage::new("reply_separator", r"-{3,}\s*", ""),
        Stage::new(
            "sensitivity_keyword",
            r"(?i)\b(Confidential|Proprietary|Private|Sensitive)\b",
            "",
        ),
        Stage::new(
            "organization_name",
            r"(?i)(Penguin International|BCG|Boston Consulting Group)",
            "",
        ),
        Stage::new(
            "job_title",
            r"(?i)(Assistant Manager|Business Analyst|Senior Analyst|Head of Operations)",
            "",
        ),
        Stage::new("meeting_id", r"Meeting ID: \w+", ""),
        Stage::new(
            "date_token",
            r"\b\d{1,2}(?:st|nd|rd|th)?\s?[A-Za-z]+\s\d{4}\b",
            "",
        ),
        Stage::new("inline_media", r"!\[[^\]]*\]\([^)]*\)", ""),
        Stage::new("markup_tag", r"<[^>]*>", ""),
        // Must run last: earlier removals leave gaps to collapse.
        Stage::new("whitespace", r"\s+", " "),
    ]
}
