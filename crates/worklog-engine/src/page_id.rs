//! Normalization of user-supplied page references.
//!
//! Users paste anything from a bare 32-hex ID to a full page URL with a slug
//! in front of the ID. The workspace API only accepts the hyphenated
//! 8-4-4-4-12 form.

use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

const EMPTY_REASON: &str = "the page reference is empty";
const FORMAT_REASON: &str = "paste the page URL or its 32-character ID";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageIdError {
    #[error("Invalid page reference '{input}': {reason}")]
    InvalidPageReference { input: String, reason: &'static str },
}

impl PageIdError {
    fn invalid(input: &str, reason: &'static str) -> Self {
        PageIdError::InvalidPageReference {
            input: input.to_string(),
            reason,
        }
    }
}

fn hyphenated_pattern() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
        )
        .expect("Invalid hyphenated page id regex")
    })
}

fn compact_pattern() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[0-9a-fA-F]{32}").expect("Invalid compact page id regex"))
}

/// Reduces a page URL or identifier to the lower-case hyphenated form.
///
/// Tried in order: a hyphenated UUID anywhere in the input, a run of 32 hex
/// characters anywhere in the input, then the whole input with hyphens
/// removed.
pub fn normalize_page_id(raw: &str) -> Result<String, PageIdError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(PageIdError::invalid(input, EMPTY_REASON));
    }

    if let Some(found) = hyphenated_pattern().find(input) {
        return Ok(found.as_str().to_lowercase());
    }

    let compact = match compact_pattern().find(input) {
        Some(found) => found.as_str().to_lowercase(),
        None => input.replace('-', "").to_lowercase(),
    };
    if compact.len() != 32 || !compact.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PageIdError::invalid(input, FORMAT_REASON));
    }

    Uuid::try_parse(&compact)
        .map(|id| id.hyphenated().to_string())
        .map_err(|_| PageIdError::invalid(input, FORMAT_REASON))
}
