use regex::Regex;
use std::sync::OnceLock;

/// Rewrite rules in application order: `(pattern, replacement)`.
const RULES: &[(&str, &str)] = &[
    // image: keep the URL
    (r"!\[[^\]]*\]\(([^)]+)\)", "${1}"),
    // link: keep the label
    (r"\[([^\]]+)\]\([^)]+\)", "${1}"),
    (r"`([^`]+)`", "${1}"),
    (r"\*\*([^*]+)\*\*", "${1}"),
    (r"__([^_]+)__", "${1}"),
    (r"~~([^~]+)~~", "${1}"),
    (r"\*([^*]+)\*", "${1}"),
    (r"_([^_]+)_", "${1}"),
];

fn rules() -> &'static [(Regex, &'static str)] {
    static COMPILED: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        RULES
            .iter()
            .map(|(pattern, replacement)| {
                (
                    Regex::new(pattern).expect("Invalid inline markup regex"),
                    *replacement,
                )
            })
            .collect()
    })
}

/// Reduces inline markdown to plain text and trims the result.
///
/// `[label](url)` becomes `label`, `![alt](url)` becomes `url`, and code,
/// bold, strikethrough and italic markers are dropped around their content.
pub fn strip_inline_markdown(text: &str) -> String {
    let mut out = text.to_string();
    for (regex, replacement) in rules() {
        if let std::borrow::Cow::Owned(replaced) = regex.replace_all(&out, *replacement) {
            out = replaced;
        }
    }
    out.trim().to_string()
}
