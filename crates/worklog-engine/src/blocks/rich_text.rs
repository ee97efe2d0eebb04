use super::RICH_TEXT_LIMIT;

/// Ordered text segments, each at most [`RICH_TEXT_LIMIT`] characters.
///
/// Segments concatenate in order to the represented text. A `RichText` is
/// never empty: empty input is stored as a single space so the workspace
/// API never receives a zero-length rich-text array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichText {
    segments: Vec<String>,
}

impl RichText {
    pub fn new(content: &str) -> Self {
        let source = if content.is_empty() { " " } else { content };
        Self {
            segments: split_by_length(source, RICH_TEXT_LIMIT),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Concatenation of all segments.
    pub fn plain_text(&self) -> String {
        self.segments.concat()
    }
}

/// Splits `text` into the fewest chunks of at most `max_chars` characters.
///
/// Boundaries fall on `char` boundaries, so multi-byte characters are never
/// split. Concatenating the result reproduces `text` exactly; an empty input
/// produces no chunks. A `max_chars` of zero is treated as one.
pub fn split_by_length(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::with_capacity(text.len() / max_chars + 1);
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(text[start..idx].to_string());
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(text[start..].to_string());
    }
    chunks
}

/// Returns the prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
