/// Blockquote line with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns the quoted remainder if `line` is a blockquote line.
    ///
    /// Leading indentation and one optional whitespace character after the
    /// `>` are consumed. Nested `>` markers are kept as part of the text.
    pub fn remainder(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => Some(chars.as_str()),
            _ => Some(rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_quote() {
        assert_eq!(BlockQuote::remainder("hello"), None);
    }

    #[test]
    fn single_quote() {
        assert_eq!(BlockQuote::remainder("> hello"), Some("hello"));
    }

    #[test]
    fn quote_without_space() {
        assert_eq!(BlockQuote::remainder(">hello"), Some("hello"));
    }

    #[test]
    fn indented_quote() {
        assert_eq!(BlockQuote::remainder("   > hello"), Some("hello"));
    }

    #[test]
    fn nested_marker_stays_in_text() {
        assert_eq!(BlockQuote::remainder(">> hello"), Some("> hello"));
    }

    #[test]
    fn empty_quote() {
        assert_eq!(BlockQuote::remainder(">"), Some(""));
    }
}
