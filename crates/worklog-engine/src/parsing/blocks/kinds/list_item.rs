/// Bulleted and numbered list item lines.
///
/// Only the item text is kept; the workspace numbers items itself, so the
/// source ordinal is dropped.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];

    /// Returns the item text if `line` is a bulleted item.
    pub fn bullet(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::BULLETS)?;
        Self::after_required_space(rest)
    }

    /// Returns the item text if `line` is a numbered item (`1. text`).
    pub fn numbered(line: &str) -> Option<&str> {
        let t = line.trim_start();
        let digits = t.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let rest = t[digits..].strip_prefix('.')?;
        Self::after_required_space(rest)
    }

    fn after_required_space(rest: &str) -> Option<&str> {
        rest.starts_with(char::is_whitespace)
            .then(|| rest.trim_start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", Some("item"))]
    #[case("* item", Some("item"))]
    #[case("+ item", Some("item"))]
    #[case("   - indented", Some("indented"))]
    #[case("- ", Some(""))]
    #[case("-item", None)]
    #[case("**bold** start", None)]
    #[case("1. numbered", None)]
    fn parses_bullets(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(ListItem::bullet(line), expected);
    }

    #[rstest]
    #[case("1. first", Some("first"))]
    #[case("42.  answer", Some("answer"))]
    #[case("  3. indented", Some("indented"))]
    #[case("1.no space", None)]
    #[case("1) paren", None)]
    #[case(". nothing", None)]
    #[case("- bullet", None)]
    fn parses_numbered(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(ListItem::numbered(line), expected);
    }
}
