/// ATX heading line: one to six `#` followed by whitespace.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_MARKERS: usize = 6;

    /// Returns `(marker_count, text)` if `line` is a heading.
    ///
    /// Headings must start at column zero.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let markers = line.bytes().take_while(|b| *b == Self::MARKER).count();
        if markers == 0 || markers > Self::MAX_MARKERS {
            return None;
        }
        let rest = &line[markers..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some((markers, rest.trim_start()))
    }
}
