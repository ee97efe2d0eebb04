/// Backtick code fence.
///
/// All fence syntax knowledge lives here: what opens a fenced region and
/// what closes it.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the info string if `line` opens a fence.
    ///
    /// An opener is optional indentation, three backticks, an optional
    /// language tag made of word characters or `#+.-`, and optional
    /// trailing whitespace. Anything else after the backticks means the
    /// line is not a fence.
    pub fn open_info(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::BACKTICKS)?;
        let info = rest.trim_end();
        info.chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '#' | '+' | '.' | '-'))
            .then_some(info)
    }

    /// Whether `line` closes an open fence: a run of three or more
    /// backticks alone on the line, possibly indented.
    pub fn closes(line: &str) -> bool {
        let t = line.trim();
        t.len() >= Self::BACKTICKS.len() && t.bytes().all(|b| b == b'`')
    }
}
