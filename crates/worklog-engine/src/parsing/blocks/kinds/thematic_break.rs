/// Thematic break: three or more of the same `-`, `*` or `_`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let mut chars = t.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        Self::MARKERS.contains(&first) && chars.all(|c| c == first) && t.len() >= 3
    }
}
