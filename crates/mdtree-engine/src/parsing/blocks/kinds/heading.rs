use crate::tree::HeadingLevel;

/// ATX heading block type with owned delimiter constant.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Strips a heading prefix, returning the level and the remaining text.
    ///
    /// The marker run must be followed by at least one whitespace character;
    /// all whitespace after the run is consumed. Runs longer than six markers
    /// collapse to level 6.
    pub fn strip_prefix(line: &str) -> Option<(HeadingLevel, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        let count = line.len() - rest.len();
        if count == 0 || !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some((HeadingLevel::new(count), rest.trim_start()))
    }
}
