use crate::tree::ListVariant;

/// Item text (and checkbox state) extracted from one list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEntry<'a> {
    pub text: &'a str,
    /// `Some` only for checkbox items.
    pub checked: Option<bool>,
}

/// List item markers with owned delimiter constants.
///
/// Markers are `- ` (bullet), `N. ` (numbered) and `- [ ] ` / `- [x] `
/// (checkbox). The separator after a marker is exactly one whitespace
/// character; anything after it is item text.
pub struct ListMarker;

impl ListMarker {
    pub const BULLET: char = '-';
    pub const NUMBER_DOT: char = '.';
    pub const BOX_OPEN: char = '[';
    pub const BOX_CLOSE: char = ']';
    pub const CHECKED: char = 'x';
    pub const UNCHECKED: char = ' ';

    /// Detects the variant a list starting at `line` would have.
    ///
    /// Checkbox wins over bullet, since every checkbox line is also a bullet line.
    pub fn detect(line: &str) -> Option<ListVariant> {
        if Self::checkbox(line).is_some() {
            Some(ListVariant::Checkbox)
        } else if Self::numbered(line).is_some() {
            Some(ListVariant::Numbered)
        } else if Self::bullet(line).is_some() {
            Some(ListVariant::Bullet)
        } else {
            None
        }
    }

    /// Extracts the item from `line` if it matches `variant`'s marker.
    pub fn strip(variant: ListVariant, line: &str) -> Option<ListEntry<'_>> {
        match variant {
            ListVariant::Bullet => Self::bullet(line).map(|text| ListEntry {
                text,
                checked: None,
            }),
            ListVariant::Numbered => Self::numbered(line).map(|text| ListEntry {
                text,
                checked: None,
            }),
            ListVariant::Checkbox => Self::checkbox(line).map(|(checked, text)| ListEntry {
                text,
                checked: Some(checked),
            }),
        }
    }

    fn bullet(line: &str) -> Option<&str> {
        skip_separator(line.strip_prefix(Self::BULLET)?)
    }

    fn numbered(line: &str) -> Option<&str> {
        let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
        if rest.len() == line.len() {
            return None;
        }
        skip_separator(rest.strip_prefix(Self::NUMBER_DOT)?)
    }

    fn checkbox(line: &str) -> Option<(bool, &str)> {
        let rest = Self::bullet(line)?.strip_prefix(Self::BOX_OPEN)?;
        let mut chars = rest.chars();
        let checked = match chars.next()? {
            Self::CHECKED => true,
            Self::UNCHECKED => false,
            _ => return None,
        };
        let rest = chars.as_str().strip_prefix(Self::BOX_CLOSE)?;
        skip_separator(rest).map(|text| (checked, text))
    }
}

/// Consumes exactly one whitespace character.
fn skip_separator(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    chars.next().filter(|c| c.is_whitespace())?;
    Some(chars.as_str())
}
