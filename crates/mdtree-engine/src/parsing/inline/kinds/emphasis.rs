use crate::tree::{StyleSet, TextStyle};

/// A symmetric emphasis delimiter and the styles it applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    pub delimiter: &'static str,
    pub styles: StyleSet,
}

impl Emphasis {
    pub const BOLD_ITALIC: Emphasis = Emphasis {
        delimiter: "***",
        styles: StyleSet::of(&[TextStyle::Bold, TextStyle::Italic]),
    };
    pub const BOLD: Emphasis = Emphasis {
        delimiter: "**",
        styles: StyleSet::of(&[TextStyle::Bold]),
    };
    pub const ITALIC: Emphasis = Emphasis {
        delimiter: "*",
        styles: StyleSet::of(&[TextStyle::Italic]),
    };
    pub const STRIKETHROUGH: Emphasis = Emphasis {
        delimiter: "~~",
        styles: StyleSet::of(&[TextStyle::Strikethrough]),
    };
    pub const CODE: Emphasis = Emphasis {
        delimiter: "`",
        styles: StyleSet::of(&[TextStyle::Code]),
    };

    /// Tried in this order; the first one found in a segment is the only one
    /// applied to it. Longer asterisk runs must come before shorter ones.
    pub const PRECEDENCE: [Emphasis; 5] = [
        Self::BOLD_ITALIC,
        Self::BOLD,
        Self::ITALIC,
        Self::STRIKETHROUGH,
        Self::CODE,
    ];
}
