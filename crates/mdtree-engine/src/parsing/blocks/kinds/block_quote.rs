/// Blockquote block type with owned delimiter constant.
///
/// Only a single level is recognised: the line must start with `> ` and the
/// rest of the line is the quote text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, including its separating space.
    pub const PREFIX: &'static str = "> ";

    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
