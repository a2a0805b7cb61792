pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether the line opens (or closes) a fence.
    pub fn is_fence(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    /// Language tag of an opening fence line; `None` when empty.
    pub fn language(line: &str) -> Option<&str> {
        let tag = line.strip_prefix(Self::BACKTICKS)?.trim();
        (!tag.is_empty()).then_some(tag)
    }
}
