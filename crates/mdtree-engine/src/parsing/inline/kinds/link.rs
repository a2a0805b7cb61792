/// Link inline type `[text](url)` with owned delimiter constants.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    /// Between the link text and the url.
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: &'static str = ")";
}
