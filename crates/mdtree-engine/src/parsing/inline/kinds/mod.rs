//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Link`**: `OPEN = b'['`, `MIDDLE = "]("`, `CLOSE = ")"`
//! - **`Emphasis`**: one delimiter + style set per pattern, and the
//!   `PRECEDENCE` order they are tried in
//!
//! The parser calls these constants; it never hardcodes `](` or `**`.

pub mod emphasis;
pub mod link;

pub use emphasis::Emphasis;
pub use link::Link;
