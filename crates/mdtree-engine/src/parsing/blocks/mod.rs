//! # Block Parsing
//!
//! Line-oriented block construction.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only: fence, list marker, or a
//!    `SingleLine` (blank, heading, quote, paragraph)
//!
//! 2. **Block Construction**: single-line classes are built directly
//!    (`builder`); fences and lists consume several lines and report where
//!    the next block starts (`builder::build_code_block`, `list`)
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, BlockQuote, CodeFence, ListMarker)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` for each line
//! - **`builder`**: Single-line block builders and the fenced code consumer
//! - **`list`**: `parse_list_block`, a pure `(lines, start) -> (list, next)` function
//!
//! ## Key Invariants
//!
//! - Every multi-line parser returns a next index strictly after its start
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - A list's variant never changes after its first line

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod list;

pub use builder::{build_code_block, build_line_block};
pub use classify::{LineClass, MarkdownLineClassifier, SingleLine};
pub use list::parse_list_block;
