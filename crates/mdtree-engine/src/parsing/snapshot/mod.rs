//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a `DocumentTree` as a stable indented outline
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (non-empty root,
//!   heading levels in range, checkbox state only on checkbox lists, no empty
//!   text spans)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
