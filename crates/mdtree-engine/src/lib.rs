pub mod builder;
pub mod io;
pub mod loader;
pub mod parsing;
pub mod tree;


// Re-export key types for easier usage
pub use builder::{DocumentBuilder, TreeBuilder};
pub use io::*;
pub use loader::{LoadOutcome, MarkdownLoader};
pub use parsing::{parse_document, parse_markdown};
pub use tree::*;
