//! One-shot document initialization for an editor surface.

use crate::{builder::DocumentBuilder, parsing::parse_document};

/// What a call to [`MarkdownLoader::load`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The root was replaced with this many blocks.
    Loaded { blocks: usize },
    /// No markdown was given; existing content was left untouched.
    Skipped,
    /// The loader already ran for this target; nothing was done.
    AlreadyInitialized,
}

/// Loads markdown into a builder's root at most once.
///
/// The first call arms the guard whatever the input, so repeated triggers
/// against the same target are no-ops until [`MarkdownLoader::reset`].
#[derive(Debug, Default)]
pub struct MarkdownLoader {
    initialized: bool,
}

impl MarkdownLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Re-arms the loader so the next [`MarkdownLoader::load`] rebuilds from scratch.
    pub fn reset(&mut self) {
        self.initialized = false;
    }

    /// Parses `markdown` and replaces the builder's root content with it.
    ///
    /// `None` means there is nothing to load. `Some("")` loads a single empty
    /// paragraph.
    pub fn load<B: DocumentBuilder>(&mut self, builder: &mut B, markdown: Option<&str>) -> LoadOutcome {
        if self.initialized {
            log::debug!("markdown loader already initialized, ignoring load");
            return LoadOutcome::AlreadyInitialized;
        }
        self.initialized = true;

        let Some(markdown) = markdown else {
            return LoadOutcome::Skipped;
        };

        let blocks = parse_document(builder, markdown);
        let count = blocks.len();
        builder.clear_root();
        for block in blocks {
            builder.append_root(block);
        }
        LoadOutcome::Loaded { blocks: count }
    }
}
