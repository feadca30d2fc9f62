//! # Rendering Pipeline
//!
//! Raw lesson text plus an explanation table in, a render tree out.
//!
//! ```text
//! text ──► BlockBuilder ──► LineClassifier ──► RenderNode[]
//!                │                 │
//!                │                 └─ paragraph ─► resolve ─► format
//!                └─ callout body ─► parse_block (nested dialect)
//! ```
//!
//! Every call is self-contained: the builder, its open block and its output
//! live on the stack of one `parse_block` call, and the explanation table is
//! only ever borrowed.

pub mod blocks;
pub mod content;
pub mod context;
pub mod dialect;
pub mod inline;
pub mod trigger;

pub use blocks::{CalloutKind, List, ListItem, RenderNode, group_lists};
pub use content::{Content, render_content};
pub use context::{ParseContext, ParseOptions};
pub use dialect::{Dialect, DialectKind, HeadingMode, UnknownDialect};
pub use inline::{InlineSpan, format};
pub use trigger::{AnnotationKind, resolve};

use blocks::BlockBuilder;

/// Parses a block of text into render nodes under `dialect`.
///
/// Lines are split on `\n` with a trailing `\r` dropped; a final newline does
/// not produce an extra blank line. Never fails.
pub fn parse_block(text: &str, dialect: &Dialect, ctx: &ParseContext<'_>) -> Vec<RenderNode> {
    let mut builder = BlockBuilder::new(*dialect, *ctx);

    for line in text.lines() {
        builder.push(line);
    }

    builder.finish()
}

/// Parses the content of a modal deep dive.
pub fn parse_deep_dive(text: &str, options: &ParseOptions) -> Vec<RenderNode> {
    parse_block(text, &Dialect::DEEP_DIVE, &ParseContext::new(options))
}
