pub mod io;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::{
    CalloutKind, Content, Dialect, DialectKind, InlineSpan, List, ListItem, ParseContext,
    ParseOptions, RenderNode, format, parse_block, parse_deep_dive, render_content, resolve,
};
