//! # Inline Kinds
//!
//! Inline constructs that own their delimiter constants.
//!
//! - **`Bold`**: `DELIM = b"**"`
//! - **`CodeSpan`**: `TICK = b'\`'`
//!
//! The formatter refers to these constants; it never hardcodes `**` or `` ` ``.

pub mod bold;
pub mod code_span;

pub use bold::Bold;
pub use code_span::CodeSpan;
