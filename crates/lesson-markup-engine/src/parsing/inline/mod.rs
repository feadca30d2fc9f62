//! # Inline Formatting
//!
//! Cursor-based formatting of a single line into [`InlineSpan`]s.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Text, Bold, InlineCode, TooltipRef, ModalRef)
//! - **`kinds`**: Delimiter-owning types (`Bold`, `CodeSpan`)
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`parser`**: `format()` entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! At every position bold is tried before inline code. Whichever matches
//! first consumes its content whole: `` **`x`** `` is bold text containing
//! backticks, and `` `**x**` `` is code containing asterisks.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::format;
pub use types::InlineSpan;
