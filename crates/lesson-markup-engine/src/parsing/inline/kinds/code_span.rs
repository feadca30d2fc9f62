/// Inline code span delimited by single backticks.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that opens and closes a code span.
    pub const TICK: u8 = b'`';
}
