/// A cursor for byte-wise inline scanning of a single line.
///
/// Positions are byte offsets into `s`. The scanner only ever stops on ASCII
/// delimiter bytes, so every position it slices at is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks at the full character starting at the current position.
    ///
    /// Returns `None` at EOF or when the cursor sits inside a multi-byte char.
    pub fn peek_char(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Returns the text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.s[start..self.i]
    }
}
