/// Bold span delimited by a pair of double asterisks.
pub struct Bold;

impl Bold {
    /// Opening and closing delimiter.
    pub const DELIM: &'static [u8; 2] = b"**";
}
