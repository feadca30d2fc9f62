pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the trimmed text after the fence marker if `line` is a fence line.
    ///
    /// Leading indentation before the marker is ignored.
    pub fn sig(line: &str) -> Option<&str> {
        line.trim_start()
            .strip_prefix(Self::BACKTICKS)
            .map(str::trim)
    }

    /// Whether `line` closes an open fence. Any fence line does.
    pub fn closes(line: &str) -> bool {
        Self::sig(line).is_some()
    }

    /// The language for a fence opened with `tag`, falling back to `default`.
    pub fn language<'a>(tag: &'a str, default: &'a str) -> &'a str {
        if tag.is_empty() { default } else { tag }
    }
}
