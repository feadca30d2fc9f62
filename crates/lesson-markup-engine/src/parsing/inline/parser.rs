use super::{
    cursor::Cursor,
    kinds::{Bold, CodeSpan},
    types::InlineSpan,
};

/// Formats a single line into a sequence of [`InlineSpan`]s.
///
/// Scans left to right. At each position a bold span is tried before a code
/// span; both take the shortest non-empty content up to the next closing
/// delimiter. Scanning resumes after the end of each match, so matches never
/// overlap.
///
/// Unterminated delimiters are left in the surrounding text. A line with no
/// match at all comes back as a single `Text` span, including the empty line.
pub fn format(line: &str) -> Vec<InlineSpan> {
    let mut cur = Cursor::new(line);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineSpan>, text: &str) {
        if !text.is_empty() {
            out.push(InlineSpan::text(text));
        }
    }

    while !cur.eof() {
        let at = cur.pos();
        // Bold is tried first at every position
        if let Some(span) = try_parse_bold(&mut cur).or_else(|| try_parse_code_span(&mut cur)) {
            flush_text(&mut out, &line[text_start..at]);
            out.push(span);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &line[text_start..]);

    if out.is_empty() {
        out.push(InlineSpan::text(line));
    }
    out
}

/// Scans delimited content starting at the cursor.
///
/// The content must hold at least one character and may not cross a newline.
/// Returns the inner text and leaves the cursor after the closing delimiter,
/// or restores the cursor and returns `None` when no closing delimiter follows.
fn scan_delimited<'a>(cur: &mut Cursor<'a>, delim: &[u8]) -> Option<&'a str> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    // The first content character may itself be a delimiter byte
    match cur.peek_char() {
        Some(c) if c != '\n' => cur.bump_n(c.len_utf8()),
        _ => {
            *cur = saved;
            return None;
        }
    }

    while !cur.eof() && !cur.starts_with(delim) {
        if cur.peek() == Some(b'\n') {
            break;
        }
        cur.bump();
    }

    if !cur.starts_with(delim) {
        *cur = saved;
        return None;
    }
    let inner = cur.slice_from(inner_start);
    cur.bump_n(delim.len());
    Some(inner)
}

fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    scan_delimited(cur, Bold::DELIM).map(InlineSpan::bold)
}

fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    scan_delimited(cur, &[CodeSpan::TICK]).map(InlineSpan::code)
}
