// src/core/html.rs
//
// Positional scanning over semi-structured markup. The card and header
// patterns are matched with first-occurrence-after searches, which gives
// the same spans as non-greedy wildcard matching without anchoring to
// lines. No tag balancing; the input shape is known and narrow.

/// First occurrence of `pat` at or after `from`, as an absolute index.
pub fn find_from(s: &str, pat: &str, from: usize) -> Option<usize> {
    s.get(from..)?.find(pat).map(|i| i + from)
}

/// Capture the text between the first `open` at or after `from` and the
/// first `close` after it. Returns the capture and the index just past
/// `close`, so scans can chain.
pub fn capture<'a>(s: &'a str, from: usize, open: &str, close: &str) -> Option<(&'a str, usize)> {
    let o = find_from(s, open, from)? + open.len();
    let c = find_from(s, close, o)?;
    Some((&s[o..c], c + close.len()))
}

/// Shorthand for a whole-document capture: first `open`..`close` span.
pub fn slice_between<'a>(s: &'a str, open: &str, close: &str) -> Option<&'a str> {
    capture(s, 0, open, close).map(|(inner, _)| inner)
}

/// End index of the first *pair* of `close` tags at or after `from`:
/// a `close` followed, across optional whitespace, by another `close`.
/// Lone closers before the pair are stepped over.
pub fn close_pair(s: &str, close: &str, from: usize) -> Option<usize> {
    let mut at = from;
    loop {
        let first = find_from(s, close, at)?;
        let gap = first + close.len();
        let rest = &s[gap..];
        let trimmed = rest.trim_start();
        if trimmed.starts_with(close) {
            let ws = rest.len() - trimmed.len();
            return Some(gap + ws + close.len());
        }
        at = gap;
    }
}

/// End index (just past `>`) of the first `open` tag at or after `from`,
/// attributes allowed.
pub fn open_tag_end(s: &str, open: &str, from: usize) -> Option<usize> {
    let start = find_from(s, open, from)?;
    let gt = find_from(s, ">", start)?;
    Some(gt + 1)
}
