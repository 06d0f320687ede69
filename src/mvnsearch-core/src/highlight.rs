//! Helpers for highlighted fragments.
//!
//! Markers are matched as literal strings. Nested or unbalanced markers are
//! not repaired.

/// Opening emphasis marker used by the service
pub const EM_OPEN: &str = "<em>";
/// Closing emphasis marker used by the service
pub const EM_CLOSE: &str = "</em>";

/// Remove every emphasis marker from a fragment
pub fn strip_emphasis(fragment: &str) -> String {
    fragment.replace(EM_OPEN, "").replace(EM_CLOSE, "")
}

/// Text enclosed by each `<em>`...`</em>` pair, left to right.
/// An opening marker with no closing marker after it yields nothing.
pub fn emphasized_terms(fragment: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let mut rest = fragment;

    while let Some(open) = rest.find(EM_OPEN) {
        let after_open = &rest[open + EM_OPEN.len()..];
        match after_open.find(EM_CLOSE) {
            Some(close) => {
                terms.push(&after_open[..close]);
                rest = &after_open[close + EM_CLOSE.len()..];
            }
            None => break,
        }
    }

    terms
}
