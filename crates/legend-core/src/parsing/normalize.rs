use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Remove byte ranges from `text`. Ranges may come in any order and may
/// overlap; they must lie on char boundaries.
pub fn remove_spans(text: &str, spans: &[Range<usize>]) -> String {
    let mut sorted: Vec<&Range<usize>> = spans.iter().filter(|r| !r.is_empty()).collect();
    sorted.sort_by_key(|r| r.start);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in sorted {
        if span.end > text.len() {
            continue;
        }
        if span.start > cursor {
            out.push_str(&text[cursor..span.start]);
        }
        cursor = cursor.max(span.end);
    }
    out.push_str(&text[cursor..]);
    out
}

/// Collapse runs of two or more whitespace characters to one space and trim.
pub fn collapse_whitespace(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw, " ").trim().to_string()
}

/// Normalize a plant name left over after size/dimension removal.
///
/// Steps:
/// 1. Collapse runs of two or more whitespace characters to one space
/// 2. Trim
/// 3. Replace '-' with '—'
pub fn normalize_name(raw: &str) -> String {
    collapse_whitespace(raw).replace('-', "—")
}
