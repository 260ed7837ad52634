// src/core/sanitize.rs

/// Characters that cannot appear in a filename on at least one platform.
pub const FORBIDDEN: [char; 9] = ['<', '>', ':', '"', '/', '\\', '?', '*', '|'];

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
}

/// Layout and typographic characters folded to plain ASCII.
fn fold_char(ch: char) -> char {
    match ch {
        '\n' | '\t' | '\r' | '\u{a0}' | '¶' | '▲' => ' ',
        '—' => '-',
        '‘' | '’' => '\'',
        '“' | '”' => '"',
        _ => ch,
    }
}

/// Make scraped text safe to embed in a filename.
///
/// Folds whitespace/typography, replaces [`FORBIDDEN`] with `_`, collapses
/// space runs and trims. Idempotent.
pub fn normalize_text(s: &str) -> String {
    let folded: String = normalize_entities(s)
        .chars()
        .map(fold_char)
        .map(|ch| if FORBIDDEN.contains(&ch) { '_' } else { ch })
        .collect();
    collapse_spaces(&folded).trim().to_string()
}

/// Repeated pass so odd-length runs collapse fully.
pub fn collapse_spaces(s: &str) -> String {
    let mut out = s.to_string();
    while out.contains("  ") {
        out = out.replace("  ", " ");
    }
    out
}

/// Normalize and drop the result if nothing is left.
pub fn non_empty(s: &str) -> Option<String> {
    let n = normalize_text(s);
    if n.is_empty() { None } else { Some(n) }
}

/// Publication kind: the part of the info blob before the first `|`.
pub fn doc_type(info: &str) -> String {
    let head = info.split('|').next().unwrap_or(info);
    normalize_text(head)
}
