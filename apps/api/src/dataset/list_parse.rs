//! Splitting of list-valued spreadsheet cells.
//!
//! Enjoyments, strengths and career paths arrive as free text with whatever
//! delimiter the author of that row preferred. Candidate delimiters are tried
//! in priority order; the first one present in the text wins.

/// Delimiters in priority order: real newline, `//`, a literal backslash-n
/// (text pasted from sources where the escape was never interpreted),
/// semicolon, comma, bullet.
const DELIMITERS: &[&str] = &["\n", "//", "\\n", ";", ",", "•"];

/// Splits a cell into trimmed, non-empty items. A cell with no known
/// delimiter becomes a single-element list; an empty or whitespace cell
/// becomes an empty list.
pub fn parse_list(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    for delimiter in DELIMITERS {
        if text.contains(delimiter) {
            let items: Vec<String> = text
                .split(delimiter)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect();
            if !items.is_empty() {
                return items;
            }
        }
    }

    vec![text.trim().to_string()]
}
