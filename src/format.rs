use colored::Colorize;

use crate::types::{Algorithm, ScanStats};

/// 1-indexed (line, column) of a byte offset. One pass over the prefix with
/// `memchr` — no line table is built.
#[must_use]
pub fn line_col(text: &[u8], offset: usize) -> (usize, usize) {
    let line = memchr::memchr_iter(b'\n', &text[..offset]).count() + 1;
    let line_start = memchr::memrchr(b'\n', &text[..offset]).map_or(0, |nl| nl + 1);
    (line, offset - line_start + 1)
}

/// Result summary: position (with line/column for multi-line texts), method
/// and scan effort.
#[must_use]
pub fn result_line(
    text: &[u8],
    found: Option<usize>,
    method: Algorithm,
    stats: ScanStats,
) -> String {
    let effort = match stats.alignments {
        1 => "1 alignment".to_string(),
        n => format!("{n} alignments"),
    };
    match found {
        Some(pos) => {
            let place = if memchr::memchr(b'\n', text).is_some() {
                let (line, col) = line_col(text, pos);
                format!("byte {pos}, line {line}, col {col}")
            } else {
                format!("position {pos}")
            };
            format!("found at {place} [{method}, {effort}]")
        }
        None => format!("not found [{method}, {effort}]"),
    }
}

/// The line containing the match, with the matched span highlighted. A span
/// crossing a newline is clamped to the first line.
#[must_use]
pub fn highlight(text: &[u8], pos: usize, len: usize) -> String {
    let line_start = memchr::memrchr(b'\n', &text[..pos]).map_or(0, |nl| nl + 1);
    let line_end = memchr::memchr(b'\n', &text[pos..]).map_or(text.len(), |nl| pos + nl);

    let before = String::from_utf8_lossy(&text[line_start..pos]);
    let matched = String::from_utf8_lossy(&text[pos..(pos + len).min(line_end)]);
    let after = String::from_utf8_lossy(&text[(pos + len).min(line_end)..line_end]);

    format!("{before}{}{after}", matched.green().bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_col_is_one_indexed() {
        assert_eq!(line_col(b"abc", 0), (1, 1));
        assert_eq!(line_col(b"abc", 2), (1, 3));
    }

    #[test]
    fn line_col_counts_newlines() {
        let text = b"first\nsecond\nthird";
        assert_eq!(line_col(text, 6), (2, 1)); // 's' of "second"
        assert_eq!(line_col(text, 13), (3, 1)); // 't' of "third"
        assert_eq!(line_col(text, 15), (3, 3));
    }

    #[test]
    fn single_line_result_uses_plain_position() {
        let line = result_line(b"abracadabra", Some(4), Algorithm::BoyerMoore, ScanStats::default());
        assert!(line.contains("position 4"), "got: {line}");
        assert!(line.contains("boyer-moore"), "got: {line}");
    }

    #[test]
    fn multi_line_result_reports_line_and_col() {
        let line = result_line(b"one\ntwo cad", Some(8), Algorithm::Horspool, ScanStats::default());
        assert!(line.contains("byte 8"), "got: {line}");
        assert!(line.contains("line 2"), "got: {line}");
        assert!(line.contains("col 5"), "got: {line}");
    }

    #[test]
    fn highlight_extracts_the_matching_line() {
        colored::control::set_override(false);
        let out = highlight(b"one\ntwo cad tail\nthree", 8, 3);
        assert_eq!(out, "two cad tail");
        colored::control::unset_override();
    }
}
