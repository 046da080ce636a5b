use std::fmt::Write;

use colored::Colorize;

use crate::scan::{ShiftTable, Trace};

/// Step-by-step rendering of a scan: for every alignment, the text with the
/// compared window highlighted, the pattern indented underneath, and a caret
/// marking the symbol the next shift is computed from. Lossy UTF-8 display —
/// the matchers themselves only ever see bytes.
///
/// Collects into a buffer rather than printing, so the front end decides
/// where it goes and tests can assert on it.
pub struct StepTrace<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
    out: String,
}

impl<'a> StepTrace<'a> {
    #[must_use]
    pub fn new(text: &'a [u8], pattern: &'a [u8]) -> Self {
        Self {
            text,
            pattern,
            out: String::new(),
        }
    }

    /// The rendered steps.
    #[must_use]
    pub fn into_output(self) -> String {
        self.out
    }

    fn text_with_window(&self, start: usize) -> String {
        let end = start + self.pattern.len();
        let before = String::from_utf8_lossy(&self.text[..start]);
        let window = String::from_utf8_lossy(&self.text[start..end]);
        let after = String::from_utf8_lossy(&self.text[end..]);
        format!("{before}{}{after}", window.yellow())
    }
}

impl Trace for StepTrace<'_> {
    fn alignment(&mut self, start: usize) {
        let _ = writeln!(self.out, "{}", self.text_with_window(start));
        let _ = writeln!(
            self.out,
            "{:indent$}{}",
            "",
            String::from_utf8_lossy(self.pattern),
            indent = start
        );
    }

    fn mismatch(&mut self, _start: usize, bad_at: usize) {
        let _ = writeln!(self.out, "{:indent$}{}", "", "^".red(), indent = bad_at);
    }

    fn shift_table(&mut self, pattern: &[u8], table: &ShiftTable) {
        // One entry per distinct pattern symbol, in order of first
        // appearance — the rest of the alphabet shifts the full length.
        let mut seen = [false; crate::scan::horspool::ALPHABET];
        for &symbol in pattern {
            if !seen[usize::from(symbol)] {
                seen[usize::from(symbol)] = true;
                let _ = write!(self.out, "{}={} ", char::from(symbol), table.shift(symbol));
            }
        }
        let _ = writeln!(self.out);
    }

    fn matched(&mut self, start: usize) {
        let end = start + self.pattern.len();
        let before = String::from_utf8_lossy(&self.text[..start]);
        let window = String::from_utf8_lossy(&self.text[start..end]);
        let after = String::from_utf8_lossy(&self.text[end..]);
        let _ = writeln!(self.out, "{before}{}{after}", window.green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan;

    #[test]
    fn renders_each_alignment_and_the_match() {
        colored::control::set_override(false);
        let mut trace = StepTrace::new(b"abracadabra", b"cad");
        let found = scan::horspool::find_traced(b"abracadabra", b"cad", &mut trace).unwrap();
        assert_eq!(found, Some(4));

        let out = trace.into_output();
        // Table line for the pattern symbols, then at least one alignment.
        assert!(out.contains("c=2"), "table line missing:\n{out}");
        assert!(out.contains("abracadabra"), "text line missing:\n{out}");
        // The pattern appears indented under its final alignment.
        assert!(out.contains("    cad"), "aligned pattern missing:\n{out}");
        colored::control::unset_override();
    }

    #[test]
    fn caret_marks_the_shift_symbol() {
        colored::control::set_override(false);
        let mut trace = StepTrace::new(b"xxxxy", b"xy");
        let _ = scan::boyer_moore::find_traced(b"xxxxy", b"xy", &mut trace).unwrap();
        let out = trace.into_output();
        assert!(out.contains('^'), "caret missing:\n{out}");
        colored::control::unset_override();
    }
}
