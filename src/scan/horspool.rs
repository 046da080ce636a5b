use crate::error::StriderError;

use super::{Trace, rightmost_mismatch, validate};

/// Symbols are bytes, so the table covers the full 8-bit range and lookup is
/// a direct index — dense array, no hashing.
pub const ALPHABET: usize = 256;

/// Per-symbol shift distances for one pattern: Horspool's simplification of
/// Boyer-Moore, trading the per-mismatch occurrence search for a table built
/// once before scanning.
///
/// Every entry is ≥ 1 (the scan always advances). A symbol absent from the
/// pattern — or occurring only at its last position — shifts by the full
/// pattern length; any other symbol shifts so its last occurrence before the
/// final position lines up with the text symbol it was keyed on.
pub struct ShiftTable {
    shifts: [usize; ALPHABET],
}

impl ShiftTable {
    /// Build the table for `pattern`. Positions are visited in increasing
    /// order so later writes overwrite earlier ones: the occurrence closest
    /// to the end wins and sets the smallest safe shift. The final position
    /// is excluded, since keying on it would produce a shift of 0 and stall
    /// the scan.
    ///
    /// The pattern must be non-empty; the matchers validate before building.
    #[must_use]
    pub fn build(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let mut shifts = [m; ALPHABET];
        for (p, &symbol) in pattern[..m - 1].iter().enumerate() {
            shifts[usize::from(symbol)] = m - p - 1;
        }
        Self { shifts }
    }

    /// Shift distance for the text symbol aligned with the last pattern
    /// position.
    #[must_use]
    pub fn shift(&self, symbol: u8) -> usize {
        self.shifts[usize::from(symbol)]
    }
}

/// First occurrence of `pattern` in `text` by Boyer-Moore-Horspool.
/// Comparison is right to left as in Boyer-Moore; the shift is an O(1)
/// lookup keyed by the text symbol under the LAST pattern position, no
/// matter where the mismatch happened. Worst case O(n·m), typically
/// sub-linear: over a large alphabet most lookups hit the full-length shift.
pub fn find(text: &[u8], pattern: &[u8]) -> Result<Option<usize>, StriderError> {
    find_traced(text, pattern, &mut ())
}

/// [`find`], reporting the table and each alignment to `trace`.
pub fn find_traced(
    text: &[u8],
    pattern: &[u8],
    trace: &mut impl Trace,
) -> Result<Option<usize>, StriderError> {
    validate(text, pattern)?;

    let table = ShiftTable::build(pattern);
    trace.shift_table(pattern, &table);

    let last = pattern.len() - 1;
    let mut start = 0;
    while start <= text.len() - pattern.len() {
        trace.alignment(start);

        if rightmost_mismatch(text, pattern, start).is_none() {
            trace.matched(start);
            return Ok(Some(start));
        }
        trace.mismatch(start, start + last);

        start += table.shift(text[start + last]);
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_symbols_shift_the_full_pattern_length() {
        let table = ShiftTable::build(b"abra");
        assert_eq!(table.shift(b'z'), 4);
        assert_eq!(table.shift(0), 4);
        assert_eq!(table.shift(0xFF), 4);
    }

    #[test]
    fn last_position_does_not_define_a_shift() {
        // 'a' occurs at 0 and 3 in "abra", but index 3 is the final
        // position and excluded — index 0 decides: 4 - 0 - 1 = 3.
        let table = ShiftTable::build(b"abra");
        assert_eq!(table.shift(b'a'), 3);
        assert_eq!(table.shift(b'b'), 2);
        assert_eq!(table.shift(b'r'), 1);
    }

    #[test]
    fn repeated_symbols_keep_the_latest_occurrence() {
        // "GCAGAGAG": G at 0, 3, 5 and 7 — index 7 is excluded, index 5
        // wins: 8 - 5 - 1 = 1. A at 2, 4, 6 — index 6 wins: 8 - 6 - 1 = 1.
        let table = ShiftTable::build(b"GCAGAGAG");
        assert_eq!(table.shift(b'G'), 1);
        assert_eq!(table.shift(b'A'), 1);
        assert_eq!(table.shift(b'C'), 6);
        assert_eq!(table.shift(b'T'), 8);
    }

    #[test]
    fn single_symbol_pattern_always_shifts_one() {
        let table = ShiftTable::build(b"x");
        for symbol in 0..=u8::MAX {
            assert_eq!(table.shift(symbol), 1);
        }
    }

    #[test]
    fn finds_first_occurrence() {
        assert_eq!(find(b"abracadabra", b"abra").unwrap(), Some(0));
        assert_eq!(find(b"abracadabra", b"cad").unwrap(), Some(4));
        assert_eq!(find(b"aaaaaa", b"aaa").unwrap(), Some(0));
        assert_eq!(find(b"hello world", b"xyz").unwrap(), None);
    }
}
