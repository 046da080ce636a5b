use crate::error::StriderError;

use super::{Trace, validate};

/// First occurrence of `pattern` in `text` by brute force: try every
/// alignment left to right, compare left to right, shift by exactly one on
/// mismatch. Worst case O(n·m) comparisons, no preprocessing — the baseline
/// the shift-based matchers are measured against.
pub fn find(text: &[u8], pattern: &[u8]) -> Result<Option<usize>, StriderError> {
    find_traced(text, pattern, &mut ())
}

/// [`find`], reporting each alignment to `trace`.
pub fn find_traced(
    text: &[u8],
    pattern: &[u8],
    trace: &mut impl Trace,
) -> Result<Option<usize>, StriderError> {
    validate(text, pattern)?;

    for start in 0..=text.len() - pattern.len() {
        trace.alignment(start);

        let mut j = 0;
        while j < pattern.len() && pattern[j] == text[start + j] {
            j += 1;
        }
        if j == pattern.len() {
            trace.matched(start);
            return Ok(Some(start));
        }
        // Mismatch at pattern index j; the next loop turn shifts by one.
        trace.mismatch(start, start + j);
    }

    Ok(None)
}
