use crate::error::StriderError;

use super::{Trace, rightmost_mismatch, validate};

/// First occurrence of `pattern` in `text` by Boyer-Moore with the
/// bad-character (occurrence) heuristic. Comparing right to left means one
/// mismatched symbol can rule out several alignments at once: the pattern
/// advances until the mismatched text symbol lines up with its nearest
/// occurrence further left in the pattern, or past the mismatch entirely
/// when there is none.
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

    let mut start = 0;
    while start <= text.len() - pattern.len() {
        trace.alignment(start);

        let Some(j) = rightmost_mismatch(text, pattern, start) else {
            trace.matched(start);
            return Ok(Some(start));
        };
        trace.mismatch(start, start + j);

        start += bad_character_shift(pattern, j, text[start + j]);
    }

    Ok(None)
}

/// How far the pattern may advance after `bad` mismatched at pattern index
/// `j`: to the highest occurrence of `bad` strictly left of `j`, or one past
/// the mismatch position when `bad` does not occur there. Always ≥ 1, so the
/// scan cannot stall.
fn bad_character_shift(pattern: &[u8], j: usize, bad: u8) -> usize {
    match memchr::memrchr(bad, &pattern[..j]) {
        Some(k) => j - k,
        None => j + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_aligns_nearest_occurrence_to_the_left() {
        // Mismatch at index 3; 'a' last occurs at index 0 → shift 3.
        assert_eq!(bad_character_shift(b"abcd", 3, b'a'), 3);
        // 'c' occurs at index 2, immediately left of the mismatch → shift 1.
        assert_eq!(bad_character_shift(b"abcd", 3, b'c'), 1);
    }

    #[test]
    fn shift_is_maximal_for_absent_symbol() {
        // 'z' is nowhere in the left portion → skip the mismatch position.
        assert_eq!(bad_character_shift(b"abcd", 3, b'z'), 4);
        // Mismatch at index 0 has an empty left portion → plain shift of 1.
        assert_eq!(bad_character_shift(b"abcd", 0, b'a'), 1);
    }

    #[test]
    fn occurrences_at_or_right_of_mismatch_are_ignored() {
        // 'd' only occurs at index 3, not strictly left of it.
        assert_eq!(bad_character_shift(b"abcd", 3, b'd'), 4);
    }

    #[test]
    fn finds_first_occurrence() {
        assert_eq!(find(b"abracadabra", b"abra").unwrap(), Some(0));
        assert_eq!(find(b"abracadabra", b"cad").unwrap(), Some(4));
        assert_eq!(find(b"hello world", b"xyz").unwrap(), None);
    }
}
