pub mod boyer_moore;
pub mod brute;
pub mod horspool;

use crate::error::StriderError;
use crate::types::Algorithm;

pub use horspool::ShiftTable;

/// Observer a matcher reports scan progress to. Purely diagnostic: matchers
/// call it, never read from it, so an implementation cannot change the
/// outcome. All hooks default to no-ops and `()` is the silent trace, so
/// untraced searches pay nothing.
///
/// `&mut self` because useful traces accumulate (step logs, counters).
pub trait Trace {
    /// An alignment of the pattern at text position `start` is about to be
    /// compared.
    fn alignment(&mut self, start: usize) {
        let _ = start;
    }

    /// The alignment at `start` failed, and `bad_at` is the absolute text
    /// index whose symbol decides the next shift. Boyer-Moore reports the
    /// mismatch position itself; Horspool always reports the text index under
    /// the last pattern position.
    fn mismatch(&mut self, start: usize, bad_at: usize) {
        let _ = (start, bad_at);
    }

    /// Horspool built its shift table. Emitted once, before the first
    /// alignment.
    fn shift_table(&mut self, pattern: &[u8], table: &ShiftTable) {
        let _ = (pattern, table);
    }

    /// Every pattern position matched at `start`.
    fn matched(&mut self, start: usize) {
        let _ = start;
    }
}

/// The silent trace.
impl Trace for () {}

/// Fan one scan out to two traces — e.g. a step renderer plus counters.
impl<A: Trace, B: Trace> Trace for (A, B) {
    fn alignment(&mut self, start: usize) {
        self.0.alignment(start);
        self.1.alignment(start);
    }

    fn mismatch(&mut self, start: usize, bad_at: usize) {
        self.0.mismatch(start, bad_at);
        self.1.mismatch(start, bad_at);
    }

    fn shift_table(&mut self, pattern: &[u8], table: &ShiftTable) {
        self.0.shift_table(pattern, table);
        self.1.shift_table(pattern, table);
    }

    fn matched(&mut self, start: usize) {
        self.0.matched(start);
        self.1.matched(start);
    }
}

/// Run the selected matcher. The single entry point the front end uses.
pub fn find(
    algorithm: Algorithm,
    text: &[u8],
    pattern: &[u8],
) -> Result<Option<usize>, StriderError> {
    find_traced(algorithm, text, pattern, &mut ())
}

/// Run the selected matcher, reporting progress to `trace`.
pub fn find_traced(
    algorithm: Algorithm,
    text: &[u8],
    pattern: &[u8],
    trace: &mut impl Trace,
) -> Result<Option<usize>, StriderError> {
    match algorithm {
        Algorithm::BruteForce => brute::find_traced(text, pattern, trace),
        Algorithm::BoyerMoore => boyer_moore::find_traced(text, pattern, trace),
        Algorithm::Horspool => horspool::find_traced(text, pattern, trace),
    }
}

/// Shared precondition check, identical for all three matchers: a search is
/// only attempted when at least one alignment fits. Runs before any
/// comparison so an impossible pattern is never conflated with not-found.
pub(crate) fn validate(text: &[u8], pattern: &[u8]) -> Result<(), StriderError> {
    if pattern.is_empty() {
        return Err(StriderError::EmptyPattern);
    }
    if pattern.len() > text.len() {
        return Err(StriderError::PatternTooLong {
            pattern: pattern.len(),
            text: text.len(),
        });
    }
    Ok(())
}

/// Compare the pattern against the text window at `start`, right to left.
/// Returns the highest pattern index that mismatches, or `None` when every
/// position matches. Shared by Boyer-Moore and Horspool — only their shift
/// rules differ.
pub(crate) fn rightmost_mismatch(text: &[u8], pattern: &[u8], start: usize) -> Option<usize> {
    (0..pattern.len())
        .rev()
        .find(|&j| pattern[j] != text[start + j])
}
