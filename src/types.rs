use std::str::FromStr;

use serde::Serialize;

use crate::scan::Trace;

/// Which matcher to run, carried through the type system so downstream code
/// never re-parses method names. Adding an algorithm means adding an arm here
/// and the compiler tells you everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Left-to-right scan, shift of 1 on mismatch. No preprocessing.
    BruteForce,
    /// Right-to-left comparison, bad-character shift recomputed per mismatch.
    BoyerMoore,
    /// Right-to-left comparison, shift from a per-pattern table.
    Horspool,
}

impl Algorithm {
    /// All matchers, in cost-of-preprocessing order. Useful for
    /// cross-checking one result against the other two.
    pub const ALL: [Self; 3] = [Self::BruteForce, Self::BoyerMoore, Self::Horspool];
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bf" | "brute" | "brute-force" => Ok(Self::BruteForce),
            "bm" | "boyer-moore" => Ok(Self::BoyerMoore),
            "bmh" | "horspool" | "boyer-moore-horspool" => Ok(Self::Horspool),
            _ => Err(format!("unknown method \"{s}\" (try bf, bm or bmh)")),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BruteForce => write!(f, "brute-force"),
            Self::BoyerMoore => write!(f, "boyer-moore"),
            Self::Horspool => write!(f, "horspool"),
        }
    }
}

/// Scan effort counters, collected through the trace hook. The CLI summary
/// line uses these; tests use them to check that shifts always advance.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct ScanStats {
    /// Alignments attempted, including the one that matched.
    pub alignments: usize,
    /// Alignments abandoned on a mismatched symbol.
    pub mismatches: usize,
}

impl Trace for ScanStats {
    fn alignment(&mut self, _start: usize) {
        self.alignments += 1;
    }

    fn mismatch(&mut self, _start: usize, _bad_at: usize) {
        self.mismatches += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_parse() {
        assert_eq!("bf".parse(), Ok(Algorithm::BruteForce));
        assert_eq!("brute-force".parse(), Ok(Algorithm::BruteForce));
        assert_eq!("bm".parse(), Ok(Algorithm::BoyerMoore));
        assert_eq!("BMH".parse(), Ok(Algorithm::Horspool));
        assert_eq!("horspool".parse(), Ok(Algorithm::Horspool));
        assert!("kmp".parse::<Algorithm>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for method in Algorithm::ALL {
            assert_eq!(method.to_string().parse(), Ok(method));
        }
    }
}
