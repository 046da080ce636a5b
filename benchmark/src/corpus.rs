use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One benchmark workload: a text plus a mixed bag of patterns over it.
pub struct Corpus {
    pub name: &'static str,
    pub text: Vec<u8>,
    pub patterns: Vec<Vec<u8>>,
}

/// The three alphabet regimes the matchers behave differently under:
/// dense (DNA, 4 symbols — shifts stay small), natural text (space-separated
/// words) and full-range bytes (most shifts are maximal).
pub fn all(size: usize, seed: u64) -> Vec<Corpus> {
    vec![
        dna(size, seed),
        words(size, seed ^ 0xD1CE),
        binary(size, seed ^ 0xBEEF),
    ]
}

fn dna(size: usize, seed: u64) -> Corpus {
    let mut rng = StdRng::seed_from_u64(seed);
    let text: Vec<u8> = (0..size).map(|_| b"ACGT"[rng.gen_range(0..4)]).collect();
    let patterns = plant_patterns(&text, &mut rng, &[4, 8, 16]);
    Corpus {
        name: "dna",
        text,
        patterns,
    }
}

fn words(size: usize, seed: u64) -> Corpus {
    const WORDS: &[&str] = &[
        "the", "pattern", "shifts", "right", "until", "its", "symbols", "line", "up", "with",
        "text", "scan", "match", "table", "window",
    ];
    let mut rng = StdRng::seed_from_u64(seed);
    let mut text = Vec::with_capacity(size);
    while text.len() < size {
        text.extend_from_slice(WORDS[rng.gen_range(0..WORDS.len())].as_bytes());
        text.push(b' ');
    }
    text.truncate(size);
    let patterns = plant_patterns(&text, &mut rng, &[3, 7, 24]);
    Corpus {
        name: "words",
        text,
        patterns,
    }
}

fn binary(size: usize, seed: u64) -> Corpus {
    let mut rng = StdRng::seed_from_u64(seed);
    let text: Vec<u8> = (0..size).map(|_| rng.r#gen()).collect();
    let patterns = plant_patterns(&text, &mut rng, &[4, 16, 64]);
    Corpus {
        name: "binary",
        text,
        patterns,
    }
}

/// For each length: one pattern copied out of the text (guaranteed hit, at a
/// random spot) and one with its last symbol flipped (usually a miss that
/// still almost-matches, the expensive case for right-to-left scans).
fn plant_patterns(text: &[u8], rng: &mut StdRng, lengths: &[usize]) -> Vec<Vec<u8>> {
    let mut patterns = Vec::new();
    for &len in lengths.iter().filter(|&&len| len < text.len()) {
        let at = rng.gen_range(0..=text.len() - len);
        let planted = text[at..at + len].to_vec();

        let mut flipped = planted.clone();
        flipped[len - 1] ^= 0x01;

        patterns.push(planted);
        patterns.push(flipped);
    }
    patterns
}
