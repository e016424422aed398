// 🎲 Sample TIN generation - demo data for the CLI
// Picks a prefix/length shape at random and pads with random digits.

use rand::Rng;

/// Valid prefix/length shapes the generator draws from. Matches the format
/// rules: IG has 12 characters, every other prefix has 11.
const SAMPLE_SHAPES: [(&str, usize); 7] = [
    ("IG", 12),
    ("C", 11),
    ("D", 11),
    ("E", 11),
    ("F", 11),
    ("SG", 11),
    ("OG", 11),
];

/// Generate one random TIN that classifies as valid.
pub fn random_tin<R: Rng>(rng: &mut R) -> String {
    let (prefix, length) = SAMPLE_SHAPES[rng.gen_range(0..SAMPLE_SHAPES.len())];

    let mut tin = String::with_capacity(length);
    tin.push_str(prefix);
    while tin.len() < length {
        tin.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }

    tin
}

// ============================================================================
// TESTS
// ============================================================================
