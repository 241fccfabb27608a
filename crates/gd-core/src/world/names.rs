//! Name generation and validation
//!
//! Demon lords get a random pronounceable name; player ghosts keep the
//! player's name. Both must pass the player name rules.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::consts::NAME_LEN;

/// Produces a display name from a seed
pub trait NameGenerator {
    fn make_name(&self, seed: u32) -> String;
}

/// Syllable-based demon names ("Xogrimax", "Urathel").
///
/// The same seed always yields the same name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyllableNames;

const ONSETS: &[&str] = &[
    "b", "d", "g", "k", "l", "m", "n", "r", "s", "t", "v", "x", "z", "th", "gr", "kr", "sh", "zh",
    "dr", "vr",
];
const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "y", "ae", "ou", "ai"];
const CODAS: &[&str] = &["", "", "", "n", "r", "s", "x", "th", "l", "m", "g"];

impl NameGenerator for SyllableNames {
    fn make_name(&self, seed: u32) -> String {
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));
        let syllables = rng.gen_range(2..=4);
        let mut name = String::new();

        for _ in 0..syllables {
            name.push_str(pick(&mut rng, ONSETS));
            name.push_str(pick(&mut rng, VOWELS));
        }
        name.push_str(pick(&mut rng, CODAS));
        name.truncate(NAME_LEN - 1);

        capitalize(&name)
    }
}

fn pick<'a>(rng: &mut ChaCha8Rng, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Player name character rules: letters, digits, `-`, `.`, `_` and space.
pub fn validate_player_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_deterministic() {
        let names = SyllableNames;
        assert_eq!(names.make_name(1234), names.make_name(1234));
    }

    #[test]
    fn test_generated_names_are_valid() {
        let names = SyllableNames;
        for seed in 0..2000 {
            let name = names.make_name(seed);
            assert!(!name.is_empty());
            assert!(name.len() < NAME_LEN);
            assert!(validate_player_name(&name), "bad name {name:?}");
            assert_eq!(name, name.trim());
            assert!(name.chars().next().unwrap().is_ascii_uppercase());
        }
    }

    #[test]
    fn test_validate_player_name() {
        assert!(validate_player_name("Sir Robin"));
        assert!(validate_player_name("x-y_z.0"));
        assert!(!validate_player_name("bad/name"));
        assert!(!validate_player_name("tab\there"));
        assert!(!validate_player_name("émile"));
    }
}
