//! Random number generation for statline rolls
//!
//! Uses a seeded ChaCha RNG so that a demon or ghost can be regenerated
//! from the same seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::data::Colour;

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Note: RNG state is not serialized - a restored RNG restarts from its seed.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `0..n`.
    ///
    /// Returns 0 if n is 0 or negative.
    pub fn rn2(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform integer in `low..=high`.
    pub fn random_range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    /// Sum of `count` dice with `sides` faces each (1..=sides per die)
    pub fn roll_dice(&mut self, count: i32, sides: i32) -> i32 {
        if sides <= 0 {
            return 0;
        }
        (0..count.max(0)).map(|_| 1 + self.rn2(sides)).sum()
    }

    /// Returns true with probability 1/n
    pub fn one_in(&mut self, n: i32) -> bool {
        self.rn2(n) == 0
    }

    /// Returns true with probability x/y
    pub fn x_in_y(&mut self, x: i32, y: i32) -> bool {
        self.rn2(y) < x
    }

    /// Fair coin
    pub fn coinflip(&mut self) -> bool {
        self.rn2(2) == 0
    }

    /// Raw 32-bit value, used to seed name generation
    pub fn random_u32(&mut self) -> u32 {
        self.rng.gen_range(0..=u32::MAX)
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as i32) as usize])
        }
    }

    /// Any colour except black, uniformly
    pub fn random_colour(&mut self) -> Colour {
        Colour::from_index(1 + self.rn2(15) as u8)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
