//! A simple pseudorandom number generator.
//!
//! Specifically, SplitMix64 as given by Steele, Lea, and Flood in [Fast splittable pseudorandom number generators](https://doi.org/10.1145/2714064.2660195), implemented to satisfy the [RngCore] trait.
//!
//! Each [context](crate::context) stores a source of rng, used to shuffle interpretations when [configured](crate::config::InterpretationOrder) to do so.
//! The context is paramaterised to anything which satisfies the [Rng](rand::Rng) trait, though to keep the rest of the library straightforward the rng is fixed in the [context](crate::context) as [SplitMix64].

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State of the generator.
#[derive(Default)]
pub struct SplitMix64 {
    state: u64,
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);

        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed),
        }
    }
}

#[cfg(test)]
mod splitmix_tests {
    use super::*;

    #[test]
    fn zero_seed() {
        let mut zero_seed = SplitMix64::from_seed(0u64.to_le_bytes());
        assert_eq!(zero_seed.next_u64(), 16294208416658607535);
        assert_eq!(zero_seed.next_u64(), 7960286522194355700);
        assert_eq!(zero_seed.next_u64(), 487617019471545679);
        assert_eq!(zero_seed.next_u64(), 17909611376780542444);
    }

    #[test]
    fn seven_seed() {
        let mut seven_seed = SplitMix64::from_seed(7u64.to_le_bytes());
        assert_eq!(seven_seed.next_u64(), 7191089600892374487);
        assert_eq!(seven_seed.next_u64(), 309689372594955804);
    }

    #[test]
    fn high_bits() {
        let mut zero_seed = SplitMix64::from_seed(0u64.to_le_bytes());
        assert_eq!(zero_seed.next_u32(), 3793791033);
        assert_eq!(zero_seed.next_u32(), 1853398634);
    }
}
