use crate::{config::Config, generic::random::SplitMix64};

use rand::SeedableRng;

use super::GenericContext;

/// A context which uses [SplitMix64] as a source of randomness.
pub type Context = GenericContext<SplitMix64>;

impl Context {
    /// Creates a context from some given configuration, with rng seeded by the configuration.
    pub fn from_config(config: Config) -> Self {
        let rng = SplitMix64::from_seed(config.seed.value.to_le_bytes());
        Self::from_config_and_rng(config, rng)
    }
}
