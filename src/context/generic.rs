use crate::{
    config::Config,
    reports::Report,
    structures::{formula::Formula, interpretation::Interpretation, node::Node},
};

use super::{ContextState, Counters};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// # Example
///
/// ```rust
/// # use otter_monadic::context::GenericContext;
/// # use otter_monadic::generic::random::SplitMix64;
/// # use otter_monadic::config::Config;
/// # use rand::SeedableRng;
/// let context = GenericContext::<SplitMix64>::from_config_and_rng(
///     Config::default(),
///     SplitMix64::from_seed(2_u64.to_le_bytes()),
/// );
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/decision.
    pub counters: Counters,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// The syntax tree of the formula read, if some formula has been read.
    pub(crate) syntax_tree: Option<Node>,

    /// The (checked) formula read, if some formula has been read.
    pub(crate) formula: Option<Formula>,

    /// The counterexample found by the last decision, if the formula is not a theorem.
    pub(crate) counterexample: Option<Interpretation>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A context from some given configuration and source of rng.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            state: ContextState::Configuration,
            rng,

            syntax_tree: None,
            formula: None,
            counterexample: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The syntax tree of the formula read, if some formula has been read.
    pub fn syntax_tree(&self) -> Option<&Node> {
        self.syntax_tree.as_ref()
    }

    /// The formula read, if some formula has been read.
    pub fn formula(&self) -> Option<&Formula> {
        self.formula.as_ref()
    }

    /// The interpretation on which the formula read is false, if the formula has been found not to be a theorem.
    pub fn counterexample(&self) -> Option<&Interpretation> {
        self.counterexample.as_ref()
    }
}
