//! Decides whether the formula of a context is a theorem.
//!
//! # Overview
//!
//! A formula is a theorem exactly when it is true on every [generated](crate::procedures::generate) interpretation.
//! So, the decision is a search through the generated interpretations for a counterexample, stopping at the first found.
//!
//! Interpretations are examined in the order given by the [configuration](crate::config::InterpretationOrder):
//! - In canonical order, interpretations are generated as needed.
//! - In shuffled order, every interpretation is generated and the collection shuffled by the rng of the context before any is examined.
//!
//! The verdict does not depend on the order, though the counterexample found (if any) may.
//!
//! # Example
//!
//! ```rust
//! # use otter_monadic::config::Config;
//! # use otter_monadic::context::Context;
//! # use otter_monadic::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.read_formula("(@x(Px>Qx) * @x(Qx>Rx)) > @x(Px>Rx)").is_ok());
//! assert!(the_context.decide().is_ok_and(|verdict| verdict.is_theorem()));
//!
//! assert_eq!(the_context.report(), Report::Theorem);
//! assert_eq!(the_context.counters.interpretations, 255);
//! ```
//!
//! Or, without a context:
//!
//! ```rust
//! # use otter_monadic::procedures::decide::decide;
//! let verdict = decide("Px * -Px").unwrap();
//! let counterexample = verdict.counterexample().unwrap();
//!
//! assert_eq!(counterexample.size(), 1);
//! ```

use rand::seq::SliceRandom;

use crate::{
    config::{Config, InterpretationOrder},
    context::{Context, ContextState, GenericContext},
    misc::log::targets::{self},
    procedures::{evaluate::evaluate, generate::Interpretations},
    reports::Verdict,
    structures::{formula::Formula, interpretation::Interpretation},
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Decides whether the formula read into the context is a theorem.
    ///
    /// On a counterexample the context notes the counterexample, which is also returned as part of the verdict.
    pub fn decide(&mut self) -> Result<Verdict, err::ErrorKind> {
        let total_time = std::time::Instant::now();

        let formula = match &self.formula {
            Some(formula) => formula.clone(),
            None => return Err(err::StateError::NoFormula.into()),
        };

        self.state = ContextState::Deciding;
        self.counters.interpretations = 0;
        self.counterexample = None;
        log::info!(target: targets::DECIDE, "Deciding with {}", self.config.interpretation_order);

        let interpretations = Interpretations::from_signature(&formula.signature());

        let counterexample = match self.config.interpretation_order.value {
            InterpretationOrder::Canonical => self.find_counterexample(&formula, interpretations),

            InterpretationOrder::Shuffled => {
                let mut all = interpretations.collect::<Vec<_>>();
                all.shuffle(&mut self.rng);
                self.find_counterexample(&formula, all.into_iter())
            }
        };

        self.counters.time = total_time.elapsed();

        let verdict = match counterexample {
            Err(e) => {
                self.state = ContextState::Input;
                return Err(e.into());
            }

            Ok(None) => {
                self.state = ContextState::Theorem;
                Verdict::Theorem
            }

            Ok(Some(counterexample)) => {
                self.state = ContextState::Refuted;
                self.counterexample = Some(counterexample.clone());
                Verdict::Countermodel(counterexample)
            }
        };

        log::info!(target: targets::DECIDE,
            "{} after {} interpretations in {:?}",
            self.report(),
            self.counters.interpretations,
            self.counters.time
        );

        Ok(verdict)
    }

    /// The first interpretation on which the formula is false, if any.
    fn find_counterexample(
        &mut self,
        formula: &Formula,
        interpretations: impl Iterator<Item = Interpretation>,
    ) -> Result<Option<Interpretation>, err::EvaluationError> {
        for interpretation in interpretations {
            self.counters.interpretations += 1;

            if !evaluate(formula, &interpretation)? {
                log::trace!(target: targets::DECIDE, "Counterexample: {:?}", interpretation.as_map());
                return Ok(Some(interpretation));
            }
        }
        Ok(None)
    }
}

/// Decides whether a formula is a theorem, with the default configuration.
pub fn decide(formula: &str) -> Result<Verdict, err::ErrorKind> {
    let mut the_context = Context::from_config(Config::default());
    the_context.read_formula(formula)?;
    the_context.decide()
}
