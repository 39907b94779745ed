/*!
The context --- into which a formula is read and within which theoremhood is decided.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over the source of randomness used to shuffle interpretations.
In particular, [from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

# Example
```rust
# use otter_monadic::context::Context;
# use otter_monadic::config::Config;
# use otter_monadic::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.read_formula("@x(Px) > !x(Px)").is_ok());
assert!(the_context.decide().is_ok_and(|verdict| verdict.is_theorem()));
assert_eq!(the_context.report(), Report::Theorem);

assert!(the_context.read_formula("!x(Px) > @x(Px)").is_ok());
assert!(the_context.decide().is_ok());
assert_eq!(the_context.report(), Report::NotTheorem);

let counterexample = the_context.counterexample().unwrap();
assert_eq!(counterexample.size(), 2);
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// No formula has been read.
    Configuration,

    /// A formula has been read, and theoremhood has not been decided.
    Input,

    /// Theoremhood of the formula is being decided.
    Deciding,

    /// The formula is known to be a theorem.
    Theorem,

    /// The formula is known not to be a theorem, by some counterexample.
    Refuted,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Deciding => write!(f, "Deciding"),
            Self::Theorem => write!(f, "Theorem"),
            Self::Refuted => write!(f, "Refuted"),
        }
    }
}
