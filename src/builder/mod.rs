/*!
Tools for reading a formula, from a string to a checked [Formula].

Reading happens in three stages:
1. [Normalization](normalize), which makes the implicit structure of the surface syntax explicit.
2. [Parsing](parse), which builds a syntax tree from the normalized string.
3. [Checking](check), which verifies the tree is well-formed and transforms the tree to a formula.

Each stage is fatal on error, and no partial result is kept.

A formula may be read into a [context](crate::context) with [read_formula](crate::context::GenericContext::read_formula), or checked without a context by [check_formula].

# Examples

```rust
# use otter_monadic::context::Context;
# use otter_monadic::config::Config;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.read_formula("@x(Px > Px)").is_ok());
assert!(the_context.formula().is_some());
```

```rust
# use otter_monadic::builder::check_formula;
# use otter_monadic::types::err::{ErrorKind, SyntaxError};
assert!(check_formula("@x!y(x=y)").is_ok());
assert_eq!(
    check_formula("(Px"),
    Err(ErrorKind::Syntax(SyntaxError::UnmatchedOpen { position: 0 }))
);
```
*/

pub mod check;
pub mod normalize;
pub mod parse;

use crate::{
    context::{ContextState, Counters, GenericContext},
    misc::log::targets::{self},
    structures::{formula::Formula, node::Node},
    types::err::{self},
};

/// The syntax tree and formula of a string, if the string is a well-formed formula.
pub fn read(formula: &str) -> Result<(Node, Formula), err::ErrorKind> {
    let normalized = normalize::normalize(formula)?;
    let tree = parse::parse_normalized(&normalized)?;
    let checked = check::check(&tree)?;
    Ok((tree, checked))
}

/// The formula of a string, if the string is a well-formed formula.
pub fn check_formula(formula: &str) -> Result<Formula, err::ErrorKind> {
    let (_, checked) = read(formula)?;
    Ok(checked)
}

/// Methods for reading a formula into the context.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a formula into the context, replacing any formula previously read.
    ///
    /// On error the context is unchanged.
    pub fn read_formula(&mut self, formula: &str) -> Result<(), err::ErrorKind> {
        let (tree, checked) = match read(formula) {
            Ok(read) => read,
            Err(e) => {
                log::info!(target: targets::CHECK, "Rejected {formula}: {e}");
                return Err(e);
            }
        };

        log::info!(target: targets::CHECK, "Read {formula}");

        self.syntax_tree = Some(tree);
        self.formula = Some(checked);
        self.counterexample = None;
        self.counters = Counters::default();
        self.state = ContextState::Input;

        Ok(())
    }
}
