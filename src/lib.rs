//! A library for deciding whether formulas of monadic first-order logic with equality are theorems.
//!
//! otter_monadic reads a formula written as a string of single-character symbols, checks the formula is well-formed, and decides whether the formula is a theorem (is valid) by evaluating the formula on a complete finite collection of interpretations.
//! If the formula is not a theorem, an interpretation on which the formula is false is returned as a counterexample.
//!
//! # Orientation
//!
//! The library is designed around the structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config), and a formula may be [read](crate::context::GenericContext::read_formula) into a context and then [decided](crate::context::GenericContext::decide).
//!
//! Reading a formula is in three stages, each found in the [builder]:
//! - [Normalization](crate::builder::normalize), which inserts the parentheses the surface syntax leaves implicit.
//! - [Parsing](crate::builder::parse), from a normalized string to a [syntax tree](crate::structures::node).
//! - [Checking](crate::builder::check), from a syntax tree to a [formula](crate::structures::formula).
//!
//! And, deciding a formula is a composition of two [procedures]:
//! - [Generation](crate::procedures::generate) of interpretations, following the small-model property of monadic logic.
//! - [Evaluation](crate::procedures::evaluate) of a formula on an interpretation.
//!
//! # Syntax
//!
//! | Symbol    | Meaning                           |
//! |-----------|-----------------------------------|
//! | `a`..`z`  | A variable                        |
//! | `A`..`Z`  | A sentence letter (unary predicate), applied to the variable which follows, e.g. `Px` |
//! | `-`       | Negation                          |
//! | `*`       | Conjunction                       |
//! | `+`       | Disjunction                       |
//! | `>`       | Implication                       |
//! | `=`       | Equality, between variables       |
//! | `@`       | Universal quantification, over the variable which follows, e.g. `@x(Px)` |
//! | `!`       | Existential quantification, over the variable which follows |
//! | `(` , `)` | Grouping                          |
//!
//! Whitespace is ignored.
//! There is no precedence between binary connectives, and so a group may contain at most one binary connective.
//!
//! # Examples
//!
//! + Decide some formulas.
//!
//! ```rust
//! # use otter_monadic::config::Config;
//! # use otter_monadic::context::Context;
//! # use otter_monadic::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let theorems = ["Px > Px", "@x(Px + -Px)", "@x!y(x = y)", "-@x(Px) > !x(-Px)"];
//!
//! for formula in theorems {
//!     assert!(the_context.read_formula(formula).is_ok());
//!     assert!(the_context.decide().is_ok());
//!     assert_eq!(the_context.report(), Report::Theorem);
//! }
//! ```
//!
//! + Find a counterexample.
//!
//! ```rust
//! # use otter_monadic::procedures::decide::decide;
//! let verdict = decide("@x(Px + Qx) > (@x(Px) + @x(Qx))").unwrap();
//! let counterexample = verdict.counterexample().unwrap().as_map();
//!
//! assert_eq!(counterexample.len(), 2);
//! assert_eq!(counterexample["c0"][&'P'], true);
//! assert_eq!(counterexample["c0"][&'Q'], false);
//! assert_eq!(counterexample["c1"][&'P'], false);
//! assert_eq!(counterexample["c1"][&'Q'], true);
//! ```
//!
//! + Errors in a formula are reported with a position.
//!
//! ```rust
//! # use otter_monadic::builder::check_formula;
//! # use otter_monadic::types::err::{ErrorKind, SyntaxError, WellFormednessError};
//! assert_eq!(
//!     check_formula("(Px"),
//!     Err(ErrorKind::Syntax(SyntaxError::UnmatchedOpen { position: 0 }))
//! );
//! assert_eq!(
//!     check_formula("x=x"),
//!     Err(ErrorKind::WellFormedness(WellFormednessError::UnboundVariable {
//!         variable: 'x',
//!         position: 0
//!     }))
//! );
//! ```
//!
//! # Logs
//!
//! Logs are made using the [log](https://docs.rs/log/latest/log/) crate, with [targets](crate::misc::log::targets) for each stage of reading and deciding a formula.
//! Logs at the trace level are compiled out of release builds.

pub mod builder;
pub mod config;
pub mod context;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
