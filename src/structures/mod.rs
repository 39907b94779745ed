//! Key structures, such as syntax trees, formulas, and interpretations.
//!
//! # Languages
//!
//! A formula is written in a language of:
//! - [Variables](label::Variable), the lowercase ascii characters, each of which denotes some unspecified element of a domain.
//! - [Sentence letters](label::Letter), the uppercase ascii characters, each of which is a unary predicate applied to exactly one variable.
//! - Equality, between variables.
//! - Negation, conjunction, disjunction, and (material) implication.
//! - Universal and existential quantification, over a single variable each.
//!
//! The surface syntax of the language is given in [label].
//!
//! # From strings to formulas
//!
//! A string is first read into a [syntax tree](node), without any guarantee of the shape of the tree.
//! A tree is then checked, and if well-formed is transformed into a [formula](formula).
//!
//! # Interpretations
//!
//! An [interpretation] is a non-empty domain of [elements](element) together with a truth value for each sentence letter on each element.
//! [Cells](cell) group the elements of an interpretation by the pattern of truth values the elements share.

pub mod cell;
pub mod element;
pub mod formula;
pub mod interpretation;
pub mod label;
pub mod node;
