//! Procedures for deciding theoremhood.
//!
//! - [generate] enumerates a complete finite collection of interpretations for a formula.
//! - [evaluate] gives the truth value of a formula on an interpretation.
//! - [decide] composes the two, either as a [method of a context](crate::context::GenericContext::decide) or [standalone](decide::decide).

pub mod decide;
pub mod evaluate;
pub mod generate;
