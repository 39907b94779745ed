//! Error types used in the library.
//!
//! - Syntax and well-formedness errors are external, and describe some issue with a formula given as input.
//!   Each is fatal to the read, and identifies the rule broken together with a position where possible.
//! - Evaluation errors are only returned when a formula is evaluated on an interpretation built for some other formula.
//! - State errors note a request the context cannot (yet) answer.
//!
//! Positions are character offsets.
//! For errors found during normalization the offset is into the input with whitespace removed, and otherwise the offset is into the normalized string.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{
    element::Element,
    label::{Label, Letter, Variable},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Syntax(SyntaxError),
    WellFormedness(WellFormednessError),
    Evaluation(EvaluationError),
    State(StateError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "Syntax error: {e}"),
            Self::WellFormedness(e) => write!(f, "Not a well-formed formula: {e}"),
            Self::Evaluation(e) => write!(f, "Evaluation error: {e}"),
            Self::State(e) => write!(f, "State error: {e}"),
        }
    }
}

/// Errors in the surface syntax of a formula, noted during normalization or parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyntaxError {
    /// An empty formula, or an empty parenthesised group.
    Empty { position: usize },

    /// A left parenthesis without a matching right parenthesis.
    UnmatchedOpen { position: usize },

    /// A right parenthesis without a matching left parenthesis.
    UnmatchedClose { position: usize },

    /// A character outside of the alphabet of variables, sentence letters, operators and parentheses.
    UnknownCharacter { character: char, position: usize },

    /// A group with more than one node and no operator to join them.
    MalformedRoot { position: usize },

    /// A quantifier symbol not immediately followed by a variable.
    QuantifierVariable { position: usize },

    /// A sentence letter not immediately followed by a variable.
    LetterVariable { position: usize },

    /// A negation or quantifier prefix followed by neither a parenthesised group nor a further prefix.
    UnscopedOperator { position: usize },

    /// A group containing two operators, at `first` and `second`.
    OperatorConflict { first: usize, second: usize },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { position } => write!(f, "empty formula at {position}"),
            Self::UnmatchedOpen { position } => {
                write!(f, "missing a right parenthesis for '(' at {position}")
            }
            Self::UnmatchedClose { position } => {
                write!(f, "missing a left parenthesis for ')' at {position}")
            }
            Self::UnknownCharacter {
                character,
                position,
            } => write!(f, "unknown character '{character}' at {position}"),
            Self::MalformedRoot { position } => {
                write!(f, "more than one node without an operator in the group at {position}")
            }
            Self::QuantifierVariable { position } => {
                write!(f, "the quantifier at {position} must be followed by a variable")
            }
            Self::LetterVariable { position } => {
                write!(f, "the sentence letter at {position} must be followed by a variable")
            }
            Self::UnscopedOperator { position } => {
                write!(f, "the operator at {position} has no parenthesised scope")
            }
            Self::OperatorConflict { first, second } => {
                write!(f, "the operators at {first} and {second} share a group")
            }
        }
    }
}

impl From<SyntaxError> for ErrorKind {
    fn from(e: SyntaxError) -> Self {
        ErrorKind::Syntax(e)
    }
}

/// Violations of the structural invariants of a syntax tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WellFormednessError {
    /// A node with the wrong number of children.
    Arity {
        label: Label,
        position: usize,
        expected: usize,
        found: usize,
    },

    /// The argument of a sentence letter is not a variable.
    PredicateArgument { letter: Letter, position: usize },

    /// An operand of equality is not a variable.
    EqualityOperand { position: usize },

    /// A quantifier whose first child is not its (only) variable child.
    QuantifierVariable { position: usize, found: usize },

    /// A variable which is not bound by any enclosing quantifier.
    UnboundVariable { variable: Variable, position: usize },

    /// A variable where a formula is required.
    VariableAsFormula { variable: Variable, position: usize },
}

impl std::fmt::Display for WellFormednessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arity {
                label,
                position,
                expected,
                found,
            } => write!(
                f,
                "'{label}' at {position} requires {expected} argument(s), found {found}"
            ),
            Self::PredicateArgument { letter, position } => {
                write!(f, "the argument of '{letter}' at {position} is not a variable")
            }
            Self::EqualityOperand { position } => {
                write!(f, "an operand of the equality at {position} is not a variable")
            }
            Self::QuantifierVariable { position, found } => write!(
                f,
                "the quantifier at {position} needs exactly one variable, found {found}"
            ),
            Self::UnboundVariable { variable, position } => {
                write!(f, "unbound variable '{variable}' at {position}")
            }
            Self::VariableAsFormula { variable, position } => {
                write!(f, "the variable '{variable}' at {position} is not a formula")
            }
        }
    }
}

impl From<WellFormednessError> for ErrorKind {
    fn from(e: WellFormednessError) -> Self {
        ErrorKind::WellFormedness(e)
    }
}

/// Errors during evaluation.
///
/// As interpretations are generated from the formula they are used to evaluate, these are unexpected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// A variable was found where an element was expected.
    FreeVariable(Variable),

    /// The interpretation does not value the letter.
    UnknownLetter(Letter),

    /// The element is not part of the domain of the interpretation.
    UnknownElement(Element),
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FreeVariable(variable) => {
                write!(f, "the variable '{variable}' is free where an element is required")
            }
            Self::UnknownLetter(letter) => {
                write!(f, "the sentence letter '{letter}' has no value")
            }
            Self::UnknownElement(element) => {
                write!(f, "the element {element} is not in the domain")
            }
        }
    }
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// No formula has been read into the context.
    NoFormula,
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFormula => write!(f, "no formula has been read"),
        }
    }
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

#[cfg(test)]
mod err_tests {
    use super::*;

    #[test]
    fn messages() {
        let free = ErrorKind::from(EvaluationError::FreeVariable('x'));
        assert_eq!(
            free.to_string(),
            "Evaluation error: the variable 'x' is free where an element is required"
        );

        let unknown = ErrorKind::from(EvaluationError::UnknownElement(Element::from(2)));
        assert_eq!(
            unknown.to_string(),
            "Evaluation error: the element c2 is not in the domain"
        );

        let state = ErrorKind::from(StateError::NoFormula);
        assert_eq!(state.to_string(), "State error: no formula has been read");
    }
}
