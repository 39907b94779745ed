/*!
Checks on the well-formedness of a syntax tree, and the transformation of a well-formed tree to a [Formula].

A tree is well-formed when each node satisfies the following:
- A sentence letter has exactly one child, which is a variable.
- A negation has exactly one child, which is a formula.
- A conjunction, disjunction, or implication has exactly two children, each of which is a formula.
- An equality has exactly two children, each of which is a variable bound by some enclosing quantifier.
- A quantifier has exactly two children, of which the first and only the first is a variable.
- Every other variable is bound by some enclosing quantifier.

Here, a variable is bound by a quantifier if the variable is the first child of the quantifier and the quantifier is an ancestor of the variable.

The exception is a variable which is the argument of a sentence letter.
Such a variable, if unbound, is a *free parameter*, and the formula obtained from the tree is the universal closure of the tree, with free parameters quantified outermost and in alphabetical order.
As a formula is valid exactly when its universal closure is valid, this does not change the verdict on the formula.

```rust
# use otter_monadic::builder::{check::check, parse::parse};
# use otter_monadic::types::err::WellFormednessError;
assert!(check(&parse("@x(Px+-Px)").unwrap()).is_ok());

assert_eq!(
    check(&parse("x=x").unwrap()),
    Err(WellFormednessError::UnboundVariable { variable: 'x', position: 0 })
);
```

Checks are all-or-nothing, and the first violation found is returned.
*/

use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    structures::{
        formula::{Connective, Formula, Quantifier, Term},
        label::{Label, Variable},
        node::Node,
    },
    types::err::{self},
};

/// Where a variable occurs, for the purpose of noting errors.
#[derive(Clone, Copy)]
enum Position {
    /// The argument of a sentence letter, where free parameters are permitted.
    Argument(char),

    /// An operand of equality.
    Operand(usize),
}

/// The formula of a tree, if the tree is well-formed.
pub fn check(tree: &Node) -> Result<Formula, err::WellFormednessError> {
    let mut bound = Vec::default();
    let mut free = BTreeSet::default();

    let mut formula = formula_of(tree, &mut bound, &mut free)?;

    for parameter in free.iter().rev() {
        formula = Formula::Quantified {
            quantifier: Quantifier::Universal,
            variable: *parameter,
            body: Box::new(formula),
        };
    }

    log::trace!(target: targets::CHECK, "Free parameters: {free:?}");
    Ok(formula)
}

fn arity(node: &Node) -> Result<(), err::WellFormednessError> {
    let expected = node.label().arity();
    let found = node.children().len();

    match expected == found {
        true => Ok(()),
        false => Err(err::WellFormednessError::Arity {
            label: node.label(),
            position: node.position(),
            expected,
            found,
        }),
    }
}

fn formula_of(
    node: &Node,
    bound: &mut Vec<Variable>,
    free: &mut BTreeSet<Variable>,
) -> Result<Formula, err::WellFormednessError> {
    arity(node)?;

    match node.label() {
        Label::Variable(variable) => match bound.contains(&variable) {
            true => Err(err::WellFormednessError::VariableAsFormula {
                variable,
                position: node.position(),
            }),
            false => Err(err::WellFormednessError::UnboundVariable {
                variable,
                position: node.position(),
            }),
        },

        Label::Letter(letter) => {
            let term = term_of(&node.children()[0], Position::Argument(letter), bound, free)?;
            Ok(Formula::Predicate { letter, term })
        }

        Label::Equality => {
            let at = Position::Operand(node.position());
            let left = term_of(&node.children()[0], at, bound, free)?;
            let right = term_of(&node.children()[1], at, bound, free)?;
            Ok(Formula::Equality(left, right))
        }

        Label::Negation => {
            let formula = formula_of(&node.children()[0], bound, free)?;
            Ok(Formula::Negation(Box::new(formula)))
        }

        Label::Conjunction | Label::Disjunction | Label::Implication => {
            let connective = match node.label() {
                Label::Conjunction => Connective::Conjunction,
                Label::Disjunction => Connective::Disjunction,
                _ => Connective::Implication,
            };

            let left = formula_of(&node.children()[0], bound, free)?;
            let right = formula_of(&node.children()[1], bound, free)?;

            Ok(Formula::Binary {
                connective,
                left: Box::new(left),
                right: Box::new(right),
            })
        }

        Label::Universal | Label::Existential => {
            let quantifier = match node.label() {
                Label::Universal => Quantifier::Universal,
                _ => Quantifier::Existential,
            };

            let found = node
                .children()
                .iter()
                .filter(|child| matches!(child.label(), Label::Variable(_)))
                .count();

            let variable = match (found, node.children()[0].label()) {
                (1, Label::Variable(variable)) => variable,
                _ => {
                    return Err(err::WellFormednessError::QuantifierVariable {
                        position: node.position(),
                        found,
                    })
                }
            };

            bound.push(variable);
            let body = formula_of(&node.children()[1], bound, free);
            bound.pop();

            Ok(Formula::Quantified {
                quantifier,
                variable,
                body: Box::new(body?),
            })
        }
    }
}

fn term_of(
    node: &Node,
    at: Position,
    bound: &[Variable],
    free: &mut BTreeSet<Variable>,
) -> Result<Term, err::WellFormednessError> {
    let variable = match (node.label(), node.children().is_empty()) {
        (Label::Variable(variable), true) => variable,

        _ => match at {
            Position::Argument(letter) => {
                return Err(err::WellFormednessError::PredicateArgument {
                    letter,
                    position: node.position(),
                })
            }
            Position::Operand(position) => {
                return Err(err::WellFormednessError::EqualityOperand { position })
            }
        },
    };

    if !bound.contains(&variable) {
        match at {
            Position::Argument(_) => {
                free.insert(variable);
            }
            Position::Operand(_) => {
                return Err(err::WellFormednessError::UnboundVariable {
                    variable,
                    position: node.position(),
                })
            }
        }
    }

    Ok(Term::Variable(variable))
}
