/*!
Formulas of monadic first-order logic with equality.

A formula is an immutable value, obtained from a well-formed [syntax tree](crate::structures::node) by the [check](crate::builder::check).
And, as the structure of a formula is fixed by its type, the invariants of a well-formed tree (arity, variable operands of equality, etc.) hold of any formula by construction.

Terms of a formula are either variables or [elements](Element) of some domain.
A formula read from a string contains only variables, while elements are introduced by [substitution](Formula::substitute) when evaluating a quantifier.

# Substitution

Substitution of an element for a variable is a pure function from a formula to a (fresh) formula.
Only free occurrences of the variable are replaced, and a quantifier which binds the variable shields its body from the substitution.

```rust
# use otter_monadic::builder::check_formula;
# use otter_monadic::structures::element::Element;
# use otter_monadic::structures::formula::{Formula, Term};
let formula = check_formula("@x(Px)").unwrap();
let Formula::Quantified { variable, body, .. } = &formula else {
    panic!("a quantifier")
};

let instance = body.substitute(*variable, Element::from(0));
assert_eq!(
    instance,
    Formula::Predicate {
        letter: 'P',
        term: Term::Element(Element::from(0))
    }
);
```
*/

use std::collections::BTreeSet;

use super::{
    element::Element,
    label::{Letter, Variable},
};

/// A term, either a variable or an element of some domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Variable(Variable),
    Element(Element),
}

impl Term {
    /// The term with the given element in place of the given variable.
    pub fn substitute(self, variable: Variable, element: Element) -> Self {
        match self {
            Self::Variable(v) if v == variable => Self::Element(element),
            _ => self,
        }
    }
}

/// Binary connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
    Conjunction,
    Disjunction,
    Implication,
}

/// Quantifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantifier {
    Universal,
    Existential,
}

/// A formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    /// A sentence letter applied to a term.
    Predicate { letter: Letter, term: Term },

    /// Equality between two terms.
    Equality(Term, Term),

    Negation(Box<Formula>),

    Binary {
        connective: Connective,
        left: Box<Formula>,
        right: Box<Formula>,
    },

    Quantified {
        quantifier: Quantifier,
        variable: Variable,
        body: Box<Formula>,
    },
}

/// The sentence letters and variables of a formula, and whether the formula contains equality.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Signature {
    pub letters: BTreeSet<Letter>,
    pub variables: BTreeSet<Variable>,
    pub equality: bool,
}

impl Formula {
    /// The formula with the given element in place of each free occurrence of the given variable.
    ///
    /// The formula is not mutated, and any part of the formula unaffected by the substitution is copied.
    pub fn substitute(&self, variable: Variable, element: Element) -> Formula {
        match self {
            Self::Predicate { letter, term } => Self::Predicate {
                letter: *letter,
                term: term.substitute(variable, element),
            },

            Self::Equality(left, right) => Self::Equality(
                left.substitute(variable, element),
                right.substitute(variable, element),
            ),

            Self::Negation(formula) => {
                Self::Negation(Box::new(formula.substitute(variable, element)))
            }

            Self::Binary {
                connective,
                left,
                right,
            } => Self::Binary {
                connective: *connective,
                left: Box::new(left.substitute(variable, element)),
                right: Box::new(right.substitute(variable, element)),
            },

            // The variable is rebound, and so there are no free occurrences below.
            Self::Quantified { variable: v, .. } if *v == variable => self.clone(),

            Self::Quantified {
                quantifier,
                variable: v,
                body,
            } => Self::Quantified {
                quantifier: *quantifier,
                variable: *v,
                body: Box::new(body.substitute(variable, element)),
            },
        }
    }

    /// The signature of the formula.
    pub fn signature(&self) -> Signature {
        let mut signature = Signature::default();
        self.extend_signature(&mut signature);
        signature
    }

    fn extend_signature(&self, signature: &mut Signature) {
        fn note_term(term: &Term, signature: &mut Signature) {
            if let Term::Variable(v) = term {
                signature.variables.insert(*v);
            }
        }

        match self {
            Self::Predicate { letter, term } => {
                signature.letters.insert(*letter);
                note_term(term, signature);
            }

            Self::Equality(left, right) => {
                signature.equality = true;
                note_term(left, signature);
                note_term(right, signature);
            }

            Self::Negation(formula) => formula.extend_signature(signature),

            Self::Binary { left, right, .. } => {
                left.extend_signature(signature);
                right.extend_signature(signature);
            }

            Self::Quantified { variable, body, .. } => {
                signature.variables.insert(*variable);
                body.extend_signature(signature);
            }
        }
    }
}

#[cfg(test)]
mod formula_tests {
    use super::*;

    fn predicate(letter: Letter, variable: Variable) -> Formula {
        Formula::Predicate {
            letter,
            term: Term::Variable(variable),
        }
    }

    fn quantified(quantifier: Quantifier, variable: Variable, body: Formula) -> Formula {
        Formula::Quantified {
            quantifier,
            variable,
            body: Box::new(body),
        }
    }

    #[test]
    fn substitution_is_shielded_by_rebinding() {
        // (Px * !x(Qx))
        let formula = Formula::Binary {
            connective: Connective::Conjunction,
            left: Box::new(predicate('P', 'x')),
            right: Box::new(quantified(Quantifier::Existential, 'x', predicate('Q', 'x'))),
        };

        let c = Element::from(1);
        let expected = Formula::Binary {
            connective: Connective::Conjunction,
            left: Box::new(Formula::Predicate {
                letter: 'P',
                term: Term::Element(c),
            }),
            right: Box::new(quantified(Quantifier::Existential, 'x', predicate('Q', 'x'))),
        };

        assert_eq!(formula.substitute('x', c), expected);
    }

    #[test]
    fn substitution_leaves_other_variables() {
        let formula = Formula::Equality(Term::Variable('x'), Term::Variable('y'));
        let c = Element::from(0);

        assert_eq!(
            formula.substitute('y', c),
            Formula::Equality(Term::Variable('x'), Term::Element(c))
        );
    }

    #[test]
    fn substitution_does_not_mutate() {
        let formula = quantified(Quantifier::Universal, 'y', predicate('P', 'x'));
        let copy = formula.clone();
        let _ = formula.substitute('x', Element::from(2));

        assert_eq!(formula, copy);
    }

    #[test]
    fn signature() {
        // @x(Px > !y(x=y * Qy))
        let formula = quantified(
            Quantifier::Universal,
            'x',
            Formula::Binary {
                connective: Connective::Implication,
                left: Box::new(predicate('P', 'x')),
                right: Box::new(quantified(
                    Quantifier::Existential,
                    'y',
                    Formula::Binary {
                        connective: Connective::Conjunction,
                        left: Box::new(Formula::Equality(
                            Term::Variable('x'),
                            Term::Variable('y'),
                        )),
                        right: Box::new(predicate('Q', 'y')),
                    },
                )),
            },
        );

        let signature = formula.signature();
        assert_eq!(signature.letters, BTreeSet::from(['P', 'Q']));
        assert_eq!(signature.variables, BTreeSet::from(['x', 'y']));
        assert!(signature.equality);
    }
}
