/*!
Evaluation of a formula on an interpretation.

Evaluation is by recursion on the structure of a formula, with a quantifier evaluated by [substituting](crate::structures::formula::Formula::substitute) each element of the domain for the bound variable in a fresh copy of the body of the quantifier.
A universal quantifier stops at the first element on which the body is false, and an existential quantifier stops at the first element on which the body is true.
Otherwise, both sides of a binary connective are evaluated.

Evaluation is pure: neither the formula nor the interpretation is mutated.

```rust
# use std::collections::BTreeMap;
# use otter_monadic::builder::check_formula;
# use otter_monadic::procedures::evaluate::evaluate;
# use otter_monadic::structures::interpretation::Interpretation;
let formula = check_formula("!x(Px) > @x(Px)").unwrap();

let all_p = Interpretation::from_assignments(vec![BTreeMap::from([('P', true)])]).unwrap();
assert_eq!(evaluate(&formula, &all_p), Ok(true));

let some_p = Interpretation::from_assignments(vec![
    BTreeMap::from([('P', true)]),
    BTreeMap::from([('P', false)]),
])
.unwrap();
assert_eq!(evaluate(&formula, &some_p), Ok(false));
```

An error is returned only if the formula mentions something the interpretation does not, e.g. a free variable or a letter without a value.
For interpretations [generated](crate::procedures::generate) from a formula this never happens.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        element::Element,
        formula::{Connective, Formula, Quantifier, Term},
        interpretation::Interpretation,
    },
    types::err::{self},
};

/// The truth value of a formula on an interpretation.
pub fn evaluate(
    formula: &Formula,
    interpretation: &Interpretation,
) -> Result<bool, err::EvaluationError> {
    match formula {
        Formula::Predicate { letter, term } => {
            let element = element_of(term, interpretation)?;
            match interpretation.value_of(element, *letter) {
                Some(value) => Ok(value),
                None => Err(err::EvaluationError::UnknownLetter(*letter)),
            }
        }

        Formula::Equality(left, right) => {
            let left = element_of(left, interpretation)?;
            let right = element_of(right, interpretation)?;
            Ok(left == right)
        }

        Formula::Negation(formula) => Ok(!evaluate(formula, interpretation)?),

        Formula::Binary {
            connective,
            left,
            right,
        } => {
            let left = evaluate(left, interpretation)?;
            let right = evaluate(right, interpretation)?;

            match connective {
                Connective::Conjunction => Ok(left && right),
                Connective::Disjunction => Ok(left || right),
                Connective::Implication => Ok(!(left && !right)),
            }
        }

        Formula::Quantified {
            quantifier,
            variable,
            body,
        } => {
            // The value which, when found for some element, fixes the value of the quantifier.
            let decisive = match quantifier {
                Quantifier::Universal => false,
                Quantifier::Existential => true,
            };

            for element in interpretation.elements() {
                let instance = body.substitute(*variable, element);
                if evaluate(&instance, interpretation)? == decisive {
                    log::trace!(target: targets::EVALUATE, "{quantifier:?} {variable} fixed at {element}");
                    return Ok(decisive);
                }
            }
            Ok(!decisive)
        }
    }
}

fn element_of(
    term: &Term,
    interpretation: &Interpretation,
) -> Result<Element, err::EvaluationError> {
    match term {
        Term::Variable(variable) => Err(err::EvaluationError::FreeVariable(*variable)),
        Term::Element(element) => match interpretation.assignment_of(*element) {
            Some(_) => Ok(*element),
            None => Err(err::EvaluationError::UnknownElement(*element)),
        },
    }
}

#[cfg(test)]
mod evaluate_tests {
    use super::*;
    use crate::{builder::check_formula, structures::interpretation::Assignment};

    fn domain(values: &[bool]) -> Interpretation {
        let assignments = values
            .iter()
            .map(|value| Assignment::from([('P', *value)]))
            .collect();
        Interpretation::from_assignments(assignments).unwrap()
    }

    fn value(
        formula: &str,
        interpretation: &Interpretation,
    ) -> Result<bool, err::EvaluationError> {
        evaluate(&check_formula(formula).unwrap(), interpretation)
    }

    #[test]
    fn connectives() {
        let p = domain(&[true]);
        let not_p = domain(&[false]);

        assert_eq!(value("Px*-Px", &p), Ok(false));
        assert_eq!(value("Px+-Px", &not_p), Ok(true));
        assert_eq!(value("Px>-Px", &p), Ok(false));
        assert_eq!(value("Px>-Px", &not_p), Ok(true));
        assert_eq!(value("-Px>Px", &not_p), Ok(false));
    }

    #[test]
    fn quantifiers() {
        let mixed = domain(&[true, false]);

        assert_eq!(value("@x(Px)", &mixed), Ok(false));
        assert_eq!(value("!x(Px)", &mixed), Ok(true));
        assert_eq!(value("!x(-Px)", &mixed), Ok(true));
        assert_eq!(value("@x(Px+-Px)", &mixed), Ok(true));
    }

    #[test]
    fn equality() {
        let two = domain(&[true, true]);

        assert_eq!(value("@x(x=x)", &two), Ok(true));
        assert_eq!(value("@x@y(x=y)", &two), Ok(false));
        assert_eq!(value("@x@y(x=y)", &domain(&[false])), Ok(true));
        assert_eq!(value("@x!y-(x=y)", &two), Ok(true));
    }

    #[test]
    fn shadowing() {
        let mixed = domain(&[true, false]);

        // The inner quantifier rebinds x, and so the outer choice of x is irrelevant.
        assert_eq!(value("!x@x(Px)", &mixed), Ok(false));
        assert_eq!(value("@x!x(Px)", &mixed), Ok(true));
    }

    #[test]
    fn purity() {
        let formula = check_formula("@x!y((Px+Py)*-(x=y))").unwrap();
        let copy = formula.clone();
        let mixed = domain(&[true, false]);

        let first = evaluate(&formula, &mixed);
        let second = evaluate(&formula, &mixed);

        assert_eq!(first, Ok(true));
        assert_eq!(first, second);
        assert_eq!(formula, copy);
    }

    #[test]
    fn errors() {
        let p = domain(&[true]);

        let free = Formula::Predicate {
            letter: 'P',
            term: Term::Variable('x'),
        };
        assert_eq!(
            evaluate(&free, &p),
            Err(err::EvaluationError::FreeVariable('x'))
        );

        let unknown_letter = Formula::Predicate {
            letter: 'Q',
            term: Term::Element(Element::from(0)),
        };
        assert_eq!(
            evaluate(&unknown_letter, &p),
            Err(err::EvaluationError::UnknownLetter('Q'))
        );

        let unknown_element = Formula::Equality(
            Term::Element(Element::from(0)),
            Term::Element(Element::from(4)),
        );
        assert_eq!(
            evaluate(&unknown_element, &p),
            Err(err::EvaluationError::UnknownElement(Element::from(4)))
        );
    }
}
