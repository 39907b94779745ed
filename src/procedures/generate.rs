/*!
Generation of a complete finite collection of interpretations for a formula.

# Overview

Monadic logic has a small-model property: a formula is valid exactly when it is true on every interpretation from a finite collection determined by the [signature](crate::structures::formula::Signature) of the formula.

Given *k* sentence letters, each of the 2<sup>*k*</sup> patterns of truth values over the letters is a [cell](crate::structures::cell).
An interpretation is then (up to the truth of the formula) fixed by the multiplicity of each cell:
- Without equality no formula distinguishes two elements of the same cell, and so only whether a cell is empty or not matters.
  Multiplicities range over {0, 1}.
- With equality a formula may count elements of a cell, though with *v* variable names no more than *v* elements of a cell may be told apart.
  Multiplicities range over {0, ..., *v*}.

Each tuple of multiplicities, with the exception of the tuple of zeros, gives an interpretation.
So, with radix *r* (2, or *v* + 1) there are *r*<sup>2<sup>*k*</sup></sup> - 1 interpretations.

```rust
# use otter_monadic::builder::check_formula;
# use otter_monadic::procedures::generate::Interpretations;
let formula = check_formula("@x(Px > Qx)").unwrap();
let interpretations = Interpretations::from_signature(&formula.signature());

assert_eq!(interpretations.count(), 15);
```

# Order

Patterns are ordered with the pattern on which each letter is true first, and with letters in alphabetical order the last letter varying fastest.
Tuples of multiplicities are then given in [odometer](crate::generic::odometer) order, so small interpretations with elements of later patterns are generated first.

Interpretations are generated lazily, and so a decision may stop at the first counterexample without building the remaining interpretations.
*/

use crate::{
    generic::odometer::Odometer,
    misc::log::targets::{self},
    structures::{
        cell::Cell,
        formula::{Formula, Signature},
        interpretation::{Assignment, Interpretation},
        label::Letter,
    },
};

/// An iterator over the interpretations of a signature.
pub struct Interpretations {
    patterns: Vec<Assignment>,
    multiplicities: Odometer,
}

impl Interpretations {
    /// The interpretations of a signature.
    pub fn from_signature(signature: &Signature) -> Self {
        let letters = signature.letters.iter().copied().collect::<Vec<_>>();
        let patterns = patterns(&letters);
        let radix = radix(signature);

        log::trace!(target: targets::GENERATE, "{} cells with radix {radix}", patterns.len());

        Interpretations {
            multiplicities: Odometer::new(radix, patterns.len()),
            patterns,
        }
    }

    /// A count of the interpretations of a signature, if the count fits in a usize.
    pub fn count_of(signature: &Signature) -> Option<usize> {
        let cells = 1_usize.checked_shl(signature.letters.len() as u32)?;
        let cells = u32::try_from(cells).ok()?;
        radix(signature).checked_pow(cells).map(|count| count - 1)
    }
}

impl Iterator for Interpretations {
    type Item = Interpretation;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let tuple = self.multiplicities.next()?;

            let cells = self
                .patterns
                .iter()
                .zip(tuple)
                .map(|(pattern, multiplicity)| Cell::new(pattern.clone(), multiplicity))
                .collect::<Vec<_>>();

            // Empty domains are skipped.
            if let Some(interpretation) = Interpretation::from_cells(&cells) {
                return Some(interpretation);
            }
        }
    }
}

/// Every interpretation of a formula, in generation order.
pub fn generate_interpretations(formula: &Formula) -> Vec<Interpretation> {
    Interpretations::from_signature(&formula.signature()).collect()
}

/// Each pattern of truth values over the letters.
///
/// On pattern *p* the letter at index *i* is true exactly when bit *k - 1 - i* of *p* is unset.
fn patterns(letters: &[Letter]) -> Vec<Assignment> {
    let k = letters.len();
    (0..1_usize << k)
        .map(|p| {
            letters
                .iter()
                .enumerate()
                .map(|(i, letter)| (*letter, (p >> (k - 1 - i)) & 1 == 0))
                .collect()
        })
        .collect()
}

fn radix(signature: &Signature) -> usize {
    match signature.equality {
        true => signature.variables.len() + 1,
        false => 2,
    }
}

#[cfg(test)]
mod generate_tests {
    use super::*;
    use crate::builder::check_formula;

    fn interpretations(formula: &str) -> Vec<Interpretation> {
        generate_interpretations(&check_formula(formula).unwrap())
    }

    #[test]
    fn counts_without_equality() {
        assert_eq!(interpretations("@x(Px+-Px)").len(), 3);
        assert_eq!(interpretations("@x(Px>Qx)").len(), 15);
        assert_eq!(interpretations("(Px*Qx)*Rx").len(), 255);
    }

    #[test]
    fn no_letters() {
        let formula = check_formula("@x(x=x)").unwrap();
        let all = generate_interpretations(&formula);

        // One cell, with multiplicity up to the single variable name.
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].size(), 1);
        assert!(all[0].iter().all(|(_, assignment)| assignment.is_empty()));
    }

    #[test]
    fn counts_with_equality() {
        // Two cells, three variable names.
        let formula = check_formula("@x!y@z((Px*(x=y))>(y=z))").unwrap();
        let signature = formula.signature();
        assert_eq!(radix(&signature), 4);
        assert_eq!(Interpretations::count_of(&signature), Some(15));
        assert_eq!(generate_interpretations(&formula).len(), 15);

        let largest = generate_interpretations(&formula)
            .iter()
            .map(|interpretation| interpretation.size())
            .max();
        assert_eq!(largest, Some(6));
    }

    #[test]
    fn count_agrees_with_generation() {
        for formula in ["Px>Px", "@x!y(x=y)", "@x(Px*Qx)>(@x(Px)*@x(Qx))"] {
            let formula = check_formula(formula).unwrap();
            let signature = formula.signature();
            assert_eq!(
                Interpretations::count_of(&signature),
                Some(generate_interpretations(&formula).len())
            );
        }
    }

    #[test]
    fn never_empty() {
        for interpretation in interpretations("@x(Px>Qx)") {
            assert!(interpretation.size() > 0);
        }
    }

    #[test]
    fn pattern_order() {
        let two = patterns(&['P', 'Q']);
        let values = two
            .iter()
            .map(|pattern| (pattern[&'P'], pattern[&'Q']))
            .collect::<Vec<_>>();
        assert_eq!(
            values,
            vec![(true, true), (true, false), (false, true), (false, false)]
        );

        assert_eq!(patterns(&[]), vec![Assignment::default()]);
    }

    #[test]
    fn first_interpretations() {
        let all = interpretations("@x(Px)");
        let first = all
            .iter()
            .map(|interpretation| {
                interpretation
                    .iter()
                    .map(|(_, assignment)| assignment[&'P'])
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        assert_eq!(first, vec![vec![false], vec![true], vec![true, false]]);
    }
}
