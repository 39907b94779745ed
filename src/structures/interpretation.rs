/*!
Interpretations, aka. a (non-empty) domain of elements together with a valuation of each sentence letter on each element.

As predicates are unary, an interpretation is determined by a function from the elements of the domain to [assignments](Assignment) of truth values to sentence letters.

The canonical representation of an interpretation is as a vector of assignments, where the assignment at index *i* is that of the element *i*.
In other words, the domain of an interpretation with *n* assignments is the elements [0..*n*).

```rust
# use std::collections::BTreeMap;
# use otter_monadic::structures::cell::Cell;
# use otter_monadic::structures::element::Element;
# use otter_monadic::structures::interpretation::Interpretation;
let p = Cell::new(BTreeMap::from([('P', true)]), 2);
let not_p = Cell::new(BTreeMap::from([('P', false)]), 1);

let interpretation = Interpretation::from_cells(&[p, not_p]).unwrap();

assert_eq!(interpretation.size(), 3);
assert_eq!(interpretation.value_of(Element::from(1), 'P'), Some(true));
assert_eq!(interpretation.value_of(Element::from(2), 'P'), Some(false));
assert_eq!(interpretation.value_of(Element::from(3), 'P'), None);
```
*/

use std::collections::BTreeMap;

use super::{cell::Cell, element::Element, label::Letter};

/// An assignment of truth values to sentence letters.
pub type Assignment = BTreeMap<Letter, bool>;

/// An interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interpretation {
    domain: Vec<Assignment>,
}

impl Interpretation {
    /// An interpretation with an element for each assignment, if some assignment is given.
    ///
    /// Elements are u32s, and so a domain with more than [u32::MAX] elements is also excluded.
    pub fn from_assignments(domain: Vec<Assignment>) -> Option<Self> {
        match domain.is_empty() || u32::try_from(domain.len()).is_err() {
            true => None,
            false => Some(Interpretation { domain }),
        }
    }

    /// An interpretation with as many elements of each pattern as the multiplicity of the cell of the pattern, if the resulting domain is non-empty.
    ///
    /// Elements are numbered in order of the cells.
    pub fn from_cells(cells: &[Cell]) -> Option<Self> {
        let mut domain = Vec::default();
        for cell in cells {
            for _ in 0..cell.multiplicity {
                domain.push(cell.pattern.clone());
            }
        }
        Interpretation::from_assignments(domain)
    }

    /// The number of elements in the domain.
    pub fn size(&self) -> usize {
        self.domain.len()
    }

    /// An iterator over the elements of the domain, in order.
    pub fn elements(&self) -> impl Iterator<Item = Element> {
        (0..self.domain.len())
            .map_while(|index| u32::try_from(index).ok())
            .map(Element::from)
    }

    /// The assignment of an element, if the element is in the domain.
    pub fn assignment_of(&self, element: Element) -> Option<&Assignment> {
        self.domain.get(element.index())
    }

    /// The value of a letter on an element, if the element is in the domain and the letter is valued.
    pub fn value_of(&self, element: Element, letter: Letter) -> Option<bool> {
        self.assignment_of(element)?.get(&letter).copied()
    }

    /// An iterator through all (element, assignment) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Element, &Assignment)> {
        self.elements().zip(self.domain.iter())
    }

    /// The interpretation as a map from the (external) names of elements to assignments.
    pub fn as_map(&self) -> BTreeMap<String, Assignment> {
        self.iter()
            .map(|(element, assignment)| (element.to_string(), assignment.clone()))
            .collect()
    }
}
