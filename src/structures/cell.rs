/*!
Partition cells, aka. a pattern of truth values over the sentence letters of a formula paired with a count of elements which share the pattern.

Without equality no formula distinguishes two elements which agree on every sentence letter, and so (up to the truth of a formula) an interpretation is determined by how many elements fall under each pattern.
A collection of cells, one for each pattern, then instantiates an [Interpretation](crate::structures::interpretation::Interpretation).
*/

use super::interpretation::Assignment;

/// A pattern with a multiplicity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The truth values of each letter on any element of the cell.
    pub pattern: Assignment,

    /// The number of elements with the pattern.
    pub multiplicity: usize,
}

impl Cell {
    pub fn new(pattern: Assignment, multiplicity: usize) -> Self {
        Cell {
            pattern,
            multiplicity,
        }
    }
}
