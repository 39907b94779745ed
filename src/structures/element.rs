/*!
(The internal representation of) an element of the domain of an interpretation.

Each element is a u32 *u* such that either *u* is 0, or *u - 1* is an element of the same domain.
And, so, the elements of a domain of size *n* are [0..*n*) and may be used as indicies.

Externally, element *u* is named `c`*u*.

```rust
# use otter_monadic::structures::element::Element;
assert_eq!(Element::from(3).to_string(), "c3");
```
*/

/// An element of a domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element(u32);

impl Element {
    /// The index of the element in its domain.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Element {
    fn from(value: u32) -> Self {
        Element(value)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}
