/*!
The syntax tree of a formula, as built by the [parser](crate::builder::parse).

Each node is a [label](Label) together with an ordered list of children and the position of the symbol the label was read from.
A tree is owned by its root, and the children of a node terminate at variable leaves.

No invariants on the shape of a tree are enforced when building a node.
Instead, a tree is [checked](crate::builder::check) and, if well-formed, transformed to a [Formula](crate::structures::formula::Formula).

```rust
# use otter_monadic::builder::parse::parse;
# use otter_monadic::structures::label::Label;
let tree = parse("@x(Px)").unwrap();

assert_eq!(tree.label(), Label::Universal);
assert_eq!(tree.children().len(), 2);
assert_eq!(tree.children()[1].label(), Label::Letter('P'));
```
*/

use super::label::Label;

/// A node in a syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    label: Label,
    position: usize,
    children: Vec<Node>,
}

impl Node {
    /// A node, from a label, the position of its symbol, and children.
    pub fn new(label: Label, position: usize, children: Vec<Node>) -> Self {
        Node {
            label,
            position,
            children,
        }
    }

    /// A node without children.
    pub fn leaf(label: Label, position: usize) -> Self {
        Node::new(label, position, Vec::default())
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// The position of the symbol of the node in the (normalized) string the node was parsed from.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// A count of the nodes in the tree rooted at the node.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(|child| child.size()).sum::<usize>()
    }
}
