/*!
Parsing of a normalized formula to a [syntax tree](crate::structures::node).

# Overview

A normalized string is read left to right, with a stack of partially built nodes --- one *frame* for each parenthesised group which has been opened but not closed, and an outermost frame for the string as a whole.

Each frame collects children and (at most) one operator or sentence letter label:
- On `(` a fresh frame is pushed.
- On `)` the top frame is closed and the resulting node is added as a child of the frame below.
- On a variable a leaf is added as a child of the top frame.
- On an operator or sentence letter the top frame is labelled.\
  Children collected before the label and children collected after the label are alike children of the labelled node, and so an operator may follow its first operand, e.g. `(Px)*(Qx)`, or precede its operands, e.g. `=xy`.

A frame is closed to:
- A node with the label of the frame and the children of the frame, if the frame is labelled.
- The single child of the frame, if the frame is not labelled.

And, closing an unlabelled frame with no child or with more than one child is an error.

No check is made on the number or kind of children of a node, for this see [check](crate::builder::check).

```rust
# use otter_monadic::builder::parse::parse_normalized;
# use otter_monadic::structures::label::Label;
let tree = parse_normalized("(Px)>(Px)").unwrap();

assert_eq!(tree.label(), Label::Implication);
assert_eq!(tree.position(), 4);
assert!(tree
    .children()
    .iter()
    .all(|child| child.label() == Label::Letter('P')));
```
*/

use crate::{
    builder::normalize::normalize,
    misc::log::targets::{self},
    structures::{
        label::{is_variable, symbols, Label},
        node::Node,
    },
    types::err::{self},
};

/// A partially built node.
struct Frame {
    /// The position of the opening parenthesis of the group, if the frame is for a group.
    open: Option<usize>,

    /// The label of the frame, and the position of its symbol.
    label: Option<(Label, usize)>,

    children: Vec<Node>,
}

impl Frame {
    fn new(open: Option<usize>) -> Self {
        Frame {
            open,
            label: None,
            children: Vec::default(),
        }
    }

    fn set_label(&mut self, label: Label, position: usize) -> Result<(), err::SyntaxError> {
        match self.label {
            Some((_, first)) => Err(err::SyntaxError::OperatorConflict {
                first,
                second: position,
            }),
            None => {
                self.label = Some((label, position));
                Ok(())
            }
        }
    }

    fn close(mut self) -> Result<Node, err::SyntaxError> {
        let position = self.open.unwrap_or_default();

        match self.label {
            Some((label, at)) => Ok(Node::new(label, at, self.children)),
            None => match self.children.len() {
                0 => Err(err::SyntaxError::Empty { position }),
                1 => match self.children.pop() {
                    Some(node) => Ok(node),
                    None => Err(err::SyntaxError::Empty { position }),
                },
                _ => Err(err::SyntaxError::MalformedRoot { position }),
            },
        }
    }
}

/// The syntax tree of a formula given in surface syntax.
pub fn parse(formula: &str) -> Result<Node, err::SyntaxError> {
    let normalized = normalize(formula)?;
    parse_normalized(&normalized)
}

/// The syntax tree of a normalized formula.
pub fn parse_normalized(formula: &str) -> Result<Node, err::SyntaxError> {
    if formula.is_empty() {
        return Err(err::SyntaxError::Empty { position: 0 });
    }

    let mut stack = vec![Frame::new(None)];

    for (position, character) in formula.chars().enumerate() {
        match character {
            symbols::OPEN => stack.push(Frame::new(Some(position))),

            symbols::CLOSE => {
                if stack.len() == 1 {
                    return Err(err::SyntaxError::UnmatchedClose { position });
                }
                let node = match stack.pop() {
                    Some(frame) => frame.close()?,
                    None => return Err(err::SyntaxError::UnmatchedClose { position }),
                };
                if let Some(frame) = stack.last_mut() {
                    frame.children.push(node);
                }
            }

            v if is_variable(v) => {
                if let Some(frame) = stack.last_mut() {
                    frame.children.push(Node::leaf(Label::Variable(v), position));
                }
            }

            _ => match (Label::from_symbol(character), stack.last_mut()) {
                (Some(label), Some(frame)) => frame.set_label(label, position)?,
                _ => {
                    return Err(err::SyntaxError::UnknownCharacter {
                        character,
                        position,
                    })
                }
            },
        }
    }

    let root = match stack.pop() {
        Some(frame) if stack.is_empty() => frame,
        Some(frame) => {
            return Err(err::SyntaxError::UnmatchedOpen {
                position: frame.open.unwrap_or_default(),
            })
        }
        None => return Err(err::SyntaxError::Empty { position: 0 }),
    };

    let tree = root.close()?;
    log::trace!(target: targets::PARSE, "Parsed {formula} to a tree of {} nodes", tree.size());
    Ok(tree)
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn labels(node: &Node) -> Vec<Label> {
        node.children().iter().map(|child| child.label()).collect()
    }

    #[test]
    fn sentence_letter() {
        let tree = parse_normalized("(Px)").unwrap();
        assert_eq!(tree.label(), Label::Letter('P'));
        assert_eq!(tree.position(), 1);
        assert_eq!(labels(&tree), vec![Label::Variable('x')]);
    }

    #[test]
    fn operator_absorbs_earlier_operands() {
        let tree = parse_normalized("(Px)*(Qx)").unwrap();
        assert_eq!(tree.label(), Label::Conjunction);
        assert_eq!(labels(&tree), vec![Label::Letter('P'), Label::Letter('Q')]);
    }

    #[test]
    fn prefix_operator() {
        let tree = parse_normalized("=xy").unwrap();
        assert_eq!(tree.label(), Label::Equality);
        assert_eq!(labels(&tree), vec![Label::Variable('x'), Label::Variable('y')]);
    }

    #[test]
    fn quantifier() {
        let tree = parse("@x!y(x=y)").unwrap();
        assert_eq!(tree.label(), Label::Universal);
        assert_eq!(labels(&tree), vec![Label::Variable('x'), Label::Existential]);

        let inner = &tree.children()[1];
        assert_eq!(labels(inner), vec![Label::Variable('y'), Label::Equality]);
    }

    #[test]
    fn redundant_parentheses() {
        let tree = parse("((Px))").unwrap();
        assert_eq!(tree.label(), Label::Letter('P'));
        assert_eq!(tree.position(), 2);
        assert_eq!(parse_normalized("(x)").unwrap().label(), Label::Variable('x'));
    }

    #[test]
    fn empty() {
        assert_eq!(parse(""), Err(err::SyntaxError::Empty { position: 0 }));
        assert_eq!(parse("   "), Err(err::SyntaxError::Empty { position: 0 }));
        assert_eq!(
            parse_normalized("(Px)*()"),
            Err(err::SyntaxError::Empty { position: 5 })
        );
    }

    #[test]
    fn malformed_root() {
        assert_eq!(
            parse("(Px)(Qx)"),
            Err(err::SyntaxError::MalformedRoot { position: 0 })
        );
        assert_eq!(
            parse_normalized("(xy)"),
            Err(err::SyntaxError::MalformedRoot { position: 0 })
        );
    }

    #[test]
    fn unknown_character() {
        assert_eq!(
            parse("Px#Qx"),
            Err(err::SyntaxError::UnknownCharacter {
                character: '#',
                position: 4
            })
        );
    }

    #[test]
    fn operator_conflict() {
        assert_eq!(
            parse("Px*Qx+Rx"),
            Err(err::SyntaxError::OperatorConflict {
                first: 4,
                second: 9
            })
        );
    }

    #[test]
    fn unmatched() {
        assert_eq!(
            parse_normalized("(Px"),
            Err(err::SyntaxError::UnmatchedOpen { position: 0 })
        );
        assert_eq!(
            parse_normalized("Px)"),
            Err(err::SyntaxError::UnmatchedClose { position: 2 })
        );
    }
}
