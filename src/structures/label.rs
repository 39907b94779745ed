/*!
Labels of nodes in a syntax tree, and the (single character) symbols they are read from.

The alphabet of a formula is fixed:

| Symbol        | Label                       |
|---------------|-----------------------------|
| `a` … `z`     | [Variable](Label::Variable) |
| `A` … `Z`     | [Letter](Label::Letter)     |
| `>`           | [Implication](Label::Implication) |
| `@`           | [Universal](Label::Universal)     |
| `!`           | [Existential](Label::Existential) |
| `=`           | [Equality](Label::Equality)       |
| `*`           | [Conjunction](Label::Conjunction) |
| `+`           | [Disjunction](Label::Disjunction) |
| `-`           | [Negation](Label::Negation)       |

Together with `(` and `)` for grouping.

```rust
# use otter_monadic::structures::label::Label;
assert_eq!(Label::from_symbol('@'), Some(Label::Universal));
assert_eq!(Label::from_symbol('P'), Some(Label::Letter('P')));
assert_eq!(Label::from_symbol('('), None);
assert_eq!(Label::Implication.symbol(), '>');
```
*/

/// A variable, aka. some lowercase ascii character.
pub type Variable = char;

/// A sentence letter, aka. some uppercase ascii character.
pub type Letter = char;

/// Symbols of the operators.
pub mod symbols {
    pub const IMPLICATION: char = '>';
    pub const UNIVERSAL: char = '@';
    pub const EXISTENTIAL: char = '!';
    pub const EQUALITY: char = '=';
    pub const CONJUNCTION: char = '*';
    pub const DISJUNCTION: char = '+';
    pub const NEGATION: char = '-';

    pub const OPEN: char = '(';
    pub const CLOSE: char = ')';
}

/// The label of a node in a syntax tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Variable(Variable),
    Letter(Letter),
    Negation,
    Conjunction,
    Disjunction,
    Implication,
    Equality,
    Universal,
    Existential,
}

/// Whether the character is a variable.
pub fn is_variable(character: char) -> bool {
    character.is_ascii_lowercase()
}

/// Whether the character is a sentence letter.
pub fn is_letter(character: char) -> bool {
    character.is_ascii_uppercase()
}

/// Whether the character is a quantifier symbol.
pub fn is_quantifier(character: char) -> bool {
    character == symbols::UNIVERSAL || character == symbols::EXISTENTIAL
}

impl Label {
    /// The label read from the given symbol, if the symbol is a variable, sentence letter, or operator.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            v if is_variable(v) => Some(Self::Variable(v)),
            l if is_letter(l) => Some(Self::Letter(l)),
            symbols::NEGATION => Some(Self::Negation),
            symbols::CONJUNCTION => Some(Self::Conjunction),
            symbols::DISJUNCTION => Some(Self::Disjunction),
            symbols::IMPLICATION => Some(Self::Implication),
            symbols::EQUALITY => Some(Self::Equality),
            symbols::UNIVERSAL => Some(Self::Universal),
            symbols::EXISTENTIAL => Some(Self::Existential),
            _ => None,
        }
    }

    /// The symbol the label is read from.
    pub fn symbol(&self) -> char {
        match self {
            Self::Variable(v) => *v,
            Self::Letter(l) => *l,
            Self::Negation => symbols::NEGATION,
            Self::Conjunction => symbols::CONJUNCTION,
            Self::Disjunction => symbols::DISJUNCTION,
            Self::Implication => symbols::IMPLICATION,
            Self::Equality => symbols::EQUALITY,
            Self::Universal => symbols::UNIVERSAL,
            Self::Existential => symbols::EXISTENTIAL,
        }
    }

    /// The number of children a node with the label has in a well-formed tree.
    pub fn arity(&self) -> usize {
        match self {
            Self::Variable(_) => 0,
            Self::Letter(_) | Self::Negation => 1,
            Self::Conjunction
            | Self::Disjunction
            | Self::Implication
            | Self::Equality
            | Self::Universal
            | Self::Existential => 2,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
