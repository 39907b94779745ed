/*!
Normalization of the surface syntax of a formula.

The surface syntax leaves some structure implicit:
- A sentence letter is applied to a variable by juxtaposition, e.g. `Px`.
- The scope of a negation or a quantifier prefix extends over the expression which follows, e.g. `-@x(Px)`.

Normalization makes this structure explicit by inserting parentheses, so that:
- Each sentence letter and variable pair is enclosed in parentheses, e.g. `(Px)`.
- Each negation and each quantifier prefix is enclosed in parentheses together with its scope, e.g. `(-(@x(Px)))`.

The scope of a prefix is the parenthesised group immediately following the prefix or, if the prefix is followed by a further prefix, the scope of that prefix.
Parentheses are inserted left to right, and the scope of a prefix is found on the string as revised by every insertion to the left of the prefix, so stacked prefixes nest as expected.

Structure which is already explicit is left as is, and so normalization is idempotent.

```rust
# use otter_monadic::builder::normalize::normalize;
assert_eq!(normalize("Px > Px").unwrap(), "(Px)>(Px)");
assert_eq!(normalize("-@x!y(x=y)").unwrap(), "(-(@x(!y(x=y))))");

let normalized = normalize("@x(Px+-Px)").unwrap();
assert_eq!(normalized, "(@x((Px)+(-(Px))))");
assert_eq!(normalize(&normalized).unwrap(), normalized);
```

# Errors

Before any insertion the string is checked for:
- Balanced parentheses.
- A variable immediately after each quantifier symbol and each sentence letter.

And a prefix without a scope is an error.
Positions of errors are offsets into the string with whitespace removed.
*/

use crate::{
    misc::log::targets::{self},
    structures::label::{is_letter, is_quantifier, is_variable, symbols},
    types::err::{self},
};

/// The normalized form of a formula.
pub fn normalize(formula: &str) -> Result<String, err::SyntaxError> {
    let stripped: Vec<char> = formula.chars().filter(|c| !c.is_whitespace()).collect();

    check_parentheses(&stripped)?;
    check_juxtaposition(&stripped)?;

    let letters_wrapped = wrap_letters(&stripped);
    let normalized = wrap_prefixes(letters_wrapped)?;

    let normalized = normalized.into_iter().collect::<String>();
    log::trace!(target: targets::NORMALIZE, "Normalized {formula} to {normalized}");
    Ok(normalized)
}

/// The index of the parenthesis matching the parenthesis at `open`.
pub fn matching_parenthesis(string: &[char], open: usize) -> Result<usize, err::SyntaxError> {
    let mut depth: usize = 0;
    for (index, character) in string.iter().enumerate().skip(open) {
        match *character {
            symbols::OPEN => depth += 1,
            symbols::CLOSE => match depth {
                0 => return Err(err::SyntaxError::UnmatchedClose { position: index }),
                1 => return Ok(index),
                _ => depth -= 1,
            },
            _ => {}
        }
    }
    Err(err::SyntaxError::UnmatchedOpen { position: open })
}

fn check_parentheses(string: &[char]) -> Result<(), err::SyntaxError> {
    let mut open = Vec::default();
    for (index, character) in string.iter().enumerate() {
        match *character {
            symbols::OPEN => open.push(index),
            symbols::CLOSE => {
                if open.pop().is_none() {
                    return Err(err::SyntaxError::UnmatchedClose { position: index });
                }
            }
            _ => {}
        }
    }

    match open.first() {
        Some(position) => Err(err::SyntaxError::UnmatchedOpen {
            position: *position,
        }),
        None => Ok(()),
    }
}

fn check_juxtaposition(string: &[char]) -> Result<(), err::SyntaxError> {
    for (index, character) in string.iter().enumerate() {
        let variable_follows = string.get(index + 1).is_some_and(|c| is_variable(*c));

        if is_quantifier(*character) && !variable_follows {
            return Err(err::SyntaxError::QuantifierVariable { position: index });
        }
        if is_letter(*character) && !variable_follows {
            return Err(err::SyntaxError::LetterVariable { position: index });
        }
    }
    Ok(())
}

/// Encloses each unenclosed letter and variable pair in parentheses.
fn wrap_letters(string: &[char]) -> Vec<char> {
    let mut wrapped = Vec::with_capacity(string.len());
    let mut index = 0;

    while index < string.len() {
        let character = string[index];

        // Safe, as juxtaposition has been checked.
        if is_letter(character) {
            let variable = string[index + 1];

            let enclosed = index > 0
                && string[index - 1] == symbols::OPEN
                && string.get(index + 2) == Some(&symbols::CLOSE);

            match enclosed {
                true => wrapped.extend([character, variable]),
                false => wrapped.extend([symbols::OPEN, character, variable, symbols::CLOSE]),
            }
            index += 2;
        } else {
            wrapped.push(character);
            index += 1;
        }
    }
    wrapped
}

/// The length of the prefix at the given index, or zero if there is no prefix.
fn prefix_length(string: &[char], index: usize) -> usize {
    match string.get(index) {
        Some(&symbols::NEGATION) => 1,
        Some(q) if is_quantifier(*q) && string.get(index + 1).is_some_and(|v| is_variable(*v)) => 2,
        _ => 0,
    }
}

/// The index of the last character in the scope of the prefix at the given index.
fn scope_end(string: &[char], index: usize) -> Result<usize, err::SyntaxError> {
    let mut prefix = index;
    loop {
        let next = prefix + prefix_length(string, prefix);
        match string.get(next) {
            Some(&symbols::OPEN) => return matching_parenthesis(string, next),
            Some(_) if prefix_length(string, next) > 0 => prefix = next,
            _ => return Err(err::SyntaxError::UnscopedOperator { position: index }),
        }
    }
}

/// Encloses each unenclosed prefix, together with its scope, in parentheses.
fn wrap_prefixes(mut string: Vec<char>) -> Result<Vec<char>, err::SyntaxError> {
    let mut index = 0;

    while index < string.len() {
        if prefix_length(&string, index) > 0 {
            let end = scope_end(&string, index)?;

            let enclosed = index > 0
                && string[index - 1] == symbols::OPEN
                && matching_parenthesis(&string, index - 1)? == end + 1;

            if !enclosed {
                string.insert(end + 1, symbols::CLOSE);
                string.insert(index, symbols::OPEN);
                // Step over the inserted parenthesis to remain on the prefix.
                index += 1;
            }
        }
        index += 1;
    }
    Ok(string)
}
