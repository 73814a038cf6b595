/*!
Parsers for formulas, premise lists, and proofs.

- [normalize](normalize::normalize) maps the accepted aliases of each symbol to a canonical symbol.
- [parse](formula::parse) builds a [Formula](crate::structures::formula::Formula) from text.
- [parse_first_order](quantified::parse_first_order) builds a first-order formula, for the quantifier rules.
- [parse_proof](proof::parse_proof) builds a list of [proof lines](crate::structures::proof_line::ProofLine).

# Canonical strings

Formulas in a proof are compared as strings.
The [canonical form](canonical_form) of some formula text is the text of the formula when parsed and printed with minimal parentheses, so differences in spacing, aliases, or redundant parentheses do not matter:

```rust
# use fitch_engine::parse::canonical_form;
assert_eq!(canonical_form("((P & Q)) -> (R)"), canonical_form("P∧Q→R"));
assert_eq!(canonical_form("∀x (F(x) → G(x))"), "∀x.(F(x)→G(x))");

// Text which does not parse is kept in normal form.
assert_eq!(canonical_form("P & & Q"), "P∧∧Q");
```
*/

pub mod formula;
pub mod normalize;
pub mod proof;
pub mod quantified;

use crate::types::err::SyntaxError;

/// The canonical string of some formula text, or the syntax error found when parsing the text propositionally.
///
/// Text which is not a propositional formula is tried as a first-order formula.
pub fn try_canonical_form(text: &str) -> Result<String, SyntaxError> {
    let normal = normalize::normalize(text);
    match formula::parse_normal(&normal) {
        Ok(formula) => Ok(formula.to_string()),
        Err(propositional_error) => match quantified::parse_first_order(&normal) {
            Ok(formula) => Ok(formula.to_string()),
            Err(_) => Err(propositional_error),
        },
    }
}

/// The canonical string of some formula text, falling back to the normal form of the text if the text does not parse.
pub fn canonical_form(text: &str) -> String {
    match try_canonical_form(text) {
        Ok(canonical) => canonical,
        Err(_) => normalize::normalize(text),
    }
}

/// Splits a comma separated list of premises, ignoring commas inside parentheses.
///
/// ```rust
/// # use fitch_engine::parse::split_premises;
/// assert_eq!(split_premises("P, (P→Q), R(a,b)"), vec!["P", "(P→Q)", "R(a,b)"]);
/// assert!(split_premises("  ").is_empty());
/// ```
pub fn split_premises(gamma: &str) -> Vec<String> {
    let mut premises = Vec::default();
    let mut current = String::default();
    let mut depth: usize = 0;

    for character in gamma.chars() {
        match character {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                premises.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(character);
    }
    premises.push(current);

    premises
        .into_iter()
        .map(|premise| premise.trim().to_string())
        .filter(|premise| !premise.is_empty())
        .collect()
}
