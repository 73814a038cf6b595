/*!
The shape of a canonical formula string.

Rules are checked on canonical strings, and these are decomposed at their main connective rather than parsed.
As canonical strings carry minimal parentheses, the main connective of a string is the connective of lowest precedence outside of all parentheses, and:
- A biconditional outside of parentheses is unique.
- Implication associates to the right, so the main implication is the first.
- Conjunction and disjunction associate to the left, so the main conjunction or disjunction is the last.

Negations and quantifiers have no effect on the depth of a connective, as a binary formula in the scope of either is always in parentheses.

```rust
# use fitch_engine::validate::shape::{main_connective, negation_of};
# use fitch_engine::structures::formula::Connective;
assert_eq!(main_connective("(P→Q)→P∨R"), Some((Connective::Implication, "P→Q", "P∨R")));
assert_eq!(main_connective("¬(P∧Q)"), None);
assert_eq!(negation_of("¬(P∧Q)"), Some("P∧Q"));
assert_eq!(negation_of("¬P∧Q"), None);
```
*/

use crate::structures::formula::{Connective, NOT};

/// Precedence of strings without a main connective.
const ATOMIC_PRECEDENCE: u8 = 5;

/// The string without parentheses which enclose the whole of the string.
pub fn strip_outer(mut s: &str) -> &str {
    loop {
        s = s.trim();
        if !(s.starts_with('(') && s.ends_with(')')) {
            return s;
        }

        let mut depth = 0_usize;
        let mut closes_early = false;
        let last = s.len() - 1;
        for (index, character) in s.char_indices() {
            match character {
                '(' => depth += 1,
                ')' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 && index != last {
                        closes_early = true;
                        break;
                    }
                }
                _ => {}
            }
        }

        match closes_early {
            true => return s,
            false => s = &s[1..last],
        }
    }
}

/// The main connective of a string and the strings either side of the connective, if the string is binary.
pub fn main_connective(s: &str) -> Option<(Connective, &str, &str)> {
    let s = strip_outer(s);

    // The first and last occurrence of each connective outside of parentheses.
    let mut first: [Option<usize>; 4] = [None; 4];
    let mut last: [Option<usize>; 4] = [None; 4];

    let mut depth = 0_usize;
    for (index, character) in s.char_indices() {
        match character {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => {
                if let Some(connective) = Connective::from_symbol(character) {
                    let slot = connective.precedence() as usize - 1;
                    first[slot].get_or_insert(index);
                    last[slot] = Some(index);
                }
            }
            _ => {}
        }
    }

    let (connective, index) = [
        (Connective::Biconditional, first[0]),
        (Connective::Implication, first[1]),
        (Connective::Disjunction, last[2]),
        (Connective::Conjunction, last[3]),
    ]
    .into_iter()
    .find_map(|(connective, index)| index.map(|index| (connective, index)))?;

    let width = connective.symbol().len_utf8();
    Some((
        connective,
        strip_outer(&s[..index]),
        strip_outer(&s[index + width..]),
    ))
}

/// The string negated by a string, if the string is a negation.
pub fn negation_of(s: &str) -> Option<&str> {
    let s = strip_outer(s);
    if main_connective(s).is_some() {
        return None;
    }
    s.strip_prefix(NOT).map(strip_outer)
}

/// Whether the second string is the negation of the first.
pub fn is_negation_of(s: &str, negation: &str) -> bool {
    negation_of(negation).is_some_and(|negated| negated == strip_outer(s))
}

fn precedence(s: &str) -> u8 {
    match main_connective(s) {
        Some((connective, _, _)) => connective.precedence(),
        None => ATOMIC_PRECEDENCE,
    }
}

fn wrapped(s: &str, wrap: bool) -> String {
    match wrap {
        true => format!("({s})"),
        false => s.to_string(),
    }
}

/// The canonical string of the negation of a canonical string.
pub fn negate(s: &str) -> String {
    let s = strip_outer(s);
    format!("{NOT}{}", wrapped(s, precedence(s) < ATOMIC_PRECEDENCE))
}

/// The canonical string of a binary formula, from the canonical strings of its parts.
pub fn join(connective: Connective, left: &str, right: &str) -> String {
    let (left, right) = (strip_outer(left), strip_outer(right));
    let own = connective.precedence();
    let (wrap_left, wrap_right) = match connective {
        Connective::Conjunction | Connective::Disjunction => {
            (precedence(left) < own, precedence(right) <= own)
        }
        Connective::Implication => (precedence(left) <= own, precedence(right) < own),
        Connective::Biconditional => (precedence(left) <= own, precedence(right) <= own),
    };
    format!(
        "{}{}{}",
        wrapped(left, wrap_left),
        connective.symbol(),
        wrapped(right, wrap_right)
    )
}

/// Whether two strings are the same formula, ignoring outer parentheses.
pub fn same(a: &str, b: &str) -> bool {
    strip_outer(a) == strip_outer(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::canonical_form;

    #[test]
    fn outer_parentheses() {
        assert_eq!(strip_outer("((P∧Q))"), "P∧Q");
        assert_eq!(strip_outer("(P→Q)→(Q→P)"), "(P→Q)→(Q→P)");
    }

    #[test]
    fn tie_breaks() {
        assert_eq!(
            main_connective("P→Q→R"),
            Some((Connective::Implication, "P", "Q→R"))
        );
        assert_eq!(
            main_connective("P∨Q∨R"),
            Some((Connective::Disjunction, "P∨Q", "R"))
        );
        assert_eq!(
            main_connective("P∧Q∨R∧S"),
            Some((Connective::Disjunction, "P∧Q", "R∧S"))
        );
        assert_eq!(
            main_connective("P→Q↔¬R"),
            Some((Connective::Biconditional, "P→Q", "¬R"))
        );
        assert_eq!(main_connective("∀x.(F(x)→G(x))"), None);
    }

    #[test]
    fn built_strings_are_canonical() {
        let cases = [
            (Connective::Conjunction, "P∨Q", "R"),
            (Connective::Implication, "P→Q", "P"),
            (Connective::Implication, "P", "Q→R"),
            (Connective::Disjunction, "P", "Q∨R"),
            (Connective::Biconditional, "P↔Q", "R"),
        ];
        for (connective, left, right) in cases {
            let joined = join(connective, left, right);
            assert_eq!(joined, canonical_form(&joined));
        }

        assert_eq!(negate("P∧Q"), "¬(P∧Q)");
        assert_eq!(negate("¬P"), "¬¬P");
    }
}
