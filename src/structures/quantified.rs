/*!
First-order formulas, as used by the quantifier rules.

The first-order language is a small extension of the propositional language:
- Predicates are uppercase letters applied to a (possibly empty) list of terms, e.g. `P`, `F(a)`, or `R(x,y)`.
- Terms are single lowercase letters.
  No distinction is made between constants and variables, other than whether the term is bound by some quantifier.
- Quantifiers bind as tightly as negation, so `∀x.P(x)→Q` is read as `(∀x.P(x))→Q`, and the body of a quantifier is wrapped in parentheses when it is a binary formula.

```rust
# use fitch_engine::parse::quantified::parse_first_order;
let formula = parse_first_order("∀x.(F(x)→∃y.R(x,y))").unwrap();
let instance = formula.as_quantified().unwrap().instantiate('y');

// The bound `y` is renamed, so the substituted term is not captured.
assert_eq!(instance.to_string(), "F(y)→∃z.R(y,z)");
```
*/

use std::collections::BTreeSet;

use crate::structures::formula::{Connective, BOTTOM, NOT, TOP};

/// A quantifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quantifier {
    Universal,
    Existential,
}

impl Quantifier {
    pub fn symbol(&self) -> char {
        match self {
            Self::Universal => '∀',
            Self::Existential => '∃',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '∀' => Some(Self::Universal),
            '∃' => Some(Self::Existential),
            _ => None,
        }
    }
}

/// A quantifier, the variable it binds, and the formula in its scope.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuantifiedFormula {
    pub quantifier: Quantifier,
    pub variable: char,
    pub body: Box<FoFormula>,
}

/// A first-order formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FoFormula {
    /// A predicate letter applied to terms, where an empty list of terms is a propositional atom.
    Predicate(char, Vec<char>),

    Constant(bool),

    Negation(Box<FoFormula>),

    Binary(Connective, Box<FoFormula>, Box<FoFormula>),

    Quantified(QuantifiedFormula),
}

/// Preference order when choosing a fresh term.
const FRESH_PREFERENCE: &str = "zyxwvutsrqponmlkjihgfedcba";

/// A lowercase letter not in `excluded`.
///
/// Letters are taken from the end of the alphabet first, as these are most often used for variables.
pub fn fresh_term(excluded: &BTreeSet<char>) -> char {
    FRESH_PREFERENCE
        .chars()
        .find(|letter| !excluded.contains(letter))
        .unwrap_or('ω')
}

impl QuantifiedFormula {
    /// The body of the quantified formula with `term` substituted for the bound variable.
    pub fn instantiate(&self, term: char) -> FoFormula {
        self.body.substitute(self.variable, term)
    }
}

impl FoFormula {
    pub fn as_quantified(&self) -> Option<&QuantifiedFormula> {
        match self {
            Self::Quantified(quantified) => Some(quantified),
            _ => None,
        }
    }

    /// Every term letter in the formula, whether free or bound.
    pub fn all_terms(&self) -> BTreeSet<char> {
        let mut terms = BTreeSet::default();
        self.collect_terms(&mut terms);
        terms
    }

    fn collect_terms(&self, terms: &mut BTreeSet<char>) {
        match self {
            Self::Predicate(_, arguments) => terms.extend(arguments.iter().copied()),
            Self::Constant(_) => {}
            Self::Negation(inner) => inner.collect_terms(terms),
            Self::Binary(_, l, r) => {
                l.collect_terms(terms);
                r.collect_terms(terms);
            }
            Self::Quantified(quantified) => {
                terms.insert(quantified.variable);
                quantified.body.collect_terms(terms);
            }
        }
    }

    /// Terms with some occurrence outside the scope of a quantifier binding the term.
    pub fn free_terms(&self) -> BTreeSet<char> {
        match self {
            Self::Predicate(_, arguments) => arguments.iter().copied().collect(),
            Self::Constant(_) => BTreeSet::default(),
            Self::Negation(inner) => inner.free_terms(),
            Self::Binary(_, l, r) => {
                let mut terms = l.free_terms();
                terms.extend(r.free_terms());
                terms
            }
            Self::Quantified(quantified) => {
                let mut terms = quantified.body.free_terms();
                terms.remove(&quantified.variable);
                terms
            }
        }
    }

    /// Capture-avoiding substitution of `term` for the free occurrences of `variable`.
    ///
    /// If `term` would be captured by some quantifier, the quantifier's variable is renamed to a fresh term first.
    pub fn substitute(&self, variable: char, term: char) -> FoFormula {
        match self {
            Self::Predicate(name, arguments) => Self::Predicate(
                *name,
                arguments
                    .iter()
                    .map(|argument| match *argument == variable {
                        true => term,
                        false => *argument,
                    })
                    .collect(),
            ),

            Self::Constant(value) => Self::Constant(*value),

            Self::Negation(inner) => Self::Negation(Box::new(inner.substitute(variable, term))),

            Self::Binary(connective, l, r) => Self::Binary(
                *connective,
                Box::new(l.substitute(variable, term)),
                Box::new(r.substitute(variable, term)),
            ),

            Self::Quantified(quantified) => {
                if quantified.variable == variable || !self.free_terms().contains(&variable) {
                    return self.clone();
                }

                let (bound, body) = match quantified.variable == term {
                    true => {
                        let mut excluded = quantified.body.all_terms();
                        excluded.insert(variable);
                        excluded.insert(term);
                        let renamed = fresh_term(&excluded);
                        (renamed, quantified.body.substitute(quantified.variable, renamed))
                    }
                    false => (quantified.variable, quantified.body.as_ref().clone()),
                };

                Self::Quantified(QuantifiedFormula {
                    quantifier: quantified.quantifier,
                    variable: bound,
                    body: Box::new(body.substitute(variable, term)),
                })
            }
        }
    }

    fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(..))
    }

    fn precedence(&self) -> u8 {
        match self {
            Self::Binary(connective, _, _) => connective.precedence(),
            _ => 5,
        }
    }
}

fn write_operand(f: &mut std::fmt::Formatter<'_>, formula: &FoFormula, wrap: bool) -> std::fmt::Result {
    match wrap {
        true => write!(f, "({formula})"),
        false => write!(f, "{formula}"),
    }
}

impl std::fmt::Display for FoFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Predicate(name, arguments) => match arguments.is_empty() {
                true => write!(f, "{name}"),
                false => {
                    let arguments = arguments.iter().map(char::to_string).collect::<Vec<_>>();
                    write!(f, "{name}({})", arguments.join(","))
                }
            },

            Self::Constant(true) => write!(f, "{TOP}"),

            Self::Constant(false) => write!(f, "{BOTTOM}"),

            Self::Negation(inner) => {
                write!(f, "{NOT}")?;
                write_operand(f, inner, inner.is_binary())
            }

            Self::Binary(connective, left, right) => {
                let own = connective.precedence();
                let (wrap_left, wrap_right) = match connective {
                    Connective::Conjunction | Connective::Disjunction => {
                        (left.precedence() < own, right.precedence() <= own)
                    }
                    Connective::Implication => (left.precedence() <= own, right.precedence() < own),
                    Connective::Biconditional => {
                        (left.precedence() <= own, right.precedence() <= own)
                    }
                };
                write_operand(f, left, wrap_left)?;
                write!(f, "{}", connective.symbol())?;
                write_operand(f, right, wrap_right)
            }

            Self::Quantified(quantified) => {
                write!(f, "{}{}.", quantified.quantifier.symbol(), quantified.variable)?;
                write_operand(f, &quantified.body, quantified.body.is_binary())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predicate(name: char, arguments: &[char]) -> FoFormula {
        FoFormula::Predicate(name, arguments.to_vec())
    }

    #[test]
    fn bound_occurrences_are_untouched() {
        let formula = FoFormula::Quantified(QuantifiedFormula {
            quantifier: Quantifier::Universal,
            variable: 'x',
            body: Box::new(predicate('P', &['x'])),
        });
        assert_eq!(formula.substitute('x', 'a'), formula);
    }

    #[test]
    fn capture_is_avoided() {
        // ∃y.R(x,y) with y for x
        let formula = FoFormula::Quantified(QuantifiedFormula {
            quantifier: Quantifier::Existential,
            variable: 'y',
            body: Box::new(predicate('R', &['x', 'y'])),
        });

        let substituted = formula.substitute('x', 'y');
        let Some(quantified) = substituted.as_quantified() else {
            panic!("substitution changed the shape of the formula");
        };

        assert_ne!(quantified.variable, 'y');
        assert_eq!(
            *quantified.body,
            predicate('R', &['y', quantified.variable])
        );
        assert!(substituted.free_terms().contains(&'y'));
    }
}
