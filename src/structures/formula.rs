/*!
Propositional formulas, as owned trees.

A formula is built by the [parser](crate::parse::formula) or directly, and is never mutated after construction.
Precedence is a property of how a formula is built, and printing a formula inserts only those parentheses required to rebuild the same tree on parsing:

| Connective | Precedence | Associativity |
|------------|------------|---------------|
| ¬          | highest    | prefix        |
| ∧          |            | left          |
| ∨          |            | left          |
| →          |            | right         |
| ↔          | lowest     | none          |

```rust
# use fitch_engine::structures::formula::Formula;
let p = Formula::variable('P');
let q = Formula::variable('Q');
let r = Formula::variable('R');

let formula = Formula::implication(
    Formula::conjunction(p.clone(), q.clone()),
    Formula::implication(q, Formula::negation(r)),
);
assert_eq!(formula.to_string(), "P∧Q→Q→¬R");

let nested = Formula::conjunction(p.clone(), Formula::disjunction(p.clone(), p));
assert_eq!(nested.to_string(), "P∧(P∨P)");
```

The printed form of a formula is its *canonical string*, which is the form used for comparison of formulas in proofs.
*/

use std::collections::BTreeSet;

/// A propositional formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Formula {
    /// An atom, named by a single uppercase letter.
    Variable(char),

    /// ⊤ (true) or ⊥ (false).
    Constant(bool),

    Negation(Box<Formula>),

    Conjunction(Box<Formula>, Box<Formula>),

    Disjunction(Box<Formula>, Box<Formula>),

    Implication(Box<Formula>, Box<Formula>),

    Biconditional(Box<Formula>, Box<Formula>),
}

/// The binary connectives, in order of increasing binding strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Connective {
    Biconditional,
    Implication,
    Disjunction,
    Conjunction,
}

impl Connective {
    /// The canonical symbol of the connective.
    pub fn symbol(&self) -> char {
        match self {
            Self::Conjunction => '∧',
            Self::Disjunction => '∨',
            Self::Implication => '→',
            Self::Biconditional => '↔',
        }
    }

    /// The connective of a canonical symbol, if the symbol is that of a binary connective.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '∧' => Some(Self::Conjunction),
            '∨' => Some(Self::Disjunction),
            '→' => Some(Self::Implication),
            '↔' => Some(Self::Biconditional),
            _ => None,
        }
    }

    /// The precedence of the connective, where a higher value binds more tightly.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Biconditional => 1,
            Self::Implication => 2,
            Self::Disjunction => 3,
            Self::Conjunction => 4,
        }
    }
}

/// The canonical symbol for ⊤.
pub const TOP: char = '⊤';

/// The canonical symbol for ⊥.
pub const BOTTOM: char = '⊥';

/// The canonical symbol for negation.
pub const NOT: char = '¬';

/// Precedence of atoms, constants, and negations.
const ATOMIC_PRECEDENCE: u8 = 5;

impl Formula {
    pub fn variable(name: char) -> Self {
        Self::Variable(name)
    }

    pub fn top() -> Self {
        Self::Constant(true)
    }

    pub fn bottom() -> Self {
        Self::Constant(false)
    }

    pub fn negation(formula: Formula) -> Self {
        Self::Negation(Box::new(formula))
    }

    pub fn conjunction(left: Formula, right: Formula) -> Self {
        Self::Conjunction(Box::new(left), Box::new(right))
    }

    pub fn disjunction(left: Formula, right: Formula) -> Self {
        Self::Disjunction(Box::new(left), Box::new(right))
    }

    pub fn implication(left: Formula, right: Formula) -> Self {
        Self::Implication(Box::new(left), Box::new(right))
    }

    pub fn biconditional(left: Formula, right: Formula) -> Self {
        Self::Biconditional(Box::new(left), Box::new(right))
    }

    /// The negation of the formula, as a fresh formula.
    pub fn negate(&self) -> Self {
        Self::negation(self.clone())
    }

    /// The main connective and immediate subformulas of a binary formula.
    pub fn as_binary(&self) -> Option<(Connective, &Formula, &Formula)> {
        match self {
            Self::Conjunction(l, r) => Some((Connective::Conjunction, l.as_ref(), r.as_ref())),
            Self::Disjunction(l, r) => Some((Connective::Disjunction, l.as_ref(), r.as_ref())),
            Self::Implication(l, r) => Some((Connective::Implication, l.as_ref(), r.as_ref())),
            Self::Biconditional(l, r) => Some((Connective::Biconditional, l.as_ref(), r.as_ref())),
            _ => None,
        }
    }

    /// The negated subformula, if the formula is a negation.
    pub fn as_negation(&self) -> Option<&Formula> {
        match self {
            Self::Negation(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }

    pub fn is_bottom(&self) -> bool {
        matches!(self, Self::Constant(false))
    }

    /// The names of all atoms in the formula, in order.
    pub fn atoms(&self) -> BTreeSet<char> {
        let mut atoms = BTreeSet::default();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut BTreeSet<char>) {
        match self {
            Self::Variable(name) => {
                atoms.insert(*name);
            }
            Self::Constant(_) => {}
            Self::Negation(inner) => inner.collect_atoms(atoms),
            Self::Conjunction(l, r)
            | Self::Disjunction(l, r)
            | Self::Implication(l, r)
            | Self::Biconditional(l, r) => {
                l.collect_atoms(atoms);
                r.collect_atoms(atoms);
            }
        }
    }

    /// All subformulas of the formula, including the formula itself.
    pub fn subformulas(&self) -> BTreeSet<Formula> {
        let mut subformulas = BTreeSet::default();
        self.collect_subformulas(&mut subformulas);
        subformulas
    }

    fn collect_subformulas(&self, subformulas: &mut BTreeSet<Formula>) {
        if !subformulas.insert(self.clone()) {
            return;
        }
        match self {
            Self::Variable(_) | Self::Constant(_) => {}
            Self::Negation(inner) => inner.collect_subformulas(subformulas),
            Self::Conjunction(l, r)
            | Self::Disjunction(l, r)
            | Self::Implication(l, r)
            | Self::Biconditional(l, r) => {
                l.collect_subformulas(subformulas);
                r.collect_subformulas(subformulas);
            }
        }
    }

    /// The value of the formula, given a value for each atom.
    ///
    /// Atoms without a value are read as false.
    pub fn evaluate(&self, value_of: &impl Fn(char) -> Option<bool>) -> bool {
        match self {
            Self::Variable(name) => value_of(*name).unwrap_or(false),
            Self::Constant(value) => *value,
            Self::Negation(inner) => !inner.evaluate(value_of),
            Self::Conjunction(l, r) => l.evaluate(value_of) && r.evaluate(value_of),
            Self::Disjunction(l, r) => l.evaluate(value_of) || r.evaluate(value_of),
            Self::Implication(l, r) => !l.evaluate(value_of) || r.evaluate(value_of),
            Self::Biconditional(l, r) => l.evaluate(value_of) == r.evaluate(value_of),
        }
    }

    fn precedence(&self) -> u8 {
        match self.as_binary() {
            Some((connective, _, _)) => connective.precedence(),
            None => ATOMIC_PRECEDENCE,
        }
    }
}

/// Writes `formula`, wrapped in parentheses if `wrap` holds.
fn write_operand(f: &mut std::fmt::Formatter<'_>, formula: &Formula, wrap: bool) -> std::fmt::Result {
    match wrap {
        true => write!(f, "({formula})"),
        false => write!(f, "{formula}"),
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "{name}"),
            Self::Constant(true) => write!(f, "{TOP}"),
            Self::Constant(false) => write!(f, "{BOTTOM}"),
            Self::Negation(inner) => {
                write!(f, "{NOT}")?;
                write_operand(f, inner, inner.precedence() < ATOMIC_PRECEDENCE)
            }
            _ => {
                let Some((connective, left, right)) = self.as_binary() else {
                    return Ok(());
                };
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_parentheses() {
        let p = Formula::variable('P');
        let q = Formula::variable('Q');

        let left_nested = Formula::implication(Formula::implication(p.clone(), q.clone()), p.clone());
        assert_eq!(left_nested.to_string(), "(P→Q)→P");

        let negated_binary = Formula::negation(Formula::disjunction(p.clone(), q.clone()));
        assert_eq!(negated_binary.to_string(), "¬(P∨Q)");

        let chained = Formula::biconditional(Formula::biconditional(p.clone(), q.clone()), p);
        assert_eq!(chained.to_string(), "(P↔Q)↔P");
    }

    #[test]
    fn evaluation() {
        let formula = Formula::implication(Formula::variable('P'), Formula::variable('Q'));
        assert!(formula.evaluate(&|_| Some(false)));
        assert!(!formula.evaluate(&|atom| Some(atom == 'P')));
    }
}
