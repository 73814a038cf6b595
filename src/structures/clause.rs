//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use fitch_engine::structures::clause::Clause;
//! let clause = vec![3, -1, 2];
//!
//! assert_eq!(clause.as_dimacs(true), " 3 -1  2 0");
//!
//! let valuation = vec![Some(true), Some(true), Some(false), Some(false)];
//! assert_eq!(clause.satisfied_on(&valuation), Some(false));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use crate::structures::{
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// Whether the clause is satisfied on the valuation.
    /// - Some(true), if some literal agrees with the valuation.
    /// - Some(false), if every literal disagrees with the valuation.
    /// - None, otherwise (some atom has no value and no literal agrees).
    fn satisfied_on(&self, valuation: &impl Valuation) -> Option<bool>;

    /// The literal asserted by the clause on a given valuation, if one such literal exists.
    ///
    /// That is, Some(*l*) if *l* has no value on the valuation and every other literal of the clause conflicts with the valuation.
    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral>;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = String::new();
        for literal in self.literals() {
            match literal.polarity() {
                true => dimacs_string.push_str(format!(" {literal} ").as_str()),
                false => dimacs_string.push_str(format!("{literal} ").as_str()),
            };
        }
        if zero {
            dimacs_string += "0";
            dimacs_string
        } else {
            dimacs_string.pop();
            dimacs_string
        }
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> Option<bool> {
        let mut unvalued = false;
        for literal in self.literals() {
            match valuation.value_of(literal.atom()).flatten() {
                Some(value) if value == literal.polarity() => return Some(true),
                Some(_) => {}
                None => unvalued = true,
            }
        }
        match unvalued {
            true => None,
            false => Some(false),
        }
    }

    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        let mut asserted_literal = None;
        for literal in self.literals() {
            match valuation.value_of(literal.atom()).flatten() {
                Some(value) if value == literal.polarity() => return None,
                Some(_) => continue,
                None if asserted_literal.is_none() => asserted_literal = Some(literal),
                None => return None,
            }
        }
        asserted_literal
    }
}
