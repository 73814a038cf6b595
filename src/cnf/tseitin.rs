/*!
The Tseitin transformation.

Each binary or negated subformula is given a fresh auxiliary variable, and clauses are added which require the auxiliary to take the value of the subformula, given the variables of its immediate subformulas.
For an auxiliary `x` and subformulas `a` and `b`:

| Formula | Clauses                                       |
|---------|-----------------------------------------------|
| a ∧ b   | ¬x ∨ a, ¬x ∨ b, x ∨ ¬a ∨ ¬b                   |
| a ∨ b   | ¬x ∨ a ∨ b, x ∨ ¬a, x ∨ ¬b                    |
| a → b   | ¬x ∨ ¬a ∨ b, x ∨ a, x ∨ ¬b                    |
| a ↔ b   | ¬x ∨ ¬a ∨ b, ¬x ∨ a ∨ ¬b, x ∨ a ∨ b, x ∨ ¬a ∨ ¬b |
| ¬a      | ¬x ∨ ¬a, x ∨ a                                |

The variable of a whole formula is then asserted with a unit clause, and the result is satisfiable exactly when the formula is, while linear in the size of the formula.

Subformulas are encoded once within a transformation, so a subformula which occurs many times shares a single auxiliary.
The constants ⊤ and ⊥ are the literals of a single variable, itself fixed by a unit clause.
*/

use std::collections::HashMap;

use crate::{
    cnf::{CnfInstance, VariableMap, AUXILIARY_PREFIX, TRUE_NAME},
    misc::log::targets,
    structures::{
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::CnfError,
};

/// The state of a transformation, shared across each formula transformed.
struct Tseitin<'f> {
    variables: VariableMap,

    clauses: Vec<CClause>,

    /// The literal of each subformula encoded.
    encoded: HashMap<&'f Formula, CLiteral>,

    /// The count of auxiliary variables introduced.
    auxiliaries: usize,
}

impl<'f> Tseitin<'f> {
    fn new() -> Self {
        Tseitin {
            variables: VariableMap::default(),
            clauses: Vec::default(),
            encoded: HashMap::default(),
            auxiliaries: 0,
        }
    }

    fn fresh_auxiliary(&mut self) -> Result<CLiteral, CnfError> {
        self.auxiliaries += 1;
        let name = format!("{AUXILIARY_PREFIX}t{}", self.auxiliaries);
        let atom = self.variables.atom_for(&name)?;
        Ok(CLiteral::new(atom, true))
    }

    /// The literal of the variable fixed to true, fixed on first use.
    fn true_literal(&mut self) -> Result<CLiteral, CnfError> {
        if let Some(atom) = self.variables.atom_of(TRUE_NAME) {
            return Ok(CLiteral::new(atom, true));
        }
        let atom = self.variables.atom_for(TRUE_NAME)?;
        let literal = CLiteral::new(atom, true);
        self.clauses.push(vec![literal]);
        Ok(literal)
    }

    /// The literal whose value is the value of the formula, adding clauses as required.
    fn encode(&mut self, formula: &'f Formula) -> Result<CLiteral, CnfError> {
        if let Some(literal) = self.encoded.get(formula) {
            return Ok(*literal);
        }

        let literal = match formula {
            Formula::Variable(name) => {
                let atom = self.variables.atom_for(&name.to_string())?;
                CLiteral::new(atom, true)
            }

            Formula::Constant(true) => self.true_literal()?,

            Formula::Constant(false) => self.true_literal()?.negate(),

            Formula::Negation(inner) => {
                let a = self.encode(inner)?;
                let x = self.fresh_auxiliary()?;
                self.clauses.push(vec![-x, -a]);
                self.clauses.push(vec![x, a]);
                x
            }

            Formula::Conjunction(l, r) => {
                let (a, b) = (self.encode(l)?, self.encode(r)?);
                let x = self.fresh_auxiliary()?;
                self.clauses.push(vec![-x, a]);
                self.clauses.push(vec![-x, b]);
                self.clauses.push(vec![x, -a, -b]);
                x
            }

            Formula::Disjunction(l, r) => {
                let (a, b) = (self.encode(l)?, self.encode(r)?);
                let x = self.fresh_auxiliary()?;
                self.clauses.push(vec![-x, a, b]);
                self.clauses.push(vec![x, -a]);
                self.clauses.push(vec![x, -b]);
                x
            }

            Formula::Implication(l, r) => {
                let (a, b) = (self.encode(l)?, self.encode(r)?);
                let x = self.fresh_auxiliary()?;
                self.clauses.push(vec![-x, -a, b]);
                self.clauses.push(vec![x, a]);
                self.clauses.push(vec![x, -b]);
                x
            }

            Formula::Biconditional(l, r) => {
                let (a, b) = (self.encode(l)?, self.encode(r)?);
                let x = self.fresh_auxiliary()?;
                self.clauses.push(vec![-x, -a, b]);
                self.clauses.push(vec![-x, a, -b]);
                self.clauses.push(vec![x, a, b]);
                self.clauses.push(vec![x, -a, -b]);
                x
            }
        };

        self.encoded.insert(formula, literal);
        Ok(literal)
    }

    /// Encodes a formula, and asserts the formula (or its negation).
    fn assert(&mut self, formula: &'f Formula, polarity: bool) -> Result<(), CnfError> {
        let literal = self.encode(formula)?;
        let asserted = match polarity {
            true => literal,
            false => literal.negate(),
        };
        self.clauses.push(vec![asserted]);
        Ok(())
    }

    fn finish(self) -> CnfInstance {
        log::debug!(target: targets::CNF, "Transformed with {} atoms and {} clauses", self.variables.count(), self.clauses.len());
        CnfInstance {
            clauses: self.clauses,
            variables: self.variables,
        }
    }
}

/// A CNF instance satisfiable exactly when the formula is.
pub fn to_cnf(formula: &Formula) -> Result<CnfInstance, CnfError> {
    let mut tseitin = Tseitin::new();
    tseitin.assert(formula, true)?;
    Ok(tseitin.finish())
}

/// A single CNF instance for the conjunction of some formulas, with the last formula negated if `negate_last` holds.
///
/// Variables are shared across the formulas, so a variable has the same atom wherever it occurs.
pub fn convert_formula_set(formulas: &[Formula], negate_last: bool) -> Result<CnfInstance, CnfError> {
    let mut tseitin = Tseitin::new();
    let last = formulas.len().saturating_sub(1);
    for (index, formula) in formulas.iter().enumerate() {
        let polarity = !(negate_last && index == last);
        tseitin.assert(formula, polarity)?;
    }
    Ok(tseitin.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::formula::parse;

    #[test]
    fn clause_counts() {
        let cases = [("¬P", 3), ("P∧Q", 4), ("P∨Q", 4), ("P→Q", 4), ("P↔Q", 5), ("P", 1)];
        for (text, expected) in cases {
            let formula = parse(text).unwrap();
            let instance = to_cnf(&formula).unwrap();
            assert_eq!(instance.clauses.len(), expected, "{text}");
        }
    }

    #[test]
    fn shared_subformulas_are_encoded_once() {
        let formula = parse("(P∧Q)∨(P∧Q)").unwrap();
        let instance = to_cnf(&formula).unwrap();
        // P, Q, one auxiliary for the conjunction, one for the disjunction
        assert_eq!(instance.variable_count(), 4);
    }

    #[test]
    fn constants_share_a_variable() {
        let formula = parse("⊤∨⊥").unwrap();
        let instance = to_cnf(&formula).unwrap();
        assert_eq!(instance.variable_count(), 2);
        assert!(instance.variables.atom_of(TRUE_NAME).is_some());
        assert_eq!(instance.variables.formula_variables().count(), 0);
    }

    #[test]
    fn variables_are_shared_across_a_set() {
        let formulas = [parse("P→Q").unwrap(), parse("P").unwrap(), parse("Q").unwrap()];
        let instance = convert_formula_set(&formulas, true).unwrap();
        let q = instance.variables.atom_of("Q").unwrap() as CLiteral;

        assert_eq!(instance.variables.formula_variables().count(), 2);
        assert_eq!(instance.clauses.last(), Some(&vec![-q]));
    }
}
