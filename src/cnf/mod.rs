/*!
Conjunctive normal form, by the Tseitin transformation.

A [CNF instance](CnfInstance) is a list of [clauses](crate::structures::clause), together with a [variable map](VariableMap) from the names of variables to [atoms](crate::structures::atom).

Names are either:
- The name of a variable of some formula, e.g. `P`.
- The name of an auxiliary variable introduced by the transformation, e.g. `_t3`.
- The name of the variable fixed to true, used for the constants ⊤ and ⊥.

Auxiliary names begin with an underscore, and so never collide with the name of a formula variable.

```rust
# use fitch_engine::cnf::to_cnf;
# use fitch_engine::parse::formula::parse;
let formula = parse("(P ∧ Q) → P").unwrap();
let instance = to_cnf(&formula).unwrap();

// One auxiliary for each of ∧ and →, with three clauses each, and the root as a unit.
assert_eq!(instance.clauses.len(), 7);
assert_eq!(instance.variable_count(), 4);
assert!(instance.variables.atom_of("P").is_some());
```
*/

mod dimacs;
pub mod tseitin;

pub use tseitin::{convert_formula_set, to_cnf};

use std::collections::HashMap;

use crate::{
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
    },
    types::err::CnfError,
};

/// The prefix of auxiliary variable names.
pub const AUXILIARY_PREFIX: char = '_';

/// The name of the variable fixed to true.
pub const TRUE_NAME: &str = "_⊤";

/// A map between names of variables and atoms.
///
/// Atoms are assigned in order from 1, and are never reused.
#[derive(Clone, Debug, Default)]
pub struct VariableMap {
    by_name: HashMap<String, Atom>,

    /// The name of each atom, where the name of atom `a` is at index `a - 1`.
    names: Vec<String>,
}

impl VariableMap {
    /// The atom of a name, if the name has an atom.
    pub fn atom_of(&self, name: &str) -> Option<Atom> {
        self.by_name.get(name).copied()
    }

    /// The atom of a name, with a fresh atom for a name seen for the first time.
    pub fn atom_for(&mut self, name: &str) -> Result<Atom, CnfError> {
        if let Some(atom) = self.atom_of(name) {
            return Ok(atom);
        }

        let atom = match Atom::try_from(self.names.len() + 1) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(CnfError::AtomsExhausted),
        };

        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), atom);
        Ok(atom)
    }

    /// The count of atoms in the map.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Pairs of atoms and names of formula variables, in order of atom.
    pub fn formula_variables(&self) -> impl Iterator<Item = (Atom, &str)> {
        self.names
            .iter()
            .enumerate()
            .filter(|(_, name)| !is_auxiliary(name))
            .map(|(index, name)| (index as Atom + 1, name.as_str()))
    }
}

/// Whether a name is that of a variable introduced by the transformation.
pub fn is_auxiliary(name: &str) -> bool {
    name.starts_with(AUXILIARY_PREFIX)
}

/// A formula in conjunctive normal form.
#[derive(Clone, Debug, Default)]
pub struct CnfInstance {
    pub clauses: Vec<CClause>,

    pub variables: VariableMap,
}

impl CnfInstance {
    /// The count of variables of the instance, including auxiliary variables.
    pub fn variable_count(&self) -> usize {
        self.variables.count()
    }
}
