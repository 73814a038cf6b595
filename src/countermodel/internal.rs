/*!
An in-process SAT solver, by DPLL.

The solver keeps a single valuation, and a trail of the literals valued, in order, each marked as either a decision or a consequence.

- Each clause which asserts a literal on the valuation has the literal valued, until no clause asserts a literal, or some clause is false.
- If some clause is false, the trail is undone to the most recent decision, and the decision is flipped (as a consequence).
  If there is no decision on the trail, the instance is unsatisfiable.
- Otherwise, the first atom without a value is valued false, as a decision.
  If every atom has a value, the valuation satisfies the instance.

As decisions are flipped at most once, and only in order, the search is exhaustive.
*/

use crate::{
    cnf::CnfInstance,
    countermodel::{SatBackend, SatOutcome},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::{fresh_valuation, CValuation, Valuation},
    },
    types::err::{CnfError, SolverError},
};

/// The in-process solver.
#[derive(Clone, Copy, Debug, Default)]
pub struct InternalSolver;

impl SatBackend for InternalSolver {
    fn solve(&self, instance: &CnfInstance) -> Result<SatOutcome, SolverError> {
        let atom_count =
            Atom::try_from(instance.variable_count()).map_err(|_| CnfError::AtomsExhausted)?;
        let mut dpll = Dpll::new(&instance.clauses, atom_count);
        Ok(dpll.solve())
    }
}

/// How a literal on the trail was valued.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Source {
    Decision,
    Consequence,
}

struct Dpll<'c> {
    clauses: &'c [CClause],
    valuation: CValuation,
    trail: Vec<(CLiteral, Source)>,
}

impl<'c> Dpll<'c> {
    fn new(clauses: &'c [CClause], atom_count: Atom) -> Self {
        Dpll {
            clauses,
            valuation: fresh_valuation(atom_count),
            trail: Vec::default(),
        }
    }

    fn value(&mut self, literal: CLiteral, source: Source) {
        self.valuation[literal.atom() as usize] = Some(literal.polarity());
        self.trail.push((literal, source));
    }

    /// Values asserted literals, until a fixed point, or returns false if some clause is false.
    fn propagate(&mut self) -> bool {
        loop {
            let mut progress = false;

            for clause in self.clauses {
                match clause.satisfied_on(&self.valuation) {
                    Some(true) => {}

                    Some(false) => return false,

                    None => {
                        if let Some(literal) = clause.asserts(&self.valuation) {
                            self.value(literal, Source::Consequence);
                            progress = true;
                        }
                    }
                }
            }

            if !progress {
                return true;
            }
        }
    }

    /// Undoes the trail to the most recent decision and flips the decision, or returns false if there is no decision.
    fn backtrack(&mut self) -> bool {
        while let Some((literal, source)) = self.trail.pop() {
            self.valuation[literal.atom() as usize] = None;
            if source == Source::Decision {
                self.value(literal.negate(), Source::Consequence);
                return true;
            }
        }
        false
    }

    fn solve(&mut self) -> SatOutcome {
        'search_loop: loop {
            if !self.propagate() {
                match self.backtrack() {
                    true => continue 'search_loop,
                    false => return SatOutcome::Unsatisfiable,
                }
            }

            let next_atom = self.valuation.unvalued_atoms().next();
            match next_atom {
                Some(atom) => self.value(CLiteral::new(atom, false), Source::Decision),
                None => return SatOutcome::Satisfiable(self.valuation.clone()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(clauses: Vec<CClause>, atom_count: Atom) -> SatOutcome {
        Dpll::new(&clauses, atom_count).solve()
    }

    #[test]
    fn satisfiable() {
        let clauses = vec![vec![1, 2], vec![-1, 3], vec![-3, -2], vec![2, 3]];
        let SatOutcome::Satisfiable(valuation) = solve(clauses.clone(), 3) else {
            panic!("expected a satisfying valuation");
        };
        assert_eq!(valuation.unvalued_atoms().count(), 0);
        for clause in &clauses {
            assert_eq!(clause.satisfied_on(&valuation), Some(true));
        }
    }

    #[test]
    fn unsatisfiable() {
        let clauses = vec![vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]];
        assert_eq!(solve(clauses, 2), SatOutcome::Unsatisfiable);
    }

    #[test]
    fn empty_clause() {
        assert_eq!(solve(vec![vec![]], 1), SatOutcome::Unsatisfiable);
    }

    #[test]
    fn empty_instance() {
        assert_eq!(solve(vec![], 0), SatOutcome::Satisfiable(vec![Some(true)]));
    }
}
