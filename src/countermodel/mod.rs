/*!
Countermodels, from a SAT backend.

A countermodel of an argument is a valuation of the variables of the argument on which each premise is true and the conclusion is false.
The search for a countermodel is a search for a satisfying valuation of the [CNF instance](crate::cnf::CnfInstance) of the premises together with the negated conclusion.

The instance is handed to some [SatBackend]:
- An [ExternalSolver], which runs some DIMACS solver (by default, `minisat`) as a subprocess.
- An [InternalSolver], which decides the instance in-process.

```rust
# use fitch_engine::config::{Config, SatBackendKind};
# use fitch_engine::countermodel::find_countermodel;
# use fitch_engine::parse::formula::parse;
let mut config = Config::default();
config.sat.backend.value = SatBackendKind::Internal;

let premises = [parse("P→Q").unwrap()];
let conclusion = parse("P").unwrap();

let countermodel = find_countermodel(&premises, &conclusion, &config).unwrap();
assert_eq!(countermodel.get("P"), Some(&false));

let premises = [parse("P").unwrap(), parse("P→Q").unwrap()];
let conclusion = parse("Q").unwrap();
assert!(find_countermodel(&premises, &conclusion, &config).is_none());
```

Any failure to obtain an answer from a backend is logged, and read as there being no countermodel.
*/

mod external;
pub use external::ExternalSolver;

mod internal;
pub use internal::InternalSolver;

use std::collections::BTreeMap;

use crate::{
    cnf::{convert_formula_set, CnfInstance},
    config::{Config, SatBackendKind},
    misc::log::targets,
    structures::{
        formula::Formula,
        valuation::{CValuation, Valuation},
    },
    types::err::{ErrorKind, SolverError},
};

/// A value for each variable of an argument, by name.
pub type Countermodel = BTreeMap<String, bool>;

/// The answer of a SAT backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatOutcome {
    /// The instance is satisfiable, on the given valuation.
    Satisfiable(CValuation),

    Unsatisfiable,
}

/// Something which decides the satisfiability of a CNF instance.
pub trait SatBackend {
    fn solve(&self, instance: &CnfInstance) -> Result<SatOutcome, SolverError>;
}

/// The backend selected by a configuration.
pub fn backend_for(config: &Config) -> Box<dyn SatBackend> {
    match config.sat.backend.value {
        SatBackendKind::External => Box::new(ExternalSolver::new(
            &config.sat.solver_path,
            config.sat.timeout.value,
        )),
        SatBackendKind::Internal => Box::new(InternalSolver),
    }
}

/// A countermodel to the argument from the premises to the conclusion, if one is found by the configured backend.
pub fn find_countermodel(
    premises: &[Formula],
    conclusion: &Formula,
    config: &Config,
) -> Option<Countermodel> {
    find_countermodel_with(backend_for(config).as_ref(), premises, conclusion)
}

/// As [find_countermodel], with a given backend.
pub fn find_countermodel_with(
    backend: &dyn SatBackend,
    premises: &[Formula],
    conclusion: &Formula,
) -> Option<Countermodel> {
    match try_find_countermodel(backend, premises, conclusion) {
        Ok(countermodel) => countermodel,
        Err(e) => {
            log::warn!(target: targets::COUNTERMODEL, "{e}");
            None
        }
    }
}

/// A countermodel to the argument, none if the argument is valid, or an error if the backend gave no answer.
///
/// A valuation which fails to witness the invalidity of the argument is discarded.
pub fn try_find_countermodel(
    backend: &dyn SatBackend,
    premises: &[Formula],
    conclusion: &Formula,
) -> Result<Option<Countermodel>, ErrorKind> {
    let mut formulas = premises.to_vec();
    formulas.push(conclusion.clone());

    let instance = convert_formula_set(&formulas, true)?;

    let valuation = match backend.solve(&instance)? {
        SatOutcome::Satisfiable(valuation) => valuation,

        SatOutcome::Unsatisfiable => {
            log::debug!(target: targets::COUNTERMODEL, "No countermodel");
            return Ok(None);
        }
    };

    let countermodel = read_countermodel(&instance, &valuation);

    let value_of = |name: char| countermodel.get(name.to_string().as_str()).copied();
    let witnesses = premises.iter().all(|premise| premise.evaluate(&value_of))
        && !conclusion.evaluate(&value_of);

    match witnesses {
        true => Ok(Some(countermodel)),
        false => {
            log::warn!(target: targets::COUNTERMODEL, "Discarded a valuation which is not a countermodel");
            Ok(None)
        }
    }
}

/// The value of each formula variable of an instance on a valuation, where a variable without a value is false.
fn read_countermodel(instance: &CnfInstance, valuation: &CValuation) -> Countermodel {
    instance
        .variables
        .formula_variables()
        .map(|(atom, name)| {
            let value = valuation.value_of(atom).flatten().unwrap_or(false);
            (name.to_string(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::formula::parse;

    struct Failing;

    impl SatBackend for Failing {
        fn solve(&self, _: &CnfInstance) -> Result<SatOutcome, SolverError> {
            Err(SolverError::Timeout)
        }
    }

    struct Partial;

    impl SatBackend for Partial {
        fn solve(&self, instance: &CnfInstance) -> Result<SatOutcome, SolverError> {
            let mut valuation = vec![None; instance.variable_count() + 1];
            valuation[0] = Some(true);
            Ok(SatOutcome::Satisfiable(valuation))
        }
    }

    #[test]
    fn failures_are_no_countermodel() {
        let premises = [parse("P").unwrap()];
        let conclusion = parse("Q").unwrap();
        assert!(find_countermodel_with(&Failing, &premises, &conclusion).is_none());
    }

    #[test]
    fn failures_are_reported_as_solver_errors() {
        let premises = [parse("P").unwrap()];
        let conclusion = parse("Q").unwrap();
        assert_eq!(
            try_find_countermodel(&Failing, &premises, &conclusion),
            Err(ErrorKind::Solver(SolverError::Timeout))
        );
        assert_eq!(
            try_find_countermodel(&InternalSolver, &premises, &premises[0]),
            Ok(None)
        );
    }

    #[test]
    fn unvalued_variables_are_false() {
        // With every variable false, ¬P is true and P is false.
        let premises = [parse("¬P").unwrap()];
        let conclusion = parse("P").unwrap();
        let countermodel = find_countermodel_with(&Partial, &premises, &conclusion).unwrap();
        assert_eq!(countermodel.get("P"), Some(&false));
    }
}
