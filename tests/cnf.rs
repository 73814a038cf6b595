use fitch_engine::{
    cnf::{convert_formula_set, to_cnf, CnfInstance},
    countermodel::{InternalSolver, SatBackend, SatOutcome},
    parse::formula::parse,
    structures::{formula::Formula, valuation::Valuation},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

const NAMES: [char; 4] = ['P', 'Q', 'R', 'S'];

/// Whether some valuation of the atoms of the formula satisfies the formula.
fn satisfiable_by_truth_table(formula: &Formula) -> bool {
    let atoms = formula.atoms().into_iter().collect::<Vec<_>>();
    (0..1_u32 << atoms.len()).any(|row| {
        let value_of = |name: char| {
            atoms
                .iter()
                .position(|atom| *atom == name)
                .map(|index| row & (1 << index) != 0)
        };
        formula.evaluate(&value_of)
    })
}

fn solve(instance: &CnfInstance) -> SatOutcome {
    match InternalSolver.solve(instance) {
        Ok(outcome) => outcome,
        Err(e) => panic!("internal solver failed: {e}"),
    }
}

fn random_formula(rng: &mut StdRng, depth: usize) -> Formula {
    let leaf = depth == 0 || rng.gen_bool(0.25);
    if leaf {
        return match rng.gen_range(0..10) {
            0 => Formula::top(),
            1 => Formula::bottom(),
            _ => Formula::variable(NAMES[rng.gen_range(0..NAMES.len())]),
        };
    }

    match rng.gen_range(0..5) {
        0 => Formula::negation(random_formula(rng, depth - 1)),
        1 => Formula::conjunction(random_formula(rng, depth - 1), random_formula(rng, depth - 1)),
        2 => Formula::disjunction(random_formula(rng, depth - 1), random_formula(rng, depth - 1)),
        3 => Formula::implication(random_formula(rng, depth - 1), random_formula(rng, depth - 1)),
        _ => {
            Formula::biconditional(random_formula(rng, depth - 1), random_formula(rng, depth - 1))
        }
    }
}

mod equisatisfiability {

    use super::*;

    fn check(formula: &Formula) {
        let instance = match to_cnf(formula) {
            Ok(instance) => instance,
            Err(e) => panic!("{formula}: {e}"),
        };

        let expected = satisfiable_by_truth_table(formula);

        match solve(&instance) {
            SatOutcome::Satisfiable(valuation) => {
                assert!(expected, "{formula} is unsatisfiable, but its CNF is not");

                // The valuation of the CNF, restricted to the atoms of the formula, satisfies the formula.
                let value_of = |name: char| {
                    let atom = instance.variables.atom_of(&name.to_string())?;
                    valuation.value_of(atom).flatten()
                };
                assert!(formula.evaluate(&value_of), "{formula}");
            }

            SatOutcome::Unsatisfiable => {
                assert!(!expected, "{formula} is satisfiable, but its CNF is not");
            }
        }
    }

    #[test]
    fn hand_picked() {
        let texts = [
            "P",
            "¬P",
            "P∧¬P",
            "P∨¬P",
            "⊥",
            "⊤",
            "¬⊤",
            "P→⊥",
            "(P→Q)∧P∧¬Q",
            "(P↔Q)∧(Q↔¬P)",
            "(P∨Q)∧(¬P∨R)∧¬Q∧¬R",
            "((P→Q)→P)→P",
            "¬(((P→Q)→P)→P)",
            "(P∧Q)∨(R∧S)",
            "(P↔Q)↔(R↔S)",
            "¬((P∧Q)↔(Q∧P))",
        ];

        for text in texts {
            check(&parse(text).unwrap());
        }
    }

    #[test]
    fn random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..300 {
            let formula = random_formula(&mut rng, 4);
            check(&formula);
        }
    }
}

mod instances {

    use super::*;

    #[test]
    fn auxiliary_variables_are_not_formula_variables() {
        let instance = to_cnf(&parse("(P∧Q)∨¬R").unwrap()).unwrap();
        let names = instance
            .variables
            .formula_variables()
            .map(|(_, name)| name.to_string())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["P", "Q", "R"]);
        assert!(instance.variable_count() > names.len());
    }

    #[test]
    fn valid_argument_is_unsatisfiable() {
        let formulas = [parse("P→Q").unwrap(), parse("P").unwrap(), parse("Q").unwrap()];
        let instance = convert_formula_set(&formulas, true).unwrap();
        assert_eq!(solve(&instance), SatOutcome::Unsatisfiable);
    }

    #[test]
    fn invalid_argument_is_satisfiable() {
        let formulas = [parse("P→Q").unwrap(), parse("Q").unwrap(), parse("P").unwrap()];
        let instance = convert_formula_set(&formulas, true).unwrap();
        assert!(matches!(solve(&instance), SatOutcome::Satisfiable(_)));
    }

    #[test]
    fn dimacs_header() {
        let instance = to_cnf(&parse("P∧Q").unwrap()).unwrap();
        let dimacs = instance.as_dimacs();

        let header = format!("p cnf {} {}", instance.variable_count(), instance.clauses.len());
        assert!(dimacs.lines().any(|line| line == header));
        assert!(dimacs.contains("c 1 P"));
        assert!(dimacs.contains("c 2 Q"));
    }
}
