use fitch_engine::{
    config::Config,
    parse::formula::parse,
    procedures::{
        optimal::{verify_optimal, verify_optimal_with_config},
        solve::{solve, solve_with_config},
        verify::verify,
    },
    search::{find_proof, render_proof},
};

mod soundness {

    use super::*;

    /// Arguments for which a proof is found with the default configuration.
    const PROVABLE: [(&str, &str); 10] = [
        ("P, P→Q", "Q"),
        ("P∧Q", "Q∧P"),
        ("P→Q, ¬Q", "¬P"),
        ("", "P→P"),
        ("P→Q, Q→R", "P→R"),
        ("P∧Q", "P"),
        ("¬¬P", "P"),
        ("P∨Q, ¬P", "Q"),
        ("P↔Q, P", "Q"),
        ("P, ¬P", "Q"),
    ];

    #[test]
    fn proofs_found_are_valid() {
        for (gamma, phi) in PROVABLE {
            let report = solve(gamma, phi);
            assert!(report.success, "no proof of {phi} from {gamma}");

            let Some(proof) = report.proof else {
                panic!("a successful report without a proof");
            };

            let verdict = verify(gamma, phi, &proof);
            assert!(verdict.ok, "{gamma} ⊢ {phi}\n{proof}\n{:?}", verdict.errors);
            assert_eq!(report.length, Some(verdict.lines));
        }
    }

    #[test]
    fn proofs_without_the_relevance_filter_are_valid() {
        let mut config = Config::default();
        config.search.relevance_filter.value = false;
        config.search.iteration_limit.value = 2_000;

        for (gamma, phi) in PROVABLE {
            let report = solve_with_config(gamma, phi, &config);
            if let Some(proof) = report.proof {
                let verdict = verify(gamma, phi, &proof);
                assert!(verdict.ok, "{gamma} ⊢ {phi}\n{proof}\n{:?}", verdict.errors);
            }
        }
    }

    #[test]
    fn hypothetical_syllogism() {
        let config = Config::default();
        let premises = [parse("P→Q").unwrap(), parse("Q→R").unwrap()];
        let conclusion = parse("P→R").unwrap();

        let Some(lines) = find_proof(&premises, &conclusion, 10, &config.search) else {
            panic!("no proof of P→R");
        };

        let rendered = render_proof(&lines);
        assert!(rendered.starts_with("show P→R\n    P :AS"), "{rendered}");
        assert!(rendered.ends_with(":CD 6"), "{rendered}");
    }

    #[test]
    fn premise_as_conclusion() {
        let report = solve("P, Q", "Q");
        assert_eq!(report.proof.as_deref(), Some("Q :R 2"));
        assert_eq!(report.length, Some(1));
    }
}

mod termination {

    use super::*;

    #[test]
    fn invalid_arguments() {
        for (gamma, phi) in [("P", "Q"), ("P→Q", "P"), ("P∨Q", "P"), ("", "P")] {
            let report = solve(gamma, phi);
            assert!(!report.success, "{gamma} ⊢ {phi}");
            assert!(report.proof.is_none());
            assert!(report.length.is_none());
        }
    }

    #[test]
    fn iteration_limit() {
        let mut config = Config::default();
        config.search.iteration_limit.value = 1;

        let report = solve_with_config("P→Q, Q→R", "P→R", &config);
        assert!(!report.success);
    }

    #[test]
    fn depth_limit() {
        let mut config = Config::default();
        config.search.max_depth.value = 2;

        let report = solve_with_config("P→Q, Q→R", "P→R", &config);
        assert!(!report.success);
    }

    #[test]
    fn unparsable_arguments() {
        assert!(!solve("P ∧", "Q").success);
        assert!(!solve("P", "∀x.F(x)").success);
    }
}

mod optimality {

    use super::*;

    #[test]
    fn claims() {
        let report = verify_optimal(&["P", "P→Q"], "Q", 1);
        assert!(report.valid);
        assert_eq!(report.found_length, Some(1));
        assert!(report.is_optimal);

        let report = verify_optimal(&["P", "P→Q"], "Q", 5);
        assert!(report.valid);
        assert_eq!(report.found_length, Some(1));
        assert!(!report.is_optimal);
    }

    #[test]
    fn unprovable() {
        let report = verify_optimal(&["P"], "Q", 3);
        assert!(!report.valid);
        assert_eq!(report.found_length, None);
        assert!(!report.is_optimal);
    }

    #[test]
    fn limited_search() {
        let mut config = Config::default();
        config.search.iteration_limit.value = 1;

        let report = verify_optimal_with_config(&["P→Q", "Q→R"], "P→R", 5, &config);
        assert!(!report.valid);
    }
}
