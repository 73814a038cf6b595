use fitch_engine::{
    parse::{canonical_form, formula::parse, normalize::normalize},
    structures::formula::Formula,
};

mod normalization {

    use super::*;

    #[test]
    fn aliases_agree() {
        let alias_pairs = [
            ("P->Q", "P→Q"),
            ("P&Q", "P∧Q"),
            ("P/\\Q", "P∧Q"),
            ("P|Q", "P∨Q"),
            ("P\\/Q", "P∨Q"),
            ("~P", "¬P"),
            ("-P", "¬P"),
            ("P<->Q", "P↔Q"),
            ("!?", "⊥"),
            ("_|_", "⊥"),
            ("T", "⊤"),
            ("true", "⊤"),
            ("F", "⊥"),
            ("false", "⊥"),
        ];

        for (alias, canonical) in alias_pairs {
            assert_eq!(normalize(alias), normalize(canonical), "{alias}");
        }
    }

    #[test]
    fn idempotent() {
        let texts = [
            "(P & Q) -> ~R",
            "P <-> _|_",
            "  P \\/ true ",
            "~~P -> !? | T",
            "∀x (F(x) -> G(x))",
        ];

        for text in texts {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "{text}");
        }
    }

    #[test]
    fn whitespace() {
        assert_eq!(normalize(" P  ∧\tQ "), normalize("P∧Q"));
        assert_eq!(canonical_form("( P )  ->  ( Q )"), "P→Q");
    }
}

mod parsing {

    use super::*;

    #[test]
    fn precedence() {
        let formula = parse("P & Q | R -> S <-> T").unwrap();
        let expected = Formula::biconditional(
            Formula::implication(
                Formula::disjunction(
                    Formula::conjunction(Formula::variable('P'), Formula::variable('Q')),
                    Formula::variable('R'),
                ),
                Formula::variable('S'),
            ),
            Formula::top(),
        );
        assert_eq!(formula, expected);
    }

    #[test]
    fn implication_is_right_associative() {
        let formula = parse("P -> Q -> R").unwrap();
        let expected = Formula::implication(
            Formula::variable('P'),
            Formula::implication(Formula::variable('Q'), Formula::variable('R')),
        );
        assert_eq!(formula, expected);
    }

    #[test]
    fn stacked_negations() {
        let formula = parse("~~~P").unwrap();
        let expected = Formula::negation(Formula::negation(Formula::negation(Formula::variable(
            'P',
        ))));
        assert_eq!(formula, expected);
    }

    #[test]
    fn syntax_errors() {
        for text in ["", "   ", "(P", "P)", "P ∧ ∧ Q", "∧ P", "P ∨", "P ? Q", "p"] {
            assert!(parse(text).is_err(), "{text:?}");
        }
    }

    #[test]
    fn round_trip() {
        let p = Formula::variable('P');
        let q = Formula::variable('Q');
        let r = Formula::variable('R');

        let formulas = [
            Formula::implication(Formula::implication(p.clone(), q.clone()), r.clone()),
            Formula::conjunction(p.clone(), Formula::disjunction(q.clone(), r.clone())),
            Formula::disjunction(Formula::conjunction(p.clone(), q.clone()), r.clone()),
            Formula::negation(Formula::biconditional(p.clone(), q.clone())),
            Formula::biconditional(
                Formula::biconditional(p.clone(), q.clone()),
                Formula::negation(r.clone()),
            ),
            Formula::conjunction(
                p.clone(),
                Formula::conjunction(q.clone(), Formula::bottom()),
            ),
            Formula::implication(
                Formula::negation(Formula::negation(p)),
                Formula::disjunction(q, Formula::top()),
            ),
        ];

        for formula in formulas {
            let printed = formula.to_string();
            assert_eq!(parse(&printed).unwrap(), formula, "{printed}");
        }
    }

    #[test]
    fn redundant_parentheses_are_dropped() {
        assert_eq!(canonical_form("((P ∧ Q))"), "P∧Q");
        assert_eq!(canonical_form("(P ∧ Q) ∧ R"), "P∧Q∧R");
        assert_eq!(canonical_form("P ∧ (Q ∧ R)"), "P∧(Q∧R)");
        assert_eq!(canonical_form("P → (Q → R)"), "P→Q→R");
    }
}
