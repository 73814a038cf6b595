use fitch_engine::{
    parse::{canonical_form, quantified::parse_first_order},
    procedures::verify::verify,
};

mod formulas {

    use super::*;

    #[test]
    fn canonical_forms() {
        assert_eq!(canonical_form("∀x (F(x) -> G(x))"), "∀x.(F(x)→G(x))");
        assert_eq!(canonical_form("∃y.R(y, a)"), "∃y.R(y,a)");
        assert_eq!(canonical_form("~∀x.F(x)"), "¬∀x.F(x)");
    }

    #[test]
    fn quantifiers_bind_tightly() {
        let formula = parse_first_order("∀x.F(x)→G(a)").unwrap();
        assert!(formula.as_quantified().is_none());
        assert_eq!(formula.to_string(), "∀x.F(x)→G(a)");
    }

    #[test]
    fn substitution_avoids_capture() {
        let formula = parse_first_order("∀x.∃y.R(x,y)").unwrap();
        let instance = formula.as_quantified().unwrap().instantiate('y');
        let Some(inner) = instance.as_quantified() else {
            panic!("instantiation changed the shape of {instance}");
        };
        assert_ne!(inner.variable, 'y');
        assert!(instance.free_terms().contains(&'y'));
    }
}

mod rules {

    use super::*;

    #[test]
    fn universal_elimination_and_existential_introduction() {
        let proof = "
F(a) :∀E 1
∃y.F(y) :∃I 2
";
        let verdict = verify("∀x.F(x)", "∃y.F(y)", proof);
        assert!(verdict.ok, "{:?}", verdict.errors);
    }

    #[test]
    fn universal_introduction() {
        let proof = "
F(a) :∀E 1
∀y.F(y) :∀I 2
";
        let verdict = verify("∀x.F(x)", "∀y.F(y)", proof);
        assert!(verdict.ok, "{:?}", verdict.errors);
    }

    #[test]
    fn universal_introduction_requires_an_arbitrary_term() {
        let verdict = verify("F(a)", "∀x.F(x)", "∀x.F(x) :∀I 1");
        assert!(!verdict.ok);
        assert!(verdict.errors.iter().any(|e| e.starts_with("Line 2")));
        assert!(verdict.counter_model.is_none());
    }

    #[test]
    fn existential_elimination() {
        let proof = "
    F(a) :AS
    F(a)→G(a) :∀E 1
    G(a) :MP 4,3
    ∃x.G(x) :∃I 5
∃x.G(x) :∃E 2,3-6
";
        let verdict = verify("∀x.(F(x)→G(x)), ∃x.F(x)", "∃x.G(x)", proof);
        assert!(verdict.ok, "{:?}", verdict.errors);
        assert!(verdict.rules_used.contains(&"∃E".to_string()));
    }

    #[test]
    fn existential_elimination_requires_a_fresh_term() {
        let proof = "
    F(a) :AS
    G(a) :R 1
G(a) :∃E 2,3-4
";
        let verdict = verify("G(a), ∃x.F(x)", "G(a)", proof);
        assert!(!verdict.ok);
        assert!(verdict.errors.iter().any(|e| e.starts_with("Line 5")));
    }
}
