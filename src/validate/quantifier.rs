/*!
Checks of the quantifier rules.

- ∀E: `∀x.φ ⊢ φ[x:=t]`, for any term `t`.
- ∀I: `φ[x:=c] ⊢ ∀x.φ`, for an arbitrary `c`.
- ∃I: `φ[x:=t] ⊢ ∃x.φ`, for some term `t` of the cited formula.
- ∃E: `∃x.φ, [φ[x:=c] … ψ] ⊢ ψ`, for a fresh `c` not in `ψ`.

A term is arbitrary (or fresh) when it does not occur free in any formula of the context, that is any premise or open assumption.
Context formulas which do not parse as first-order formulas are searched as strings.

Each check returns the reason for failure, if the check fails.
*/

use std::collections::BTreeSet;

use crate::{
    parse::quantified::parse_first_order,
    structures::quantified::{FoFormula, QuantifiedFormula, Quantifier},
    validate::scope::ClosedSubproof,
};

fn first_order(text: &str) -> Result<FoFormula, String> {
    parse_first_order(text).map_err(|error| format!("cannot read {text}: {error}"))
}

fn quantified(text: &str, quantifier: Quantifier) -> Result<QuantifiedFormula, String> {
    match first_order(text)? {
        FoFormula::Quantified(q) if q.quantifier == quantifier => Ok(q),
        _ => Err(format!(
            "{text} is not of the form {}x.φ",
            quantifier.symbol()
        )),
    }
}

/// Whether `term` occurs free in some formula text.
fn occurs(term: char, text: &str) -> bool {
    match parse_first_order(text) {
        Ok(formula) => formula.free_terms().contains(&term),
        Err(_) => text.contains(term),
    }
}

/// A term from `candidates` for which the instance of the quantified formula is `instance`.
fn find_instance(
    quantified: &QuantifiedFormula,
    instance: &FoFormula,
    candidates: BTreeSet<char>,
) -> Option<char> {
    let target = instance.to_string();
    candidates
        .into_iter()
        .find(|term| quantified.instantiate(*term).to_string() == target)
}

pub fn universal_elimination(cited: &str, formula: &str) -> Result<(), String> {
    let universal = quantified(cited, Quantifier::Universal)?;
    let instance = first_order(formula)?;

    let mut candidates = instance.all_terms();
    candidates.insert(universal.variable);

    match find_instance(&universal, &instance, candidates) {
        Some(_) => Ok(()),
        None => Err(format!("{formula} is not an instance of {cited}")),
    }
}

pub fn universal_introduction(cited: &str, formula: &str, context: &[String]) -> Result<(), String> {
    let universal = quantified(formula, Quantifier::Universal)?;
    let instance = first_order(cited)?;
    let generalisation = first_order(formula)?;

    let mut candidates = instance.free_terms();
    candidates.insert(universal.variable);

    let target = instance.to_string();
    let matching = candidates
        .into_iter()
        .filter(|term| universal.instantiate(*term).to_string() == target)
        .collect::<Vec<_>>();

    if matching.is_empty() {
        return Err(format!("{cited} is not an instance of {formula}"));
    }

    let arbitrary = matching.iter().find(|term| {
        !generalisation.free_terms().contains(*term)
            && !context.iter().any(|text| occurs(**term, text))
    });

    match arbitrary {
        Some(_) => Ok(()),
        None => Err(format!(
            "the term generalised in {cited} is not arbitrary, as it occurs in a premise or open assumption"
        )),
    }
}

pub fn existential_introduction(cited: &str, formula: &str) -> Result<(), String> {
    let existential = quantified(formula, Quantifier::Existential)?;
    let instance = first_order(cited)?;

    let mut candidates = instance.all_terms();
    candidates.insert(existential.variable);

    match find_instance(&existential, &instance, candidates) {
        Some(_) => Ok(()),
        None => Err(format!("{cited} is not an instance of {formula}")),
    }
}

pub fn existential_elimination(
    cited: &str,
    subproof: &ClosedSubproof,
    formula: &str,
    context: &[String],
) -> Result<(), String> {
    let existential = quantified(cited, Quantifier::Existential)?;

    let Some(assumption) = subproof.assumption() else {
        return Err(format!(
            "the subproof from line {} makes no assumption",
            subproof.first
        ));
    };
    let instance = first_order(assumption)?;

    if first_order(&subproof.conclusion)?.to_string() != first_order(formula)?.to_string() {
        return Err(format!(
            "the subproof concludes {}, not {formula}",
            subproof.conclusion
        ));
    }

    let mut candidates = instance.free_terms();
    candidates.insert(existential.variable);

    let target = instance.to_string();
    let fresh = candidates.into_iter().find(|term| {
        existential.instantiate(*term).to_string() == target
            && !occurs(*term, cited)
            && !occurs(*term, formula)
            && !context.iter().any(|text| occurs(*term, text))
    });

    match fresh {
        Some(_) => Ok(()),
        None => Err(format!(
            "{assumption} is not an instance of {cited} with a fresh term"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universal_rules() {
        assert!(universal_elimination("∀x.(F(x)→G(x))", "F(a)→G(a)").is_ok());
        assert!(universal_elimination("∀x.(F(x)→G(x))", "F(a)→G(b)").is_err());

        let context = vec!["∀x.F(x)".to_string(), "G(b)".to_string()];
        assert!(universal_introduction("F(a)", "∀x.F(x)", &context).is_ok());
        assert!(universal_introduction("F(b)", "∀x.F(x)", &context).is_err());
        assert!(universal_introduction("R(a,a)", "∀x.R(x,a)", &context).is_err());
    }

    #[test]
    fn existential_rules() {
        assert!(existential_introduction("F(a)∧G(a)", "∃x.(F(x)∧G(x))").is_ok());
        assert!(existential_introduction("F(a)∧G(b)", "∃x.(F(x)∧G(x))").is_err());

        let subproof = ClosedSubproof {
            first: 2,
            last: 4,
            assumptions: vec!["F(c)∧G(c)".to_string()],
            conclusion: "∃y.G(y)".to_string(),
        };
        let context = vec!["∃x.(F(x)∧G(x))".to_string()];
        assert!(existential_elimination("∃x.(F(x)∧G(x))", &subproof, "∃y.G(y)", &context).is_ok());

        let context = vec!["∃x.(F(x)∧G(x))".to_string(), "H(c)".to_string()];
        assert!(existential_elimination("∃x.(F(x)∧G(x))", &subproof, "∃y.G(y)", &context).is_err());
    }
}
