/*!
The schema of each rule, checked against the formulas a line cites.

Formulas are compared as canonical strings, and each rule which is commutative in its citations is tried with citations in either order.
Rules which close a subproof at a QED line are checked [separately](crate::validate::closing), and quantifier rules are checked by the [quantifier handler](crate::validate::quantifier).
*/

use crate::{
    misc::log::targets,
    structures::{formula::Connective, rule::Rule},
    types::err::ValidationErrorKind,
    validate::{
        quantifier,
        scope::ClosedSubproof,
        shape::{is_negation_of, join, main_connective, negation_of, same},
    },
};

/// The canonical string of ⊥.
pub const FALSUM: &str = "⊥";

/// A citation, resolved to either the formula of a line or a closed subproof.
#[derive(Clone, Copy, Debug)]
pub enum Citation<'a> {
    Line(&'a str),
    Subproof(&'a ClosedSubproof),
}

/// Information about the proof as a whole, used by some rules.
pub struct RuleContext<'a> {
    pub premises: &'a [String],

    /// Formulas in which an arbitrary term must not occur: premises, open assumptions, and the conclusion.
    pub fresh_context: &'a [String],

    /// Accept disjunction and biconditional elimination when structural matching fails.
    pub lenient: bool,
}

fn mismatch(rule: Rule, reason: impl Into<String>) -> ValidationErrorKind {
    ValidationErrorKind::RuleMismatch {
        rule,
        reason: reason.into(),
    }
}

/// The formulas of cited lines, if exactly `expected` lines and no subproofs are cited.
fn cited_lines<'a>(
    rule: Rule,
    citations: &[Citation<'a>],
    expected: usize,
) -> Result<Vec<&'a str>, ValidationErrorKind> {
    let lines = citations
        .iter()
        .filter_map(|citation| match citation {
            Citation::Line(formula) => Some(*formula),
            Citation::Subproof(_) => None,
        })
        .collect::<Vec<_>>();

    match lines.len() == expected && lines.len() == citations.len() {
        true => Ok(lines),
        false => Err(ValidationErrorKind::CitationCount {
            rule,
            expected,
            found: citations.len(),
        }),
    }
}

/// Splits citations into the formulas of lines and closed subproofs.
fn partition<'a>(citations: &[Citation<'a>]) -> (Vec<&'a str>, Vec<&'a ClosedSubproof>) {
    let mut lines = Vec::default();
    let mut subproofs = Vec::default();
    for citation in citations {
        match citation {
            Citation::Line(formula) => lines.push(*formula),
            Citation::Subproof(subproof) => subproofs.push(*subproof),
        }
    }
    (lines, subproofs)
}

/// Checks the formula of a line which is not a QED line follows from its citations by the rule.
pub fn check(
    rule: Rule,
    formula: &str,
    citations: &[Citation],
    context: &RuleContext,
) -> Result<(), ValidationErrorKind> {
    match rule {
        Rule::Premise => match context.premises.iter().any(|p| same(p, formula)) {
            true => Ok(()),
            false => Err(mismatch(rule, format!("{formula} is not a premise"))),
        },

        Rule::Assumption => Ok(()),

        Rule::Reiteration => {
            let cited = cited_lines(rule, citations, 1)?;
            match same(cited[0], formula) {
                true => Ok(()),
                false => Err(mismatch(rule, format!("{formula} differs from {}", cited[0]))),
            }
        }

        Rule::ModusPonens => {
            let cited = cited_lines(rule, citations, 2)?;
            let follows = |conditional: &str, antecedent: &str| match main_connective(conditional) {
                Some((Connective::Implication, a, c)) => same(a, antecedent) && same(c, formula),
                _ => false,
            };
            match follows(cited[0], cited[1]) || follows(cited[1], cited[0]) {
                true => Ok(()),
                false => Err(mismatch(
                    rule,
                    format!("{formula} is not the consequent of a conditional whose antecedent is cited"),
                )),
            }
        }

        Rule::ModusTollens => {
            let cited = cited_lines(rule, citations, 2)?;
            let follows = |conditional: &str, denial: &str| match main_connective(conditional) {
                Some((Connective::Implication, a, c)) => {
                    is_negation_of(c, denial) && is_negation_of(a, formula)
                }
                _ => false,
            };
            match follows(cited[0], cited[1]) || follows(cited[1], cited[0]) {
                true => Ok(()),
                false => Err(mismatch(
                    rule,
                    format!("{formula} is not the negated antecedent of a conditional whose consequent is denied"),
                )),
            }
        }

        Rule::ConjunctionIntroduction => {
            let (left, right) = match citations {
                [Citation::Line(only)] => (*only, *only),
                _ => {
                    let cited = cited_lines(rule, citations, 2)?;
                    (cited[0], cited[1])
                }
            };
            match main_connective(formula) {
                Some((Connective::Conjunction, a, b))
                    if (same(a, left) && same(b, right)) || (same(a, right) && same(b, left)) =>
                {
                    Ok(())
                }
                _ => Err(mismatch(
                    rule,
                    format!("{formula} is not the conjunction of {left} and {right}"),
                )),
            }
        }

        Rule::ConjunctionElimination => {
            let cited = cited_lines(rule, citations, 1)?;
            match main_connective(cited[0]) {
                Some((Connective::Conjunction, a, b)) if same(a, formula) || same(b, formula) => {
                    Ok(())
                }
                _ => Err(mismatch(
                    rule,
                    format!("{formula} is not a conjunct of {}", cited[0]),
                )),
            }
        }

        Rule::Addition => {
            let cited = cited_lines(rule, citations, 1)?;
            match main_connective(formula) {
                Some((Connective::Disjunction, a, b)) if same(a, cited[0]) || same(b, cited[0]) => {
                    Ok(())
                }
                _ => Err(mismatch(
                    rule,
                    format!("{formula} is not a disjunction with {} as a disjunct", cited[0]),
                )),
            }
        }

        Rule::DisjunctiveSyllogism => {
            let cited = cited_lines(rule, citations, 2)?;
            let follows = |disjunction: &str, denial: &str| match main_connective(disjunction) {
                Some((Connective::Disjunction, a, b)) => {
                    (is_negation_of(a, denial) && same(b, formula))
                        || (is_negation_of(b, denial) && same(a, formula))
                }
                _ => false,
            };
            match follows(cited[0], cited[1]) || follows(cited[1], cited[0]) {
                true => Ok(()),
                false => Err(mismatch(
                    rule,
                    format!("{formula} is not the remaining disjunct of a disjunction with one disjunct denied"),
                )),
            }
        }

        Rule::DisjunctionElimination => {
            if citations.is_empty() {
                return Err(ValidationErrorKind::CitationCount {
                    rule,
                    expected: 3,
                    found: 0,
                });
            }
            match disjunction_elimination(formula, citations) {
                true => Ok(()),
                false => lenient(rule, formula, context),
            }
        }

        Rule::DoubleNegation => {
            let cited = cited_lines(rule, citations, 1)?;
            match negation_of(cited[0]).and_then(negation_of) {
                Some(inner) if same(inner, formula) => Ok(()),
                _ => Err(mismatch(
                    rule,
                    format!("{} is not the double negation of {formula}", cited[0]),
                )),
            }
        }

        Rule::DoubleNegationIntroduction => {
            let cited = cited_lines(rule, citations, 1)?;
            match negation_of(formula).and_then(negation_of) {
                Some(inner) if same(inner, cited[0]) => Ok(()),
                _ => Err(mismatch(
                    rule,
                    format!("{formula} is not the double negation of {}", cited[0]),
                )),
            }
        }

        Rule::NegationElimination => {
            let cited = cited_lines(rule, citations, 2)?;
            if !same(formula, FALSUM) {
                return Err(mismatch(rule, format!("{formula} is not {FALSUM}")));
            }
            match is_negation_of(cited[0], cited[1]) || is_negation_of(cited[1], cited[0]) {
                true => Ok(()),
                false => Err(mismatch(
                    rule,
                    format!("{} and {} do not contradict", cited[0], cited[1]),
                )),
            }
        }

        Rule::FalsumElimination => {
            let cited = cited_lines(rule, citations, 1)?;
            match same(cited[0], FALSUM) {
                true => Ok(()),
                false => Err(mismatch(rule, format!("{} is not {FALSUM}", cited[0]))),
            }
        }

        Rule::NegationIntroduction => match citations {
            [Citation::Subproof(subproof)] => match subproof.assumption() {
                Some(assumption)
                    if same(&subproof.conclusion, FALSUM) && is_negation_of(assumption, formula) =>
                {
                    Ok(())
                }
                _ => Err(mismatch(
                    rule,
                    format!("the subproof does not derive {FALSUM} from the negation of {formula}"),
                )),
            },
            _ => {
                let cited = cited_lines(rule, citations, 1)?;
                match main_connective(cited[0]) {
                    Some((Connective::Implication, a, c))
                        if same(c, FALSUM) && is_negation_of(a, formula) =>
                    {
                        Ok(())
                    }
                    _ => Err(mismatch(
                        rule,
                        format!("{} is not a conditional with consequent {FALSUM}", cited[0]),
                    )),
                }
            }
        },

        Rule::BiconditionalIntroduction => {
            let cited = cited_lines(rule, citations, 2)?;
            match main_connective(formula) {
                Some((Connective::Biconditional, a, b)) => {
                    let forward = join(Connective::Implication, a, b);
                    let backward = join(Connective::Implication, b, a);
                    match (same(cited[0], &forward) && same(cited[1], &backward))
                        || (same(cited[0], &backward) && same(cited[1], &forward))
                    {
                        true => Ok(()),
                        false => Err(mismatch(
                            rule,
                            format!("{forward} and {backward} are not both cited"),
                        )),
                    }
                }
                _ => Err(mismatch(rule, format!("{formula} is not a biconditional"))),
            }
        }

        Rule::BiconditionalElimination => {
            let (lines, _) = partition(citations);
            if lines.is_empty() || lines.len() > 2 {
                return Err(ValidationErrorKind::CitationCount {
                    rule,
                    expected: 1,
                    found: citations.len(),
                });
            }
            match biconditional_elimination(formula, &lines) {
                true => Ok(()),
                false => lenient(rule, formula, context),
            }
        }

        Rule::ConditionalIntroduction => match citations {
            [Citation::Subproof(subproof)] => match subproof.assumption() {
                Some(assumption)
                    if same(
                        &join(Connective::Implication, assumption, &subproof.conclusion),
                        formula,
                    ) =>
                {
                    Ok(())
                }
                _ => Err(mismatch(
                    rule,
                    format!("the subproof does not derive the consequent of {formula} from its antecedent"),
                )),
            },
            _ => Err(mismatch(
                rule,
                "conditional introduction cites a subproof, or closes a show line",
            )),
        },

        Rule::IndirectDerivation => match citations {
            [Citation::Subproof(subproof)] => match subproof.assumption() {
                Some(assumption)
                    if same(&subproof.conclusion, FALSUM) && is_negation_of(formula, assumption) =>
                {
                    Ok(())
                }
                _ => Err(mismatch(
                    rule,
                    format!("the subproof does not derive {FALSUM} from the negation of {formula}"),
                )),
            },
            _ => Err(ValidationErrorKind::ClosingRuleOutsideQed { rule }),
        },

        Rule::DirectDerivation | Rule::ConditionalDerivation => {
            Err(ValidationErrorKind::ClosingRuleOutsideQed { rule })
        }

        Rule::UniversalIntroduction => {
            let cited = cited_lines(rule, citations, 1)?;
            quantifier::universal_introduction(cited[0], formula, context.fresh_context)
                .map_err(|reason| mismatch(rule, reason))
        }

        Rule::UniversalElimination => {
            let cited = cited_lines(rule, citations, 1)?;
            quantifier::universal_elimination(cited[0], formula)
                .map_err(|reason| mismatch(rule, reason))
        }

        Rule::ExistentialIntroduction => {
            let cited = cited_lines(rule, citations, 1)?;
            quantifier::existential_introduction(cited[0], formula)
                .map_err(|reason| mismatch(rule, reason))
        }

        Rule::ExistentialElimination => match partition(citations) {
            (lines, subproofs) if lines.len() == 1 && subproofs.len() == 1 => {
                quantifier::existential_elimination(
                    lines[0],
                    subproofs[0],
                    formula,
                    context.fresh_context,
                )
                .map_err(|reason| mismatch(rule, reason))
            }
            _ => Err(ValidationErrorKind::CitationCount {
                rule,
                expected: 2,
                found: citations.len(),
            }),
        },
    }
}

/// Accepts a line whose structure does not match, if lenient.
fn lenient(rule: Rule, formula: &str, context: &RuleContext) -> Result<(), ValidationErrorKind> {
    match context.lenient {
        true => {
            log::warn!(target: targets::VALIDATION, "Accepted {formula} by {rule} without a structural match");
            Ok(())
        }
        false => Err(mismatch(
            rule,
            format!("{formula} does not follow from the cited lines"),
        )),
    }
}

/// (a∨b, a→c, b→c) ⊢ c, or (a∨b, a…c, b…c) ⊢ c, with citations in any order.
fn disjunction_elimination(formula: &str, citations: &[Citation]) -> bool {
    let (lines, subproofs) = partition(citations);

    lines.iter().enumerate().any(|(index, disjunction)| {
        let Some((Connective::Disjunction, a, b)) = main_connective(disjunction) else {
            return false;
        };

        let mut cases = lines
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .filter_map(|(_, line)| match main_connective(line) {
                Some((Connective::Implication, antecedent, consequent)) if same(consequent, formula) => {
                    Some(antecedent.to_string())
                }
                _ => None,
            })
            .collect::<Vec<_>>();

        cases.extend(subproofs.iter().filter_map(|subproof| {
            match same(&subproof.conclusion, formula) {
                true => subproof.assumption().map(str::to_string),
                false => None,
            }
        }));

        cases.len() + 1 == citations.len()
            && cases.iter().any(|case| same(case, a))
            && cases.iter().any(|case| same(case, b))
    })
}

/// a↔b ⊢ a→b or b→a, (a↔b, a) ⊢ b, and (a↔b, b) ⊢ a.
fn biconditional_elimination(formula: &str, lines: &[&str]) -> bool {
    match lines {
        [biconditional] => match main_connective(biconditional) {
            Some((Connective::Biconditional, a, b)) => {
                same(formula, &join(Connective::Implication, a, b))
                    || same(formula, &join(Connective::Implication, b, a))
            }
            _ => false,
        },

        [first, second] => {
            let follows = |biconditional: &str, side: &str| match main_connective(biconditional) {
                Some((Connective::Biconditional, a, b)) => {
                    (same(a, side) && same(b, formula)) || (same(b, side) && same(a, formula))
                }
                _ => false,
            };
            follows(first, second) || follows(second, first)
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(lenient: bool) -> RuleContext<'static> {
        RuleContext {
            premises: &[],
            fresh_context: &[],
            lenient,
        }
    }

    fn lines<'a>(formulas: &[&'a str]) -> Vec<Citation<'a>> {
        formulas.iter().copied().map(Citation::Line).collect()
    }

    #[test]
    fn modus_ponens_in_either_order() {
        let strict = context(false);
        assert!(check(Rule::ModusPonens, "Q", &lines(&["P", "P→Q"]), &strict).is_ok());
        assert!(check(Rule::ModusPonens, "Q", &lines(&["P→Q", "P"]), &strict).is_ok());
        assert!(check(Rule::ModusPonens, "P", &lines(&["P→Q", "Q"]), &strict).is_err());
        assert!(matches!(
            check(Rule::ModusPonens, "P", &lines(&["P→Q"]), &strict),
            Err(ValidationErrorKind::CitationCount { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn tollens_and_syllogism() {
        let strict = context(false);
        assert!(check(Rule::ModusTollens, "¬P", &lines(&["P→Q", "¬Q"]), &strict).is_ok());
        assert!(check(Rule::ModusTollens, "¬(P∧R)", &lines(&["P∧R→Q", "¬Q"]), &strict).is_ok());
        assert!(check(Rule::DisjunctiveSyllogism, "Q", &lines(&["¬P", "P∨Q"]), &strict).is_ok());
        assert!(check(Rule::DisjunctiveSyllogism, "P", &lines(&["P∨Q", "¬Q"]), &strict).is_ok());
        assert!(check(Rule::DisjunctiveSyllogism, "P", &lines(&["P∨Q", "¬P"]), &strict).is_err());
    }

    #[test]
    fn conjunction_and_addition() {
        let strict = context(false);
        assert!(check(Rule::ConjunctionIntroduction, "Q∧P", &lines(&["P", "Q"]), &strict).is_ok());
        assert!(check(Rule::ConjunctionElimination, "P∨Q", &lines(&["(P∨Q)∧R"]), &strict).is_ok());
        assert!(check(Rule::Addition, "R∨(P→Q)", &lines(&["P→Q"]), &strict).is_ok());
        assert!(check(Rule::Addition, "R∧P", &lines(&["P"]), &strict).is_err());
    }

    #[test]
    fn negations() {
        let strict = context(false);
        assert!(check(Rule::DoubleNegation, "P∨Q", &lines(&["¬¬(P∨Q)"]), &strict).is_ok());
        assert!(check(Rule::DoubleNegationIntroduction, "¬¬P", &lines(&["P"]), &strict).is_ok());
        assert!(check(Rule::NegationElimination, "⊥", &lines(&["¬(P→Q)", "P→Q"]), &strict).is_ok());
        assert!(check(Rule::FalsumElimination, "R", &lines(&["⊥"]), &strict).is_ok());
        assert!(check(Rule::FalsumElimination, "R", &lines(&["P"]), &strict).is_err());
    }

    #[test]
    fn biconditionals() {
        let strict = context(false);
        assert!(check(
            Rule::BiconditionalIntroduction,
            "P↔Q",
            &lines(&["Q→P", "P→Q"]),
            &strict
        )
        .is_ok());
        assert!(check(Rule::BiconditionalElimination, "Q→P", &lines(&["P↔Q"]), &strict).is_ok());
        assert!(check(Rule::BiconditionalElimination, "P", &lines(&["P↔Q", "Q"]), &strict).is_ok());
        assert!(check(Rule::BiconditionalElimination, "R", &lines(&["P↔Q"]), &strict).is_err());
        assert!(check(Rule::BiconditionalElimination, "R", &lines(&["P↔Q"]), &context(true)).is_ok());
    }

    #[test]
    fn disjunction_elimination_forms() {
        let strict = context(false);
        assert!(check(
            Rule::DisjunctionElimination,
            "R",
            &lines(&["Q→R", "P∨Q", "P→R"]),
            &strict
        )
        .is_ok());

        let left = ClosedSubproof {
            first: 2,
            last: 3,
            assumptions: vec!["P".to_string()],
            conclusion: "R".to_string(),
        };
        let right = ClosedSubproof {
            first: 4,
            last: 5,
            assumptions: vec!["Q".to_string()],
            conclusion: "R".to_string(),
        };
        let citations = [
            Citation::Line("P∨Q"),
            Citation::Subproof(&left),
            Citation::Subproof(&right),
        ];
        assert!(check(Rule::DisjunctionElimination, "R", &citations, &strict).is_ok());
        assert!(check(Rule::DisjunctionElimination, "R", &citations[..2], &strict).is_err());
    }

    #[test]
    fn closing_rules_need_a_qed_line() {
        let strict = context(false);
        assert!(matches!(
            check(Rule::ConditionalDerivation, "P→P", &lines(&["P"]), &strict),
            Err(ValidationErrorKind::ClosingRuleOutsideQed { .. })
        ));
    }
}
