/*!
Checks of QED lines, which close the innermost open show line.

The formula a QED line establishes is the last formula it cites, or without citations the formula of the line before the QED line.

- DD: the established formula is the show formula, and the subproof assumes nothing.
- CD: the show formula is a conditional, the established formula is its consequent, and each assumption of the subproof is its antecedent.
- ID: the established formula is ⊥ (or two cited formulas contradict), and each assumption of the subproof is the negation of the show formula, or the show formula is the negation of the assumption.
*/

use crate::{
    structures::{formula::Connective, rule::Rule},
    types::err::ValidationErrorKind,
    validate::{
        rules::FALSUM,
        shape::{is_negation_of, main_connective, same},
    },
};

fn mismatch(rule: Rule, reason: impl Into<String>) -> ValidationErrorKind {
    ValidationErrorKind::RuleMismatch {
        rule,
        reason: reason.into(),
    }
}

/// Checks a QED line closing a show line with the given formula.
///
/// `rule` is the closing rule the QED line uses, and `assumptions` are the formulas assumed in the block of the show line.
pub fn check_qed(
    rule: Rule,
    show: &str,
    cited: &[&str],
    preceding: Option<&str>,
    assumptions: &[&str],
) -> Result<(), ValidationErrorKind> {
    let established = cited.last().copied().or(preceding);

    match rule {
        Rule::DirectDerivation => {
            if let Some(assumption) = assumptions.first() {
                return Err(mismatch(
                    rule,
                    format!("the subproof assumes {assumption}, which direct derivation does not discharge"),
                ));
            }
            match established {
                Some(formula) if same(formula, show) => Ok(()),
                _ => Err(mismatch(rule, format!("{show} is not established"))),
            }
        }

        Rule::ConditionalDerivation => {
            let Some((Connective::Implication, antecedent, consequent)) = main_connective(show)
            else {
                return Err(mismatch(rule, format!("{show} is not a conditional")));
            };

            if let Some(assumption) = assumptions.iter().find(|a| !same(a, antecedent)) {
                return Err(mismatch(
                    rule,
                    format!("the assumption {assumption} is not the antecedent {antecedent}"),
                ));
            }

            match established {
                Some(formula) if same(formula, consequent) => Ok(()),
                _ => Err(mismatch(
                    rule,
                    format!("the consequent {consequent} is not established"),
                )),
            }
        }

        Rule::IndirectDerivation => {
            if let Some(assumption) = assumptions
                .iter()
                .find(|a| !is_negation_of(show, a) && !is_negation_of(a, show))
            {
                return Err(mismatch(
                    rule,
                    format!("the assumption {assumption} is not the negation of {show}"),
                ));
            }

            let contradiction = cited.iter().any(|a| cited.iter().any(|b| is_negation_of(a, b)));

            match established {
                Some(formula) if same(formula, FALSUM) => Ok(()),
                _ if contradiction => Ok(()),
                _ => Err(mismatch(rule, format!("{FALSUM} is not established"))),
            }
        }

        _ => Err(mismatch(rule, "the rule does not close a subproof")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditional_derivation() {
        assert!(check_qed(Rule::ConditionalDerivation, "P→P", &["P"], None, &["P"]).is_ok());
        assert!(check_qed(Rule::ConditionalDerivation, "P→Q", &[], Some("Q"), &["P"]).is_ok());
        assert!(check_qed(Rule::ConditionalDerivation, "P→Q", &["Q"], None, &["R"]).is_err());
        assert!(check_qed(Rule::ConditionalDerivation, "P∧Q", &["Q"], None, &["P"]).is_err());
    }

    #[test]
    fn indirect_derivation() {
        assert!(check_qed(Rule::IndirectDerivation, "P", &["⊥"], None, &["¬P"]).is_ok());
        assert!(check_qed(Rule::IndirectDerivation, "¬P", &[], Some("⊥"), &["P"]).is_ok());
        assert!(check_qed(Rule::IndirectDerivation, "P", &["Q", "¬Q"], None, &["¬P"]).is_ok());
        assert!(check_qed(Rule::IndirectDerivation, "P", &["Q"], None, &["¬P"]).is_err());
        assert!(check_qed(Rule::IndirectDerivation, "P", &["⊥"], None, &["Q"]).is_err());
    }

    #[test]
    fn direct_derivation() {
        assert!(check_qed(Rule::DirectDerivation, "Q", &["Q"], None, &[]).is_ok());
        assert!(check_qed(Rule::DirectDerivation, "Q", &["Q"], None, &["P"]).is_err());
    }
}
