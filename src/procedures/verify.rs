/*!
Verification of a proof.

```rust
# use fitch_engine::procedures::verify::verify;
let verdict = verify("P, P→Q", "Q", "Q :MP 1,2");
assert!(verdict.ok);
assert_eq!(verdict.lines, 1);

let verdict = verify("", "P→P", "show P→P\n    P :AS\n:CD 2");
assert!(verdict.ok);
assert_eq!(verdict.depth, 1);
```

Verification proceeds in stages:
1. The premises are split, and the proof is [parsed](crate::parse::proof::parse_proof), noting any warnings.
2. The lines of the proof are [validated](crate::validate::validate) against the conclusion.
3. If the proof is not valid, a [countermodel](crate::countermodel) to the argument is sought.

A proof is valid only if there are no warnings and no validation errors.
Malformed input never causes a panic, and is instead noted in the verdict.
*/

use crate::{
    config::Config,
    countermodel::{find_countermodel, Countermodel},
    misc::log::targets,
    parse::{formula::parse, proof::parse_proof, split_premises, try_canonical_form},
    reports::Verdict,
    types::err::{ParseWarning, ValidationError, ValidationErrorKind},
    validate::validate,
};

/// Verifies a proof of the conclusion `phi` from the comma separated premises `gamma`, with the default configuration.
pub fn verify(gamma: &str, phi: &str, proof: &str) -> Verdict {
    verify_with_config(gamma, phi, proof, &Config::default())
}

/// Verifies a proof of the conclusion `phi` from the comma separated premises `gamma`.
pub fn verify_with_config(gamma: &str, phi: &str, proof: &str, config: &Config) -> Verdict {
    let premises = split_premises(gamma);

    let conclusion = match try_canonical_form(phi) {
        Ok(conclusion) => conclusion,
        Err(e) => {
            let error = format!("Conclusion: {e}");
            return Verdict {
                error: Some(error.clone()),
                errors: vec![error],
                ..Default::default()
            };
        }
    };

    let parsed = parse_proof(proof, &premises);
    let validation = validate(&parsed.lines, &conclusion, config);

    let ok = validation.ok && parsed.warnings.is_empty();
    log::info!(target: targets::VALIDATION, "Verified a proof of {conclusion}: {ok}");

    let counter_model = match ok {
        true => None,
        false => countermodel_of(&premises, phi, config),
    };

    let warnings = parsed
        .warnings
        .iter()
        .map(ParseWarning::to_string)
        .collect::<Vec<_>>();
    let errors = validation
        .errors
        .iter()
        .map(ValidationError::to_string)
        .collect::<Vec<_>>();

    let suggestions = suggestions(
        &parsed.warnings,
        &validation.errors,
        counter_model.as_ref(),
    );

    let proof_lines = parsed.lines.iter().filter(|line| !line.is_premise);

    Verdict {
        ok,
        error: warnings.first().or(errors.first()).cloned(),
        lines: proof_lines.clone().count(),
        depth: proof_lines.map(|line| line.subproof_level).max().unwrap_or(0),
        counter_model,
        rules_used: validation.rules_used.into_iter().collect(),
        suggestions,
        errors,
        warnings,
    }
}

/// A countermodel to the argument, if every premise and the conclusion are propositional formulas.
fn countermodel_of(premises: &[String], conclusion: &str, config: &Config) -> Option<Countermodel> {
    let premises = premises
        .iter()
        .map(|premise| parse(premise))
        .collect::<Result<Vec<_>, _>>()
        .ok()?;
    let conclusion = parse(conclusion).ok()?;

    find_countermodel(&premises, &conclusion, config)
}

/// Hints on how to repair a proof, at most one of each kind.
fn suggestions(
    warnings: &[ParseWarning],
    errors: &[ValidationError],
    countermodel: Option<&Countermodel>,
) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::default();
    let mut suggest = |suggestion: &str| {
        if !suggestions.iter().any(|s| s == suggestion) {
            suggestions.push(suggestion.to_string());
        }
    };

    if countermodel.is_some() {
        suggest("The conclusion does not follow from the premises, as the countermodel shows. Check the premises and the conclusion.");
    }

    for warning in warnings {
        match warning {
            ParseWarning::MissingJustification { .. } => {
                suggest("Write each step as 'formula :RULE lines', e.g. 'Q :MP 1,2'.")
            }
            ParseWarning::MalformedCitation { .. } => {
                suggest("Cite lines by number, separated by commas, or as a range such as '2-4'.")
            }
            ParseWarning::CitationRangeOutOfBounds { .. } => {
                suggest("Cite only lines before the line citing them.")
            }
            ParseWarning::ShowWithoutBlock { .. } => {
                suggest("Indent the lines proving a show line beneath it.")
            }
            ParseWarning::FormulaSyntax { .. } => {
                suggest("Check the parentheses and connectives of each formula.")
            }
        }
    }

    for error in errors {
        match &error.kind {
            ValidationErrorKind::InaccessibleCitation { .. } => suggest(
                "Cite only earlier lines which are not inside a closed subproof.",
            ),
            ValidationErrorKind::UnknownRule { .. } => suggest(
                "Use a rule code such as MP, MT, &I, &E, ADD, MTP, DN, R, CD, ID, or DD.",
            ),
            ValidationErrorKind::CitationCount { .. } => {
                suggest("Check how many lines each rule cites.")
            }
            ValidationErrorKind::RuleMismatch { .. } => {
                suggest("Check each formula matches the schema of its rule and the formulas cited.")
            }
            ValidationErrorKind::AssumptionOutsideSubproof => {
                suggest("Make assumptions only as the first lines of an indented subproof.")
            }
            ValidationErrorKind::QedWithoutShow | ValidationErrorKind::UnclosedShow => {
                suggest("Close each show line with exactly one line such as ':CD n' or ':ID n', at the level of the show line.")
            }
            ValidationErrorKind::ClosingRuleOutsideQed { .. } => {
                suggest("Use DD, CD, and ID only on a line closing a show line.")
            }
            ValidationErrorKind::ConclusionNotEstablished { .. } => {
                suggest("End the proof with the conclusion at the top level, outside any subproof.")
            }
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SatBackendKind;

    fn config() -> Config {
        let mut config = Config::default();
        config.sat.backend.value = SatBackendKind::Internal;
        config
    }

    #[test]
    fn bad_conclusion() {
        let verdict = verify_with_config("P", "P ∧", "P :R 1", &config());
        assert!(!verdict.ok);
        assert!(verdict.error.is_some_and(|error| error.starts_with("Conclusion")));
    }

    #[test]
    fn warnings_fail_the_proof() {
        let verdict = verify_with_config("P, P→Q", "Q", "Q :MP 1,2\nR", &config());
        assert!(!verdict.ok);
        assert_eq!(verdict.warnings.len(), 1);
        assert!(verdict.errors.is_empty());
        assert!(verdict.counter_model.is_none());
    }

    #[test]
    fn invalid_arguments_have_countermodels() {
        let verdict = verify_with_config("P→Q", "P", "P :MP 1", &config());
        assert!(!verdict.ok);
        assert_eq!(
            verdict.counter_model,
            Some(Countermodel::from([
                ("P".to_string(), false),
                ("Q".to_string(), false)
            ]))
        );
        assert!(!verdict.suggestions.is_empty());
    }
}
