/*!
Search for a proof.

```rust
# use fitch_engine::procedures::{solve::solve, verify::verify};
let report = solve("P∧Q", "Q∧P");
assert!(report.success);

// Proofs found are accepted by the verifier.
let proof = report.proof.unwrap();
assert!(verify("P∧Q", "Q∧P", &proof).ok);
```
*/

use crate::{
    config::Config,
    misc::log::targets,
    parse::{formula::parse, split_premises},
    reports::SolveReport,
    search::{find_proof, render_proof},
    structures::formula::Formula,
};

/// Searches for a proof of `phi` from the comma separated premises `gamma`, with the default configuration.
pub fn solve(gamma: &str, phi: &str) -> SolveReport {
    solve_with_config(gamma, phi, &Config::default())
}

/// Searches for a proof of `phi` from the comma separated premises `gamma`.
pub fn solve_with_config(gamma: &str, phi: &str, config: &Config) -> SolveReport {
    let Some((premises, conclusion)) = parse_argument(&split_premises(gamma), phi) else {
        return SolveReport::default();
    };

    match find_proof(
        &premises,
        &conclusion,
        config.search.max_depth.value,
        &config.search,
    ) {
        Some(lines) => {
            let length = lines.iter().filter(|line| !line.is_premise).count();
            SolveReport {
                success: true,
                proof: Some(render_proof(&lines)),
                length: Some(length),
            }
        }
        None => SolveReport::default(),
    }
}

/// The premises and conclusion of an argument as formulas, if each is a propositional formula.
pub(crate) fn parse_argument<S: AsRef<str>>(
    premises: &[S],
    conclusion: &str,
) -> Option<(Vec<Formula>, Formula)> {
    let mut formulas = Vec::with_capacity(premises.len());
    for premise in premises {
        match parse(premise.as_ref()) {
            Ok(formula) => formulas.push(formula),
            Err(e) => {
                log::warn!(target: targets::SEARCH, "Premise {}: {e}", premise.as_ref());
                return None;
            }
        }
    }

    match parse(conclusion) {
        Ok(conclusion) => Some((formulas, conclusion)),
        Err(e) => {
            log::warn!(target: targets::SEARCH, "Conclusion {conclusion}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_arguments_fail() {
        let report = solve("P →", "P");
        assert!(!report.success);
        assert!(report.proof.is_none());
    }

    #[test]
    fn premise_as_conclusion() {
        let report = solve("P, Q", "Q");
        assert_eq!(report.proof.as_deref(), Some("Q :R 2"));
        assert_eq!(report.length, Some(1));
    }
}
