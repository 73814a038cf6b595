/*!
Reports returned by the [procedures](crate::procedures).

Each report is serialized with camelCase field names, e.g. `counterModel` and `rulesUsed`, and has a plain text form by [Display](std::fmt::Display).
*/

use serde::Serialize;

use crate::countermodel::Countermodel;

/// The verdict on a proof.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Whether the proof is a valid derivation of the conclusion from the premises.
    pub ok: bool,

    /// The first problem found, if any.
    pub error: Option<String>,

    /// Every validation error, in order of line.
    pub errors: Vec<String>,

    /// Every parse warning, in order of line.
    pub warnings: Vec<String>,

    /// The count of lines which are not premises.
    pub lines: usize,

    /// The deepest level of any subproof.
    pub depth: usize,

    /// A valuation on which the premises are true and the conclusion false, if the proof is not valid and one was found.
    pub counter_model: Option<Countermodel>,

    /// Canonical codes of the rules used.
    pub rules_used: Vec<String>,

    pub suggestions: Vec<String>,
}

/// The result of a search for a proof.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    pub success: bool,

    /// The proof found, in the notation read by the proof parser.
    pub proof: Option<String>,

    /// The count of lines of the proof found, premises excluded.
    pub length: Option<usize>,
}

/// The result of checking a claim on the length of a shortest proof.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalityReport {
    /// Whether some proof was found.
    pub valid: bool,

    pub found_length: Option<usize>,

    /// Whether no proof shorter than the claimed length was found.
    pub is_optimal: bool,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.ok {
            true => writeln!(f, "Valid ({} lines, depth {})", self.lines, self.depth)?,
            false => writeln!(f, "Invalid ({} lines, depth {})", self.lines, self.depth)?,
        }

        for warning in &self.warnings {
            writeln!(f, "  warning: {warning}")?;
        }
        for error in &self.errors {
            writeln!(f, "  error: {error}")?;
        }

        if let Some(countermodel) = &self.counter_model {
            let values = countermodel
                .iter()
                .map(|(name, value)| match value {
                    true => format!("{name}=T"),
                    false => format!("{name}=F"),
                })
                .collect::<Vec<_>>();
            writeln!(f, "  countermodel: {}", values.join(" "))?;
        }

        if !self.rules_used.is_empty() {
            writeln!(f, "  rules: {}", self.rules_used.join(" "))?;
        }

        for suggestion in &self.suggestions {
            writeln!(f, "  suggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::fmt::Display for SolveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.proof, self.length) {
            (Some(proof), Some(length)) => {
                writeln!(f, "Found a proof of {length} lines")?;
                writeln!(f, "{proof}")
            }
            _ => writeln!(f, "No proof found"),
        }
    }
}

impl std::fmt::Display for OptimalityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.found_length {
            Some(length) => writeln!(
                f,
                "Found a proof of {length} lines (optimal claim {})",
                match self.is_optimal {
                    true => "holds",
                    false => "fails",
                }
            ),
            None => writeln!(f, "No proof found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_fields() {
        let verdict = Verdict {
            counter_model: Some(Countermodel::from([("P".to_string(), false)])),
            rules_used: vec!["MP".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&verdict).unwrap();

        assert_eq!(json["counterModel"]["P"], serde_json::json!(false));
        assert_eq!(json["rulesUsed"][0], serde_json::json!("MP"));

        let report = OptimalityReport {
            valid: true,
            found_length: Some(1),
            is_optimal: true,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["foundLength"], serde_json::json!(1));
        assert_eq!(json["isOptimal"], serde_json::json!(true));
    }
}
