use crate::structures::proof_line::ProofLine;

/// The indentation of one level of a proof.
const INDENT: &str = "    ";

/// Lines of a proof, as text which may be parsed back with the same premises.
///
/// Premises are omitted, and each level of a subproof is indented by four spaces.
///
/// ```rust
/// # use fitch_engine::search::{find_proof, render_proof};
/// # use fitch_engine::config::Config;
/// # use fitch_engine::parse::formula::parse;
/// let config = Config::default();
/// let conclusion = parse("P→P").unwrap();
/// let lines = find_proof(&[], &conclusion, 10, &config.search).unwrap();
///
/// assert_eq!(render_proof(&lines), "show P→P\n    P :AS\n:CD 2");
/// ```
pub fn render_proof(lines: &[ProofLine]) -> String {
    lines
        .iter()
        .filter(|line| !line.is_premise)
        .map(|line| {
            let indent = INDENT.repeat(line.subproof_level);
            match (line.is_show, line.is_qed) {
                (true, _) => format!("{indent}show {}", line.formula),
                (_, true) => format!("{indent}:{}", line.justification),
                _ => format!("{indent}{} :{}", line.formula, line.justification),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
