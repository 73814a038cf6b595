/*!
A line of a proof, as parsed.

Lines are numbered from 1, in text order, with premises numbered first.
A line is created once by the [proof parser](crate::parse::proof) and is never mutated.

The formula of a line is kept as its [canonical string](crate::parse::canonical_form), as formulas are compared by string throughout validation.
A line which closes a subproof (a 'QED' line) has no formula of its own, and is given the [QED] sentinel in place of a formula.
*/

/// The formula of a line closing a subproof.
pub const QED: &str = "QED";

/// A line of a proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofLine {
    /// The (1-based) number of the line.
    pub line_number: usize,

    /// The canonical string of the formula of the line, or [QED].
    pub formula: String,

    /// The justification, as written.
    pub justification: String,

    /// The rule code of the justification, as written.
    pub rule: String,

    /// Cited lines, in the order written, with ranges expanded.
    pub cited_lines: Vec<usize>,

    /// The depth of the line, with 0 the depth of the premises.
    pub subproof_level: usize,

    pub is_premise: bool,

    /// Whether the line opens a subgoal, to be closed by some later QED line.
    pub is_show: bool,

    pub is_qed: bool,
}

impl ProofLine {
    /// A premise line.
    pub fn premise(line_number: usize, formula: String) -> Self {
        ProofLine {
            line_number,
            formula,
            justification: "PR".to_string(),
            rule: "PR".to_string(),
            cited_lines: Vec::default(),
            subproof_level: 0,
            is_premise: true,
            is_show: false,
            is_qed: false,
        }
    }
}

impl std::fmt::Display for ProofLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let indent = "    ".repeat(self.subproof_level);
        match (self.is_show, self.is_qed) {
            (true, _) => write!(f, "{:>3}. {indent}show {}", self.line_number, self.formula),
            (_, true) => write!(f, "{:>3}. {indent}:{}", self.line_number, self.justification),
            _ => write!(
                f,
                "{:>3}. {indent}{} :{}",
                self.line_number, self.formula, self.justification
            ),
        }
    }
}
