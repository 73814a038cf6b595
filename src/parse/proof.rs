/*!
A parser for Fitch-style proofs.

A proof is given as text, one line per step, together with a list of premises.
Premises are numbered first, from 1, and each remaining step is numbered in order.

Each line of text is one of:
- `<formula> :<rule> <citations>`, a step.
- `show <formula>`, a subgoal, to be followed by a more deeply indented block.
- `:<rule> <citations>`, a 'QED' line closing the innermost open subgoal.

Blank lines, and lines of dashes such as `--` or `---`, are ignored, as is a leading label such as `3.`.

Indentation alone determines the level of a line, where a tab counts as four spaces, and the least indentation of any line is level 0.
Citations are separated by commas or whitespace, and may be inclusive ranges such as `2-4`.
A range must end before the line citing it.

```rust
# use fitch_engine::parse::proof::parse_proof;
let proof = "
show P→P
    P :AS
:CD 2
";
let parsed = parse_proof(proof, &[]);

assert!(parsed.warnings.is_empty());
assert_eq!(parsed.lines.len(), 3);
assert!(parsed.lines[0].is_show);
assert_eq!(parsed.lines[1].subproof_level, 1);
assert!(parsed.lines[2].is_qed);
assert_eq!(parsed.lines[2].cited_lines, vec![2]);
```

Malformed lines are noted as [warnings](ParseWarning), and parsing continues.
*/

use crate::{
    misc::log::targets,
    parse::{normalize::normalize, try_canonical_form},
    structures::proof_line::{ProofLine, QED},
    types::err::ParseWarning,
};

/// The width of a tab, in spaces.
const TAB_WIDTH: usize = 4;

/// The lines of a proof, and any warnings noted while parsing the proof.
#[derive(Clone, Debug, Default)]
pub struct ParsedProof {
    pub lines: Vec<ProofLine>,
    pub warnings: Vec<ParseWarning>,
}

/// Parses the premises and the text of a proof.
pub fn parse_proof(proof_text: &str, premises: &[String]) -> ParsedProof {
    let mut parsed = ParsedProof::default();

    for (index, premise) in premises.iter().enumerate() {
        let line_number = index + 1;
        let formula = canonical_or_warn(premise, line_number, &mut parsed.warnings);
        parsed.lines.push(ProofLine::premise(line_number, formula));
    }

    let base = proof_text
        .lines()
        .filter(|text_line| {
            let content = strip_label(text_line.trim());
            !content.is_empty() && !is_separator(content)
        })
        .map(indent_width)
        .min()
        .unwrap_or(0);
    let mut indentation = IndentationStack { widths: vec![base] };

    for (text_index, text_line) in proof_text.lines().enumerate() {
        let content = strip_label(text_line.trim());
        if content.is_empty() || is_separator(content) {
            continue;
        }

        let subproof_level = indentation.level_of(indent_width(text_line));
        let line_number = parsed.lines.len() + 1;

        if let Some(goal) = strip_show(content) {
            let goal = match goal.split_once(':') {
                Some((formula, _)) => formula.trim(),
                None => goal,
            };
            let formula = canonical_or_warn(goal, line_number, &mut parsed.warnings);
            log::trace!(target: targets::PROOF, "Line {line_number}: show {formula} at level {subproof_level}");

            parsed.lines.push(ProofLine {
                line_number,
                formula,
                justification: String::default(),
                rule: String::default(),
                cited_lines: Vec::default(),
                subproof_level,
                is_premise: false,
                is_show: true,
                is_qed: false,
            });
            continue;
        }

        let Some((formula_text, justification)) = content.split_once(':') else {
            log::debug!(target: targets::PROOF, "Skipped text line {}: {content}", text_index + 1);
            parsed.warnings.push(ParseWarning::MissingJustification {
                text_line: text_index + 1,
                text: content.to_string(),
            });
            continue;
        };

        let formula_text = formula_text.trim();
        let justification = justification.trim();
        let (rule, citation_text) = split_rule(justification);
        let cited_lines = parse_citations(citation_text, line_number, &mut parsed.warnings);

        let is_qed = formula_text.is_empty();
        let formula = match is_qed {
            true => QED.to_string(),
            false => canonical_or_warn(formula_text, line_number, &mut parsed.warnings),
        };

        log::trace!(target: targets::PROOF, "Line {line_number}: {formula} :{rule} {cited_lines:?} at level {subproof_level}");

        parsed.lines.push(ProofLine {
            line_number,
            formula,
            justification: justification.to_string(),
            rule: rule.to_string(),
            cited_lines,
            subproof_level,
            is_premise: false,
            is_show: false,
            is_qed,
        });
    }

    check_show_blocks(&mut parsed);

    parsed
}

/// The levels of indentation seen, with the least indentation of the proof at level 0.
struct IndentationStack {
    widths: Vec<usize>,
}

impl IndentationStack {
    fn level_of(&mut self, width: usize) -> usize {
        while let Some(top) = self.widths.last() {
            match (*top).cmp(&width) {
                std::cmp::Ordering::Greater => {
                    self.widths.pop();
                }
                std::cmp::Ordering::Equal => return self.widths.len() - 1,
                std::cmp::Ordering::Less => break,
            }
        }
        self.widths.push(width);
        self.widths.len() - 1
    }
}

fn indent_width(text_line: &str) -> usize {
    let mut width = 0;
    for character in text_line.chars() {
        match character {
            ' ' => width += 1,
            '\t' => width += TAB_WIDTH,
            _ => break,
        }
    }
    width
}

/// A run of two or more dashes.
fn is_separator(content: &str) -> bool {
    content.len() >= 2 && content.chars().all(|c| c == '-')
}

/// The content of a line without a leading label such as `3.` or `3)`.
fn strip_label(content: &str) -> &str {
    let digits = content.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return content;
    }
    let rest = &content[digits..];
    match rest.chars().next() {
        Some('.') | Some(')') => rest[1..].trim_start(),
        _ => content,
    }
}

/// The goal of a show line, if the content is a show line.
fn strip_show(content: &str) -> Option<&str> {
    let prefix = content.get(..4)?;
    if !prefix.eq_ignore_ascii_case("show") {
        return None;
    }
    let rest = &content[4..];
    match rest.chars().next() {
        Some(c) if c.is_alphanumeric() => None,
        _ => {
            let goal = rest.trim_start_matches(':').trim();
            match goal.is_empty() {
                true => None,
                false => Some(goal),
            }
        }
    }
}

/// Splits a justification into a rule code and the text of the citations.
///
/// The code ends at the first whitespace or the first digit, so both `MP 1,2` and `MP1,2` are read.
fn split_rule(justification: &str) -> (&str, &str) {
    let end = justification
        .char_indices()
        .find(|(_, c)| c.is_whitespace() || c.is_ascii_digit())
        .map(|(index, _)| index)
        .unwrap_or(justification.len());
    (justification[..end].trim(), justification[end..].trim())
}

fn parse_citations(text: &str, line: usize, warnings: &mut Vec<ParseWarning>) -> Vec<usize> {
    let mut cited = Vec::default();

    for token in text.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }

        if let Ok(number) = token.parse::<usize>() {
            cited.push(number);
            continue;
        }

        let range = token
            .split_once(['-', '–'])
            .and_then(|(from, to)| Some((from.parse::<usize>().ok()?, to.parse::<usize>().ok()?)));

        match range {
            Some((from, to)) if from <= to && to < line => cited.extend(from..=to),
            Some((_, to)) if to >= line => {
                log::debug!(target: targets::PROOF, "Line {line}: dropped citation {token}");
                warnings.push(ParseWarning::CitationRangeOutOfBounds {
                    line,
                    token: token.to_string(),
                });
            }
            _ => {
                log::debug!(target: targets::PROOF, "Line {line}: dropped citation {token}");
                warnings.push(ParseWarning::MalformedCitation {
                    line,
                    token: token.to_string(),
                });
            }
        }
    }

    cited
}

fn canonical_or_warn(text: &str, line: usize, warnings: &mut Vec<ParseWarning>) -> String {
    match try_canonical_form(text) {
        Ok(canonical) => canonical,
        Err(error) => {
            warnings.push(ParseWarning::FormulaSyntax {
                line,
                text: text.to_string(),
                error,
            });
            normalize(text)
        }
    }
}

/// Notes each show line which is not followed by a more deeply indented line.
fn check_show_blocks(parsed: &mut ParsedProof) {
    for (index, line) in parsed.lines.iter().enumerate() {
        if !line.is_show {
            continue;
        }
        let opens_block = parsed
            .lines
            .get(index + 1)
            .is_some_and(|next| next.subproof_level > line.subproof_level);
        if !opens_block {
            parsed.warnings.push(ParseWarning::ShowWithoutBlock {
                line: line.line_number,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premises_are_numbered_first() {
        let premises = vec!["P".to_string(), "P -> Q".to_string()];
        let parsed = parse_proof("Q :MP 1,2", &premises);

        assert!(parsed.warnings.is_empty());
        assert_eq!(parsed.lines.len(), 3);
        assert!(parsed.lines[1].is_premise);
        assert_eq!(parsed.lines[1].formula, "P→Q");
        assert_eq!(parsed.lines[2].line_number, 3);
        assert_eq!(parsed.lines[2].rule, "MP");
        assert_eq!(parsed.lines[2].cited_lines, vec![1, 2]);
    }

    #[test]
    fn missing_justification_is_skipped() {
        let parsed = parse_proof("P ∧ Q\nP :R 1", &[]);

        assert_eq!(parsed.lines.len(), 1);
        assert_eq!(parsed.lines[0].line_number, 1);
        assert!(matches!(
            parsed.warnings.as_slice(),
            [ParseWarning::MissingJustification { text_line: 1, .. }]
        ));
    }

    #[test]
    fn citations() {
        let premises = vec!["P".to_string(); 5];
        let parsed = parse_proof("P :&I 1-3, x, 5", &premises);

        assert_eq!(parsed.lines[5].cited_lines, vec![1, 2, 3, 5]);
        assert!(matches!(
            parsed.warnings.as_slice(),
            [ParseWarning::MalformedCitation { line: 6, token }] if token == "x"
        ));
    }

    #[test]
    fn citation_ranges_end_before_the_line() {
        let parsed = parse_proof("P :R 1-20000000", &["P".to_string()]);

        assert!(parsed.lines[1].cited_lines.is_empty());
        assert!(matches!(
            parsed.warnings.as_slice(),
            [ParseWarning::CitationRangeOutOfBounds { line: 2, token }] if token == "1-20000000"
        ));

        let parsed = parse_proof(&format!("P :R 1-{}", usize::MAX), &[]);
        assert!(parsed.lines[0].cited_lines.is_empty());
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn rule_codes_without_spaces() {
        assert_eq!(split_rule("MP1,2"), ("MP", "1,2"));
        assert_eq!(split_rule("<->E 4"), ("<->E", "4"));
        assert_eq!(split_rule("AS"), ("AS", ""));
    }

    #[test]
    fn levels_and_separators() {
        let proof = "
1. show P→(Q→P)
---
\tP :AS
    show Q→P
        Q :AS
        P :R 2
    :CD 5
:CD 3
";
        let parsed = parse_proof(proof, &[]);
        assert!(parsed.warnings.is_empty(), "{:?}", parsed.warnings);

        let levels = parsed
            .lines
            .iter()
            .map(|line| line.subproof_level)
            .collect::<Vec<_>>();
        assert_eq!(levels, vec![0, 1, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn show_without_block() {
        let parsed = parse_proof("show P\nP :R 1", &[]);
        assert!(matches!(
            parsed.warnings.as_slice(),
            [ParseWarning::ShowWithoutBlock { line: 1 }]
        ));
    }

    #[test]
    fn formula_syntax() {
        let parsed = parse_proof("P ∧ :R 1", &[]);
        assert_eq!(parsed.lines.len(), 1);
        assert_eq!(parsed.lines[0].formula, "P∧");
        assert!(matches!(
            parsed.warnings.as_slice(),
            [ParseWarning::FormulaSyntax { line: 1, .. }]
        ));
    }
}
