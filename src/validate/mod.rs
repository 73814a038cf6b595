/*!
The inference validator.

[validate] walks the lines of a proof in order, keeping a [scope](scope::Scope) of accessible lines and open subproofs, and checks each line against its rule.

For each line which is not a premise, assumption, or show line:
1. Every cited line must be accessible.
2. The formula of the line must follow from the cited formulas by the [rule](crate::structures::rule::Rule) of the line.

QED lines are checked against the innermost open show line by the [closing rules](closing).
Every line is checked, even after some line fails, so all errors of a proof are found at once.

A proof establishes its conclusion if some line at the top level (or some closed show line at the top level) has the conclusion as its formula.

```rust
# use fitch_engine::parse::proof::parse_proof;
# use fitch_engine::validate::validate;
# use fitch_engine::config::Config;
let premises = vec!["P".to_string(), "P→Q".to_string()];
let parsed = parse_proof("Q :MP 1,2", &premises);
let validation = validate(&parsed.lines, "Q", &Config::default());

assert!(validation.ok);
assert!(validation.rules_used.contains("MP"));
```

Validation holds no state between calls.
*/

pub mod closing;
pub mod quantifier;
pub mod rules;
pub mod scope;
pub mod shape;

use std::{collections::BTreeSet, str::FromStr};

use crate::{
    config::Config,
    misc::log::targets,
    structures::{proof_line::ProofLine, rule::Rule},
    types::err::{ValidationError, ValidationErrorKind},
};

use rules::{Citation, RuleContext};
use scope::Scope;

/// The result of validating a proof.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    /// Whether every line is valid and the conclusion is established.
    pub ok: bool,

    pub errors: Vec<ValidationError>,

    /// Canonical codes of the rules used, in order.
    pub rules_used: BTreeSet<String>,
}

/// A show line which has yet to be closed.
struct PendingShow {
    line: usize,
    level: usize,

    /// Whether some frame has been opened as the block of the show line.
    framed: bool,
}

/// The state of a walk through the lines of a proof.
struct Walk<'a> {
    config: &'a Config,

    scope: Scope,

    /// The formula each line establishes, indexed from 0.
    /// For a QED line, this is the formula of the show line closed.
    established: Vec<String>,

    premises: Vec<String>,

    pending: Vec<PendingShow>,

    /// Show lines closed by some QED line.
    closed_shows: BTreeSet<usize>,

    errors: Vec<ValidationError>,

    rules_used: BTreeSet<String>,
}

/// Validates the lines of a proof, with the given conclusion.
pub fn validate(lines: &[ProofLine], conclusion: &str, config: &Config) -> Validation {
    let mut walk = Walk {
        config,
        scope: Scope::default(),
        established: Vec::with_capacity(lines.len()),
        premises: Vec::default(),
        pending: Vec::default(),
        closed_shows: BTreeSet::default(),
        errors: Vec::default(),
        rules_used: BTreeSet::default(),
    };

    for line in lines {
        walk.step(line);
    }

    walk.finish(lines, conclusion)
}

impl Walk<'_> {
    fn error(&mut self, line: usize, kind: ValidationErrorKind) {
        log::debug!(target: targets::VALIDATION, "Line {line}: {kind}");
        self.errors.push(ValidationError {
            line: Some(line),
            kind,
        });
    }

    fn formula_of(&self, line: usize) -> Option<&str> {
        line.checked_sub(1)
            .and_then(|index| self.established.get(index))
            .map(String::as_str)
    }

    fn step(&mut self, line: &ProofLine) {
        let number = line.line_number;

        if line.is_premise {
            self.scope.add_premise(number);
            self.premises.push(line.formula.clone());
            self.established.push(line.formula.clone());
            return;
        }

        if line.is_qed {
            self.close_show(line);
            return;
        }

        self.close_frames_deeper_than(line.subproof_level);
        self.open_frames_to(line.subproof_level, number);
        self.established.push(line.formula.clone());

        if line.is_show {
            self.scope.note(number);
            self.pending.push(PendingShow {
                line: number,
                level: line.subproof_level,
                framed: false,
            });
            return;
        }

        let Ok(rule) = Rule::from_str(&line.rule) else {
            self.error(
                number,
                ValidationErrorKind::UnknownRule {
                    code: line.rule.clone(),
                },
            );
            self.scope.make_accessible(number);
            return;
        };
        self.rules_used.insert(rule.code().to_string());

        match rule {
            Rule::Assumption => {
                if !self.scope.add_assumption(number) {
                    self.error(number, ValidationErrorKind::AssumptionOutsideSubproof);
                }
            }

            _ => self.check_line(line, rule),
        }

        self.scope.make_accessible(number);
    }

    fn close_frames_deeper_than(&mut self, level: usize) {
        while self.scope.depth() > level {
            self.close_frame();
        }
    }

    /// Closes the innermost frame, noting an error if the frame is the block of an unclosed show line.
    fn close_frame(&mut self) {
        let Some(frame) = self.scope.close(&self.established) else {
            return;
        };
        log::trace!(target: targets::VALIDATION, "Closed the subproof from line {}", frame.start_line);

        if let Some(show) = frame.show {
            if let Some(index) = self.pending.iter().position(|pending| pending.line == show) {
                self.pending.remove(index);
                self.error(show, ValidationErrorKind::UnclosedShow);
            }
        }
    }

    fn open_frames_to(&mut self, level: usize, line: usize) {
        if level <= self.scope.depth() {
            return;
        }

        let depth = self.scope.depth();
        let show = self
            .pending
            .iter_mut()
            .rev()
            .find(|pending| !pending.framed && pending.level == depth)
            .map(|pending| {
                pending.framed = true;
                pending.line
            });

        self.scope.open(line, show);
        while self.scope.depth() < level {
            self.scope.open(line, None);
        }
    }

    /// Resolves the citations of a line, or returns the citations which are not accessible.
    ///
    /// If subproofs are accepted, a range of lines which is exactly a closed subproof is read as a citation of that subproof.
    fn resolve_citations(
        &self,
        line: &ProofLine,
        subproofs: bool,
    ) -> Result<Vec<Citation<'_>>, Vec<usize>> {
        let cited = &line.cited_lines;

        let mut citations = Vec::default();
        let mut inaccessible = Vec::default();
        let mut index = 0;

        'citation_loop: while index < cited.len() {
            let first = cited[index];

            if subproofs {
                if let Some(subproof) = self.scope.closed_subproof(first) {
                    let length = subproof.last - subproof.first + 1;
                    let spans = cited.get(index..index + length).is_some_and(|range| {
                        range.iter().zip(subproof.first..).all(|(a, b)| *a == b)
                    });
                    if spans {
                        citations.push(Citation::Subproof(subproof));
                        index += length;
                        continue 'citation_loop;
                    }
                }
            }

            match self.formula_of(first) {
                Some(formula) if self.scope.is_accessible(first) => {
                    citations.push(Citation::Line(formula))
                }
                _ => inaccessible.push(first),
            }
            index += 1;
        }

        match inaccessible.is_empty() {
            true => Ok(citations),
            false => Err(inaccessible),
        }
    }

    /// Formulas in which an arbitrary term must not occur.
    fn fresh_context(&self) -> Vec<String> {
        let mut context = self.premises.clone();
        for assumption in self.scope.open_assumptions() {
            if let Some(formula) = self.formula_of(assumption) {
                context.push(formula.to_string());
            }
        }
        context
    }

    fn check_line(&mut self, line: &ProofLine, rule: Rule) {
        let accepts_subproofs = matches!(
            rule,
            Rule::ConditionalIntroduction
                | Rule::NegationIntroduction
                | Rule::IndirectDerivation
                | Rule::DisjunctionElimination
                | Rule::ExistentialElimination
        );

        let fresh_context = match rule.is_quantifier() {
            true => self.fresh_context(),
            false => Vec::default(),
        };

        let context = RuleContext {
            premises: &self.premises,
            fresh_context: &fresh_context,
            lenient: self.config.validation.lenient.value,
        };

        let failures = match self.resolve_citations(line, accepts_subproofs) {
            Ok(citations) => match rules::check(rule, &line.formula, &citations, &context) {
                Ok(()) => Vec::default(),
                Err(kind) => vec![kind],
            },
            Err(inaccessible) => inaccessible
                .into_iter()
                .map(|cited| ValidationErrorKind::InaccessibleCitation { cited })
                .collect(),
        };

        for kind in failures {
            self.error(line.line_number, kind);
        }
    }

    fn close_show(&mut self, line: &ProofLine) {
        let number = line.line_number;

        let Some(pending) = self.pending.pop() else {
            self.error(number, ValidationErrorKind::QedWithoutShow);
            self.close_frames_deeper_than(line.subproof_level);
            self.established.push(line.formula.clone());
            self.scope.make_accessible(number);
            return;
        };

        let show_formula = self.formula_of(pending.line).unwrap_or_default().to_string();

        let frame_index = self
            .scope
            .frames()
            .iter()
            .position(|frame| frame.show == Some(pending.line));

        // Frames nested in the block of the show line are closed before the QED line is checked.
        match frame_index {
            Some(index) => {
                while self.scope.frames().len() > index + 1 {
                    self.close_frame();
                }
            }
            None => self.close_frames_deeper_than(pending.level),
        }

        self.check_qed(line, &pending, &show_formula, frame_index);

        if let Some(index) = frame_index {
            while self.scope.frames().len() > index {
                self.close_frame();
            }
        }
        self.close_frames_deeper_than(line.subproof_level);

        self.established.push(show_formula);
        self.closed_shows.insert(pending.line);
        self.scope.make_accessible(pending.line);
        self.scope.make_accessible(number);
    }

    fn check_qed(&mut self, line: &ProofLine, pending: &PendingShow, show: &str, frame: Option<usize>) {
        let number = line.line_number;

        let rule = match Rule::from_str(&line.rule) {
            Ok(rule) => rule,
            Err(_) => {
                self.error(
                    number,
                    ValidationErrorKind::UnknownRule {
                        code: line.rule.clone(),
                    },
                );
                return;
            }
        };

        let Some(closing) = rule.as_closing() else {
            self.error(
                number,
                ValidationErrorKind::RuleMismatch {
                    rule,
                    reason: "the rule does not close a subproof".to_string(),
                },
            );
            return;
        };
        self.rules_used.insert(closing.code().to_string());

        let inaccessible = line
            .cited_lines
            .iter()
            .copied()
            .filter(|cited| !self.scope.is_accessible(*cited))
            .collect::<Vec<_>>();
        if !inaccessible.is_empty() {
            for cited in inaccessible {
                self.error(number, ValidationErrorKind::InaccessibleCitation { cited });
            }
            return;
        }

        let cited = line
            .cited_lines
            .iter()
            .filter_map(|cited| self.formula_of(*cited))
            .collect::<Vec<_>>();

        let preceding = match number - 1 == pending.line || !self.scope.is_accessible(number - 1) {
            true => None,
            false => self.formula_of(number - 1),
        };

        let assumptions: Vec<&str> = match frame.and_then(|index| self.scope.frames().get(index)) {
            Some(frame) => frame
                .assumptions
                .iter()
                .filter_map(|assumption| self.formula_of(*assumption))
                .collect(),
            None => Vec::default(),
        };

        let result = closing::check_qed(closing, show, &cited, preceding, &assumptions);
        if let Err(kind) = result {
            self.error(number, kind);
        }
    }

    fn finish(mut self, lines: &[ProofLine], conclusion: &str) -> Validation {
        for pending in std::mem::take(&mut self.pending) {
            self.error(pending.line, ValidationErrorKind::UnclosedShow);
        }

        let established = lines.iter().any(|line| {
            let at_top = line.subproof_level == 0 && !line.is_qed;
            let counts = line.is_premise
                || (at_top && !line.is_show)
                || (at_top && self.closed_shows.contains(&line.line_number));
            counts && shape::same(&line.formula, conclusion)
        });

        if !established {
            self.errors.push(ValidationError {
                line: None,
                kind: ValidationErrorKind::ConclusionNotEstablished {
                    conclusion: conclusion.to_string(),
                },
            });
        }

        self.errors.sort_by_key(|error| error.line.unwrap_or(usize::MAX));

        log::debug!(target: targets::VALIDATION, "Validated {} lines with {} errors", lines.len(), self.errors.len());

        Validation {
            ok: self.errors.is_empty(),
            errors: self.errors,
            rules_used: self.rules_used,
        }
    }
}
