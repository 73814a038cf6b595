/*!
The state of a proof under construction.

A state is a partial proof, together with the formulas which may be cited at the end of the proof, the assumptions of open subproofs, and a stack of goals.

States are never shared, and each successor of a state is a fresh clone of the state.
*/

use std::collections::BTreeMap;

use crate::structures::{
    formula::Formula,
    proof_line::{ProofLine, QED},
    rule::Rule,
};

/// How a subproof discharges its goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    /// Assume the antecedent of a conditional, and seek the consequent.
    Conditional,

    /// Assume the formula a negation negates, and seek ⊥.
    Reductio,

    /// Assume the negation of a formula, and seek ⊥.
    Indirect,
}

impl Strategy {
    /// The rule of the QED line closing a subproof.
    pub fn closing_rule(&self) -> Rule {
        match self {
            Self::Conditional => Rule::ConditionalDerivation,
            Self::Reductio | Self::Indirect => Rule::IndirectDerivation,
        }
    }
}

/// A subproof opened by a show line, to be closed once its target is available.
#[derive(Clone, Debug)]
pub struct SubproofGoal {
    /// The formula of the show line.
    pub show: Formula,

    /// The formula which, once available, closes the subproof.
    pub target: Formula,

    pub strategy: Strategy,

    pub show_line: usize,

    /// The level of the show line.
    pub level: usize,

    /// The formulas available when the subproof was opened.
    pub outer: BTreeMap<Formula, usize>,
}

/// A goal of a search.
#[derive(Clone, Debug)]
pub enum Goal {
    /// A formula to be made available.
    Direct(Formula),

    /// A conjunction to be introduced, once both conjuncts are available.
    Conjunction(Formula),

    /// A biconditional to be introduced, once both conditionals are available.
    Biconditional(Formula),

    Subproof(SubproofGoal),
}

/// The part of a goal which distinguishes states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GoalKind {
    Direct,
    Conjunction,
    Biconditional,
    Subproof(Strategy),
}

impl Goal {
    pub fn formula(&self) -> &Formula {
        match self {
            Self::Direct(formula) | Self::Conjunction(formula) | Self::Biconditional(formula) => {
                formula
            }
            Self::Subproof(subproof) => &subproof.show,
        }
    }

    pub fn kind(&self) -> GoalKind {
        match self {
            Self::Direct(_) => GoalKind::Direct,
            Self::Conjunction(_) => GoalKind::Conjunction,
            Self::Biconditional(_) => GoalKind::Biconditional,
            Self::Subproof(subproof) => GoalKind::Subproof(subproof.strategy),
        }
    }
}

/// The available formulas, open assumptions, and goals of a state.
///
/// Two states with the same signature have the same successors, up to line numbers.
pub type Signature = (Vec<Formula>, Vec<Formula>, Vec<(GoalKind, Formula)>);

/// A partial proof.
#[derive(Clone, Debug)]
pub struct ProofState {
    /// Each formula which may be cited, with the line it may be cited by.
    pub available: BTreeMap<Formula, usize>,

    /// Every line of the proof, premises included.
    pub lines: Vec<ProofLine>,

    /// The assumption of each open subproof, innermost last.
    pub open_assumptions: Vec<(usize, Formula)>,

    pub goal_stack: Vec<Goal>,

    /// The count of lines which are not premises.
    pub depth: usize,
}

/// The justification of a line, as written.
fn justification(rule: Rule, cited: &[usize]) -> String {
    match cited.is_empty() {
        true => rule.code().to_string(),
        false => {
            let cited = cited.iter().map(usize::to_string).collect::<Vec<_>>();
            format!("{} {}", rule.code(), cited.join(","))
        }
    }
}

impl ProofState {
    /// The state of a proof with only premises, and the conclusion as the sole goal.
    pub fn new(premises: &[Formula], conclusion: &Formula) -> Self {
        let mut state = ProofState {
            available: BTreeMap::default(),
            lines: Vec::with_capacity(premises.len()),
            open_assumptions: Vec::default(),
            goal_stack: vec![Goal::Direct(conclusion.clone())],
            depth: 0,
        };

        for premise in premises {
            let line_number = state.next_line();
            state
                .lines
                .push(ProofLine::premise(line_number, premise.to_string()));
            state.available.entry(premise.clone()).or_insert(line_number);
        }

        state
    }

    /// The level of the next line, which is the count of open subproofs.
    pub fn level(&self) -> usize {
        self.open_assumptions.len()
    }

    pub fn next_line(&self) -> usize {
        self.lines.len() + 1
    }

    pub fn is_available(&self, formula: &Formula) -> bool {
        self.available.contains_key(formula)
    }

    pub fn line_of(&self, formula: &Formula) -> Option<usize> {
        self.available.get(formula).copied()
    }

    /// Whether some goal on the stack is for the formula.
    pub fn is_goal(&self, formula: &Formula) -> bool {
        self.goal_stack.iter().any(|goal| goal.formula() == formula)
    }

    /// Adds a line at the current level, and makes the formula of the line available.
    pub fn derive(&mut self, formula: Formula, rule: Rule, cited: Vec<usize>) -> usize {
        let line_number = self.next_line();
        self.lines.push(ProofLine {
            line_number,
            formula: formula.to_string(),
            justification: justification(rule, &cited),
            rule: rule.code().to_string(),
            cited_lines: cited,
            subproof_level: self.level(),
            is_premise: false,
            is_show: false,
            is_qed: false,
        });
        self.available.entry(formula).or_insert(line_number);
        self.depth += 1;
        line_number
    }

    /// Adds a show line and the assumption of its block, and pushes the subproof and its target as goals.
    pub fn open_subproof(
        &mut self,
        show: Formula,
        assumption: Formula,
        target: Formula,
        strategy: Strategy,
    ) {
        let level = self.level();
        let show_line = self.next_line();
        self.lines.push(ProofLine {
            line_number: show_line,
            formula: show.to_string(),
            justification: String::default(),
            rule: String::default(),
            cited_lines: Vec::default(),
            subproof_level: level,
            is_premise: false,
            is_show: true,
            is_qed: false,
        });
        self.depth += 1;

        self.goal_stack.push(Goal::Subproof(SubproofGoal {
            show,
            target: target.clone(),
            strategy,
            show_line,
            level,
            outer: self.available.clone(),
        }));

        self.open_assumptions
            .push((self.next_line(), assumption.clone()));
        self.derive(assumption, Rule::Assumption, Vec::default());

        self.goal_stack.push(Goal::Direct(target));
    }

    /// Adds the QED line of a subproof, citing the line of its target, and makes the show formula available in place of the interior of the subproof.
    pub fn close_subproof(&mut self, subproof: SubproofGoal, cited: usize) {
        self.open_assumptions.pop();

        let rule = subproof.strategy.closing_rule();
        let line_number = self.next_line();
        self.lines.push(ProofLine {
            line_number,
            formula: QED.to_string(),
            justification: justification(rule, &[cited]),
            rule: rule.code().to_string(),
            cited_lines: vec![cited],
            subproof_level: subproof.level,
            is_premise: false,
            is_show: false,
            is_qed: true,
        });
        self.depth += 1;

        self.available = subproof.outer;
        self.available
            .entry(subproof.show)
            .or_insert(subproof.show_line);
    }

    /// Whether the state is a complete proof of the conclusion.
    pub fn is_proof_of(&self, conclusion: &Formula) -> bool {
        self.open_assumptions.is_empty() && self.is_available(conclusion)
    }

    pub fn signature(&self) -> Signature {
        (
            self.available.keys().cloned().collect(),
            self.open_assumptions
                .iter()
                .map(|(_, formula)| formula.clone())
                .collect(),
            self.goal_stack
                .iter()
                .map(|goal| (goal.kind(), goal.formula().clone()))
                .collect(),
        )
    }

    /// The priority of the state on the frontier, where lower is explored first.
    pub fn priority(&self) -> usize {
        self.depth + self.goal_stack.len()
    }

    /// Lines of some available formula and its negation, if there are any.
    pub fn contradiction(&self) -> Option<(usize, usize)> {
        self.available.iter().find_map(|(formula, line)| {
            let negated = formula.as_negation()?;
            Some((self.line_of(negated)?, *line))
        })
    }
}
