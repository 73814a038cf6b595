//! Steps taken on a state without branching, as soon as they apply.

use crate::{
    search::state::{Goal, ProofState},
    structures::{formula::Formula, rule::Rule},
};

/// A step on the top goal of a state.
enum Step {
    /// The goal is met.
    Pop,

    /// A line meets the goal.
    Meet(Formula, Rule, Vec<usize>),

    /// A line is added, without meeting the goal.
    Derive(Formula, Rule, Vec<usize>),

    /// The subproof on top of the stack is closed, citing the given line.
    Close(usize),

    /// Goals are pushed, for the missing parts of an introduction.
    Push(Vec<Goal>),
}

fn next_step(state: &ProofState) -> Option<Step> {
    let goal = state.goal_stack.last()?;

    if let Goal::Subproof(subproof) = goal {
        return state.line_of(&subproof.target).map(Step::Close);
    }

    let formula = goal.formula();
    if state.is_available(formula) {
        return Some(Step::Pop);
    }

    match goal {
        Goal::Conjunction(_) | Goal::Biconditional(_) => {
            let (_, left, right) = formula.as_binary()?;
            let (left, right, rule) = match goal {
                Goal::Conjunction(_) => (left.clone(), right.clone(), Rule::ConjunctionIntroduction),
                _ => (
                    Formula::implication(left.clone(), right.clone()),
                    Formula::implication(right.clone(), left.clone()),
                    Rule::BiconditionalIntroduction,
                ),
            };

            match (state.line_of(&left), state.line_of(&right)) {
                (Some(l), Some(r)) => Some(Step::Meet(formula.clone(), rule, vec![l, r])),
                (l, r) => {
                    let mut missing = Vec::default();
                    if r.is_none() {
                        missing.push(Goal::Direct(right));
                    }
                    if l.is_none() {
                        missing.push(Goal::Direct(left));
                    }
                    Some(Step::Push(missing))
                }
            }
        }

        _ => {
            if let Some(falsum) = state.line_of(&Formula::bottom()) {
                return Some(Step::Meet(
                    formula.clone(),
                    Rule::FalsumElimination,
                    vec![falsum],
                ));
            }

            state.contradiction().map(|(positive, negative)| {
                Step::Derive(
                    Formula::bottom(),
                    Rule::NegationElimination,
                    vec![positive, negative],
                )
            })
        }
    }
}

/// Takes steps on the top goal of the state, until no step applies.
///
/// - A goal which is available is met.
/// - A conjunction or biconditional goal is introduced once its parts are available.
/// - A subproof is closed once its target is available.
/// - Any other goal is met by ⊥E once ⊥ is available, with ⊥ derived from some available contradiction.
pub fn close(state: &mut ProofState) {
    'close_loop: while let Some(step) = next_step(state) {
        match step {
            Step::Pop => {
                state.goal_stack.pop();
            }

            Step::Meet(formula, rule, cited) => {
                state.derive(formula, rule, cited);
                state.goal_stack.pop();
            }

            Step::Derive(formula, rule, cited) => {
                state.derive(formula, rule, cited);
            }

            Step::Close(cited) => {
                let Some(Goal::Subproof(subproof)) = state.goal_stack.pop() else {
                    break 'close_loop;
                };
                state.close_subproof(subproof, cited);
            }

            Step::Push(goals) => state.goal_stack.extend(goals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::formula::parse;

    fn formulas(texts: &[&str]) -> Vec<Formula> {
        texts.iter().map(|text| parse(text).unwrap()).collect()
    }

    #[test]
    fn available_goals_are_met() {
        let premises = formulas(&["P"]);
        let mut state = ProofState::new(&premises, &premises[0]);
        close(&mut state);
        assert!(state.goal_stack.is_empty());
        assert_eq!(state.depth, 0);
    }

    #[test]
    fn contradictions_discharge_goals() {
        let premises = formulas(&["P", "¬P"]);
        let conclusion = parse("Q").unwrap();
        let mut state = ProofState::new(&premises, &conclusion);
        close(&mut state);

        assert!(state.is_proof_of(&conclusion));
        assert_eq!(state.lines[2].formula, "⊥");
        assert_eq!(state.lines[2].rule, "~E");
        assert_eq!(state.lines[3].cited_lines, vec![3]);
    }

    #[test]
    fn conjunctions_are_introduced() {
        let premises = formulas(&["P", "Q"]);
        let conclusion = parse("Q∧P").unwrap();
        let mut state = ProofState::new(&premises, &conclusion);
        state.goal_stack = vec![Goal::Conjunction(conclusion.clone())];
        close(&mut state);

        assert!(state.is_proof_of(&conclusion));
        assert_eq!(state.lines[2].cited_lines, vec![2, 1]);
    }
}
