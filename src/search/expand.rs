/*!
Successors of a state.

Forward rules derive a new formula from available formulas, each application giving one successor:
- Modus ponens, modus tollens, and disjunctive syllogism.
- Conjunction elimination, double negation, and biconditional elimination.
- Conjunction introduction, over pairs of available formulas.
- Disjunction introduction, with the other disjunct an atom of the problem.

Forward rules only derive formulas which are not yet available.
With the relevance filter, introduced conjunctions and disjunctions must be subformulas of the problem or of some goal.

Backward rules act on the top goal:
- A conditional is shown by assuming its antecedent and seeking its consequent.
- A negation is shown by assuming the negated formula and seeking ⊥.
- A conjunction or biconditional is split into goals for its parts.
- Any other formula is shown indirectly, at most once for each formula on the goal stack.
- A goal may be reduced to the antecedent of an available conditional for the goal, and ⊥ to the formula an available negation negates.
*/

use std::collections::BTreeSet;

use crate::{
    config::SearchConfig,
    search::state::{Goal, GoalKind, ProofState, Strategy},
    structures::{formula::Formula, rule::Rule},
};

/// Facts about a problem fixed for the length of a search.
pub struct Problem {
    pub conclusion: Formula,

    /// Subformulas of the premises and the conclusion, which with the relevance filter bound the formulas introduced.
    pub relevant: BTreeSet<Formula>,

    /// Atoms used as the other disjunct of a disjunction introduction.
    pub atoms: Vec<Formula>,
}

impl Problem {
    pub fn new(premises: &[Formula], conclusion: &Formula, disjunction_atoms: usize) -> Self {
        let mut relevant = conclusion.subformulas();
        let mut atoms = conclusion.atoms();
        for premise in premises {
            relevant.extend(premise.subformulas());
            atoms.extend(premise.atoms());
        }

        Problem {
            conclusion: conclusion.clone(),
            relevant,
            atoms: atoms
                .into_iter()
                .take(disjunction_atoms)
                .map(Formula::variable)
                .collect(),
        }
    }
}

/// A derivation of a formula from some lines.
struct Derivation {
    formula: Formula,
    rule: Rule,
    cited: Vec<usize>,
}

fn forward(state: &ProofState, problem: &Problem, config: &SearchConfig) -> Vec<Derivation> {
    let mut derivations = Vec::default();
    let relevance_filter = config.relevance_filter.value;

    let mut derive = |formula: Formula, rule: Rule, cited: Vec<usize>| {
        if !state.is_available(&formula) && !derivations.iter().any(|d: &Derivation| d.formula == formula) {
            derivations.push(Derivation {
                formula,
                rule,
                cited,
            });
        }
    };

    for (formula, &line) in &state.available {
        match formula {
            Formula::Implication(antecedent, consequent) => {
                if let Some(other) = state.line_of(antecedent) {
                    derive(consequent.as_ref().clone(), Rule::ModusPonens, vec![line, other]);
                }
                if let Some(other) = state.line_of(&consequent.negate()) {
                    derive(antecedent.negate(), Rule::ModusTollens, vec![line, other]);
                }
            }

            Formula::Conjunction(left, right) => {
                derive(left.as_ref().clone(), Rule::ConjunctionElimination, vec![line]);
                derive(right.as_ref().clone(), Rule::ConjunctionElimination, vec![line]);
            }

            Formula::Disjunction(left, right) => {
                if let Some(other) = state.line_of(&left.negate()) {
                    derive(right.as_ref().clone(), Rule::DisjunctiveSyllogism, vec![line, other]);
                }
                if let Some(other) = state.line_of(&right.negate()) {
                    derive(left.as_ref().clone(), Rule::DisjunctiveSyllogism, vec![line, other]);
                }
            }

            Formula::Negation(inner) => {
                if let Some(doubly_negated) = inner.as_negation() {
                    derive(doubly_negated.clone(), Rule::DoubleNegation, vec![line]);
                }
            }

            Formula::Biconditional(left, right) => {
                let (left, right) = (left.as_ref(), right.as_ref());
                derive(
                    Formula::implication(left.clone(), right.clone()),
                    Rule::BiconditionalElimination,
                    vec![line],
                );
                derive(
                    Formula::implication(right.clone(), left.clone()),
                    Rule::BiconditionalElimination,
                    vec![line],
                );
                if let Some(other) = state.line_of(left) {
                    derive(right.clone(), Rule::BiconditionalElimination, vec![line, other]);
                }
                if let Some(other) = state.line_of(right) {
                    derive(left.clone(), Rule::BiconditionalElimination, vec![line, other]);
                }
            }

            Formula::Variable(_) | Formula::Constant(_) => {}
        }
    }

    match relevance_filter {
        true => {
            let mut candidates = problem.relevant.clone();
            for goal in &state.goal_stack {
                candidates.extend(goal.formula().subformulas());
            }

            for candidate in &candidates {
                let Some((_, left, right)) = candidate.as_binary() else {
                    continue;
                };
                match (candidate, state.line_of(left), state.line_of(right)) {
                    (Formula::Conjunction(..), Some(l), Some(r)) => {
                        derive(candidate.clone(), Rule::ConjunctionIntroduction, vec![l, r]);
                    }

                    (Formula::Disjunction(..), Some(cited), _)
                    | (Formula::Disjunction(..), None, Some(cited)) => {
                        derive(candidate.clone(), Rule::Addition, vec![cited]);
                    }

                    _ => {}
                }
            }
        }

        false => {
            let available = state.available.iter().collect::<Vec<_>>();
            for (index, (left, l)) in available.iter().enumerate() {
                for (right, r) in &available[index + 1..] {
                    derive(
                        Formula::conjunction((*left).clone(), (*right).clone()),
                        Rule::ConjunctionIntroduction,
                        vec![**l, **r],
                    );
                }
                for atom in &problem.atoms {
                    derive(
                        Formula::disjunction((*left).clone(), atom.clone()),
                        Rule::Addition,
                        vec![**l],
                    );
                }
            }
        }
    }

    derivations
}

/// Whether an indirect subproof for the formula is open.
fn is_shown_indirectly(state: &ProofState, formula: &Formula) -> bool {
    state.goal_stack.iter().any(|goal| {
        goal.kind() == GoalKind::Subproof(Strategy::Indirect) && goal.formula() == formula
    })
}

/// The successor of the state for each backward rule applicable to the top goal.
fn backward(state: &ProofState) -> Vec<ProofState> {
    let Some(Goal::Direct(goal)) = state.goal_stack.last() else {
        return Vec::default();
    };
    if state.is_available(goal) {
        return Vec::default();
    }

    let mut successors = Vec::default();

    let mut replace = |goals: Vec<Goal>| {
        let mut successor = state.clone();
        successor.goal_stack.pop();
        successor.goal_stack.extend(goals);
        successors.push(successor);
    };

    match goal {
        Formula::Conjunction(left, right) => replace(vec![
            Goal::Conjunction(goal.clone()),
            Goal::Direct(right.as_ref().clone()),
            Goal::Direct(left.as_ref().clone()),
        ]),

        Formula::Biconditional(left, right) => replace(vec![
            Goal::Biconditional(goal.clone()),
            Goal::Direct(Formula::implication(right.as_ref().clone(), left.as_ref().clone())),
            Goal::Direct(Formula::implication(left.as_ref().clone(), right.as_ref().clone())),
        ]),

        _ => {}
    }

    let mut open = |assumption: Formula, target: Formula, strategy: Strategy| {
        let mut successor = state.clone();
        successor.goal_stack.pop();
        successor.open_subproof(goal.clone(), assumption, target, strategy);
        successors.push(successor);
    };

    match goal {
        Formula::Implication(antecedent, consequent) => open(
            antecedent.as_ref().clone(),
            consequent.as_ref().clone(),
            Strategy::Conditional,
        ),

        Formula::Negation(negated) => {
            open(negated.as_ref().clone(), Formula::bottom(), Strategy::Reductio)
        }

        Formula::Variable(_) | Formula::Disjunction(..) => {
            if !is_shown_indirectly(state, goal) {
                open(goal.negate(), Formula::bottom(), Strategy::Indirect)
            }
        }

        Formula::Conjunction(..) | Formula::Biconditional(..) | Formula::Constant(_) => {}
    }

    let mut reduce = |subgoal: &Formula| {
        if !state.is_available(subgoal) && !state.is_goal(subgoal) {
            let mut successor = state.clone();
            successor.goal_stack.push(Goal::Direct(subgoal.clone()));
            successors.push(successor);
        }
    };

    for formula in state.available.keys() {
        match formula {
            Formula::Implication(antecedent, consequent) if consequent.as_ref() == goal => {
                reduce(antecedent)
            }

            Formula::Negation(negated) if goal.is_bottom() => reduce(negated),

            _ => {}
        }
    }

    successors
}

/// Every successor of a state.
pub fn successors(state: &ProofState, problem: &Problem, config: &SearchConfig) -> Vec<ProofState> {
    let mut successors = backward(state);

    for derivation in forward(state, problem, config) {
        let mut successor = state.clone();
        successor.derive(derivation.formula, derivation.rule, derivation.cited);
        successors.push(successor);
    }

    successors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, parse::formula::parse};

    fn formulas(texts: &[&str]) -> Vec<Formula> {
        texts.iter().map(|text| parse(text).unwrap()).collect()
    }

    #[test]
    fn modus_ponens_is_a_successor() {
        let premises = formulas(&["P", "P→Q"]);
        let conclusion = parse("Q").unwrap();
        let problem = Problem::new(&premises, &conclusion, 4);
        let state = ProofState::new(&premises, &conclusion);

        let config = Config::default();
        let found = successors(&state, &problem, &config.search)
            .into_iter()
            .any(|successor| {
                successor.lines.last().is_some_and(|line| {
                    line.formula == "Q" && line.rule == "MP" && line.cited_lines == vec![2, 1]
                })
            });
        assert!(found);
    }

    #[test]
    fn conditional_goals_open_subproofs() {
        let conclusion = parse("P→P").unwrap();
        let state = ProofState::new(&[], &conclusion);
        let successors = backward(&state);

        assert_eq!(successors.len(), 1);
        let successor = &successors[0];
        assert!(successor.lines[0].is_show);
        assert_eq!(successor.lines[1].rule, "AS");
        assert_eq!(successor.lines[1].subproof_level, 1);
        assert_eq!(successor.level(), 1);
    }

    #[test]
    fn falsum_is_reduced_to_negated_formulas() {
        let premises = formulas(&["¬Q"]);
        let conclusion = parse("P").unwrap();
        let state = ProofState::new(&premises, &conclusion);

        let successors = backward(&state);
        assert_eq!(successors.len(), 1);

        // ¬P is assumed, though P is already a goal, so only Q is sought.
        let inner = backward(&successors[0]);
        assert_eq!(inner.len(), 1);
        assert_eq!(
            inner[0].goal_stack.last().map(Goal::formula),
            Some(&parse("Q").unwrap())
        );
    }

    #[test]
    fn indirect_proof_is_not_repeated() {
        let conclusion = parse("P").unwrap();
        let state = ProofState::new(&[], &conclusion);
        let successors = backward(&state);

        let mut repeated = successors[0].clone();
        repeated.goal_stack.push(Goal::Direct(conclusion));
        assert!(backward(&repeated).is_empty());
    }
}
