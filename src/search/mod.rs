/*!
The machine solver.

[find_proof] searches for a proof of a conclusion from some premises, best-first over [partial proofs](state::ProofState).

Each iteration:
1. Takes the state of least priority from the [frontier](frontier::Frontier), where the priority of a state is the count of lines of the state and the count of its goals.
2. [Closes](close::close) goals of the state which may be met without branching.
3. Returns the lines of the state, if the state is a proof of the conclusion.
4. Otherwise, pushes each [successor](expand::successors) of the state to the frontier, unless the state has been seen before.

The search ends when a proof is found, when the frontier is empty, or when the configured limit on iterations is reached.
Proofs found are rendered by [render_proof] in the notation read by the [proof parser](crate::parse::proof).

```rust
# use fitch_engine::search::{find_proof, render_proof};
# use fitch_engine::config::Config;
# use fitch_engine::parse::formula::parse;
let config = Config::default();
let premises = [parse("P").unwrap(), parse("P→Q").unwrap()];
let conclusion = parse("Q").unwrap();

let lines = find_proof(&premises, &conclusion, 10, &config.search).unwrap();
assert_eq!(render_proof(&lines), "Q :MP 2,1");
```
*/

pub mod close;
pub mod expand;
pub mod frontier;
pub mod state;

mod render;
pub use render::render_proof;

use std::collections::HashSet;

use crate::{
    config::SearchConfig,
    misc::log::targets,
    structures::{formula::Formula, proof_line::ProofLine, rule::Rule},
};

use expand::Problem;
use frontier::Frontier;
use state::ProofState;

/// Lines of a proof of the conclusion from the premises, premises included, if some proof of at most `max_depth` lines is found.
pub fn find_proof(
    premises: &[Formula],
    conclusion: &Formula,
    max_depth: usize,
    config: &SearchConfig,
) -> Option<Vec<ProofLine>> {
    let mut state = ProofState::new(premises, conclusion);

    if let Some(line) = state.line_of(conclusion) {
        state.derive(conclusion.clone(), Rule::Reiteration, vec![line]);
        return Some(state.lines);
    }

    let problem = Problem::new(premises, conclusion, config.disjunction_atoms.value);
    let mut frontier = Frontier::default();
    let mut seen = HashSet::new();
    frontier.push(state);

    let mut iterations = 0;

    'search_loop: while let Some(mut state) = frontier.pop() {
        if iterations >= config.iteration_limit.value {
            log::info!(target: targets::SEARCH, "Stopped after {iterations} iterations");
            break 'search_loop;
        }
        iterations += 1;

        close::close(&mut state);

        if state.is_proof_of(&problem.conclusion) {
            log::info!(target: targets::SEARCH, "Proof of {} lines after {iterations} iterations", state.depth);
            return Some(state.lines);
        }

        if state.depth >= max_depth || !seen.insert(state.signature()) {
            continue 'search_loop;
        }

        for successor in expand::successors(&state, &problem, config) {
            if successor.depth <= max_depth {
                frontier.push(successor);
            }
        }

        log::trace!(target: targets::SEARCH, "Iteration {iterations}, with {} states on the frontier", frontier.len());
    }

    log::info!(target: targets::SEARCH, "No proof of {conclusion} after {iterations} iterations");
    None
}
