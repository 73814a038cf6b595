//! States yet to be explored, lowest priority first.

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::search::state::ProofState;

struct Entry {
    priority: usize,

    /// The count of states pushed before the state.
    order: usize,

    state: ProofState,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.order == other.order
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed, as the heap is a max-heap.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.priority, other.order).cmp(&(self.priority, self.order))
    }
}

/// A min-priority queue of states, ordered by [priority](ProofState::priority) and then by order of insertion.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    pushed: usize,
}

impl Frontier {
    pub fn push(&mut self, state: ProofState) {
        self.heap.push(Entry {
            priority: state.priority(),
            order: self.pushed,
            state,
        });
        self.pushed += 1;
    }

    pub fn pop(&mut self) -> Option<ProofState> {
        self.heap.pop().map(|entry| entry.state)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
