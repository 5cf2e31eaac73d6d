//! UCT tree node representation.

use crate::core::{Candidate, MoveAction, Side};
use crate::game::GameState;

/// Sentinel parent index for the root.
pub const NO_PARENT: usize = usize::MAX;

/// A node in the UCT tree. Nodes live in the tree's arena and own a
/// full snapshot of the position they represent, which keeps candidate
/// evaluation trivially parallel and selection descent copy-free.
pub struct UctNode {
    /// Position after this node's action
    pub state: GameState,
    /// The side whose move produced this position
    pub side: Side,
    /// Static evaluation of the position for `side`
    pub value: f64,
    /// Number of times this node has been visited
    pub visits: u32,
    /// Signed win count, always within `[-visits, visits]`
    pub wins: i32,
    /// Moves for the opposing side sorted descending by value; built
    /// lazily on first expansion
    pub candidates: Vec<Candidate>,
    /// How many candidates have been materialized as children
    pub expanded: usize,
    /// Cap on children (candidate count after truncation)
    pub max_children: usize,
    /// Distance from the root
    pub depth: u16,
    /// Arena index of the parent (`NO_PARENT` for the root)
    pub parent: usize,
    /// Children as (action, arena index), in candidate rank order
    pub children: Vec<(MoveAction, usize)>,
}

impl UctNode {
    /// Create the root node for a search.
    pub fn new_root(state: GameState, side: Side, value: f64) -> Self {
        UctNode {
            state,
            side,
            value,
            visits: 0,
            wins: 0,
            candidates: Vec::new(),
            expanded: 0,
            max_children: 0,
            depth: 0,
            parent: NO_PARENT,
            children: Vec::new(),
        }
    }

    /// Create a child node below `parent`.
    pub fn new_child(state: GameState, side: Side, value: f64, depth: u16, parent: usize) -> Self {
        UctNode {
            state,
            side,
            value,
            visits: 0,
            wins: 0,
            candidates: Vec::new(),
            expanded: 0,
            max_children: 0,
            depth,
            parent,
            children: Vec::new(),
        }
    }

    /// Signed wins mapped from `[-visits, visits]` into `[0, 1]`.
    #[inline]
    pub fn win_rate(&self) -> f64 {
        (self.wins as f64 + self.visits as f64) / 2.0 / self.visits as f64
    }

    /// UCB1 score for selection from a parent with `parent_visits`.
    #[inline]
    pub fn ucb(&self, parent_visits: u32, exploration: f64) -> f64 {
        self.win_rate() + exploration * ((parent_visits as f64).ln() / self.visits as f64).sqrt()
    }

    /// True once every candidate has been materialized as a child.
    #[inline]
    pub fn saturated(&self) -> bool {
        self.expanded == self.max_children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_with(visits: u32, wins: i32) -> UctNode {
        let mut node = UctNode::new_root(GameState::new(), Side::Red, 0.0);
        node.visits = visits;
        node.wins = wins;
        node
    }

    #[test]
    fn win_rate_maps_signed_wins_to_unit_interval() {
        assert_eq!(node_with(4, 4).win_rate(), 1.0);
        assert_eq!(node_with(4, -4).win_rate(), 0.0);
        assert_eq!(node_with(4, 0).win_rate(), 0.5);
    }

    #[test]
    fn ucb_prefers_less_visited_among_equal_rates() {
        let cold = node_with(2, 1);
        let hot = node_with(40, 20);
        assert!(cold.ucb(100, 0.35) > hot.ucb(100, 0.35));
    }
}
