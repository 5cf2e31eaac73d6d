//! UCT tree operations.
//!
//! The tree is an arena of nodes rooted at index 0. Selection descends
//! by UCB1, widening nodes on the way; expansion either detects a won
//! position, burns a visit on a shallow rollout, or materializes the
//! next slice of value-ordered candidates; backpropagation credits the
//! leaf's side along the parent chain.

use rayon::prelude::*;
use tracing::trace;

use crate::core::{Candidate, MoveAction, Side};
use crate::eval::evaluate;
use crate::game::{expand_territory, full_moves, queen_moves, GameState};
use super::config::SearchConfig;
use super::node::{UctNode, NO_PARENT};

/// Arena-based UCT tree. Dropping the tree releases every node.
pub struct UctTree {
    /// All nodes; index 0 is the root
    pub nodes: Vec<UctNode>,
    config: SearchConfig,
}

impl UctTree {
    /// Create a tree for a position with `to_move` to play. The root's
    /// side is the opponent, i.e. the side that "produced" the position.
    pub fn new(state: GameState, to_move: Side, config: SearchConfig) -> Self {
        let side = to_move.opposite();
        let value = evaluate(&state, side);
        UctTree {
            nodes: vec![UctNode::new_root(state, side, value)],
            config,
        }
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> &UctNode {
        &self.nodes[0]
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Descend from the root to a node without children, widening each
    /// internal node that has earned more children, and picking the
    /// highest-UCB child at every step.
    pub fn select(&mut self) -> usize {
        let mut current = 0;

        while !self.nodes[current].children.is_empty() {
            self.maybe_widen(current);

            let node = &self.nodes[current];
            let parent_visits = node.visits;
            let mut best = node.children[0].1;
            let mut best_score = f64::NEG_INFINITY;
            for &(_, child) in &node.children {
                let score = self.nodes[child].ucb(parent_visits, self.config.exploration);
                if score > best_score {
                    best_score = score;
                    best = child;
                }
            }

            current = best;
        }

        current
    }

    /// Materialize more children when the visit count has outgrown the
    /// current branching: `floor(visits / interval) * step + initial`.
    fn maybe_widen(&mut self, idx: usize) {
        let node = &self.nodes[idx];
        let earned = (node.visits / self.config.widen_interval) as usize * self.config.widen_step
            + self.config.initial_children;
        if !node.saturated() && earned > node.expanded {
            self.materialize(idx);
        }
    }

    // ========================================================================
    // Expansion
    // ========================================================================

    /// Expand a leaf reached by selection.
    pub fn expand(&mut self, idx: usize, rng: &mut fastrand::Rng) {
        let node = &self.nodes[idx];

        // The mover that produced this position wins outright once the
        // opponent has no mobile queen left.
        if node.state.is_won_by(node.side) {
            self.backpropagate(idx, 1);
            return;
        }

        // Lightly-visited leaves burn visits on rollouts instead of
        // branching.
        if node.visits > 0 && node.visits < self.config.rollout_band {
            let winner = self.playout(idx, rng);
            let is_win = if winner == self.nodes[idx].side { 1 } else { -1 };
            self.backpropagate(idx, is_win);
            return;
        }

        self.materialize(idx);
    }

    /// Build the candidate list if needed, then materialize the next
    /// slice of children in rank order, seeding each child's statistics
    /// from the sign of its static value.
    fn materialize(&mut self, idx: usize) {
        if self.nodes[idx].candidates.is_empty() {
            let node = &self.nodes[idx];
            let mover = node.side.opposite();
            let moves = full_moves(&node.state, mover);
            let state = &node.state;

            // Evaluate every successor in parallel; each task owns a
            // private copy of the position.
            let mut candidates: Vec<Candidate> = moves
                .par_iter()
                .map(|&action| {
                    let mut next = state.clone();
                    next.apply(mover, action);
                    Candidate {
                        action,
                        value: evaluate(&next, mover),
                    }
                })
                .collect();

            candidates.sort_unstable_by(|a, b| b.value.total_cmp(&a.value));
            candidates.truncate(self.config.max_candidates);

            trace!(node = idx, candidates = candidates.len(), "candidate list built");

            let node = &mut self.nodes[idx];
            node.max_children = candidates.len();
            node.candidates = candidates;
        }

        let node = &self.nodes[idx];
        let start = node.expanded;
        let end = if start == 0 {
            self.config.initial_children.min(node.max_children)
        } else {
            (start + self.config.widen_step).min(node.max_children)
        };

        for rank in start..end {
            let (action, value, mover, depth, state) = {
                let parent = &self.nodes[idx];
                let Candidate { action, value } = parent.candidates[rank];
                let mover = parent.side.opposite();
                let mut state = parent.state.clone();
                state.apply(mover, action);
                (action, value, mover, parent.depth + 1, state)
            };

            let child_idx = self.nodes.len();
            self.nodes
                .push(UctNode::new_child(state, mover, value, depth, idx));
            let parent = &mut self.nodes[idx];
            parent.children.push((action, child_idx));
            parent.expanded = rank + 1;

            // Imprint the static prior into the statistics before any
            // rollout touches the child.
            self.backpropagate(child_idx, if value >= 0.0 { 1 } else { -1 });
        }
    }

    // ========================================================================
    // Rollout
    // ========================================================================

    /// Shallow random playout from a node's position, the opponent of
    /// the node's side moving first. A side that cannot move loses; a
    /// playout that survives all plies is settled by static evaluation
    /// from red's perspective.
    fn playout(&self, idx: usize, rng: &mut fastrand::Rng) -> Side {
        let node = &self.nodes[idx];
        let mut state = node.state.clone();
        let mut mover = node.side.opposite();

        for _ in 0..self.config.rollout_depth {
            let moves = queen_moves(&state, mover);
            if moves.is_empty() {
                return mover.opposite();
            }
            let (from, to) = moves[rng.usize(..moves.len())];
            state.move_queen(mover, from, to);

            let stones = expand_territory(&state.board, to);
            if !stones.is_empty() {
                state.place_stone(stones[rng.usize(..stones.len())]);
            }

            mover = mover.opposite();
        }

        if evaluate(&state, Side::Red) >= 0.0 {
            Side::Red
        } else {
            Side::Blue
        }
    }

    // ========================================================================
    // Backpropagation
    // ========================================================================

    /// Walk from `idx` to the root, counting the visit everywhere and
    /// crediting `is_win` to nodes on the leaf's side, `-is_win` to the
    /// rest.
    pub fn backpropagate(&mut self, idx: usize, is_win: i32) {
        let win_side = self.nodes[idx].side;
        let mut current = idx;

        loop {
            let node = &mut self.nodes[current];
            node.visits += 1;
            if node.side == win_side {
                node.wins += is_win;
            } else {
                node.wins -= is_win;
            }

            if node.parent == NO_PARENT {
                break;
            }
            current = node.parent;
        }
    }

    // ========================================================================
    // Extraction
    // ========================================================================

    /// Root child with the highest visit count as (rank, action, arena
    /// index). Ties keep the earlier (higher-prior) candidate.
    pub fn best_child(&self) -> Option<(usize, MoveAction, usize)> {
        let root = &self.nodes[0];
        let mut best: Option<(usize, MoveAction, usize)> = None;
        let mut best_visits = 0;

        for (rank, &(action, child)) in root.children.iter().enumerate() {
            let visits = self.nodes[child].visits;
            if best.is_none() || visits > best_visits {
                best = Some((rank, action, child));
                best_visits = visits;
            }
        }

        best
    }
}
