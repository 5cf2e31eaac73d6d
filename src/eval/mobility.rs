//! Mobility evaluation.
//!
//! Each queen walks up to two empty cells in every direction; a cell at
//! walk distance `k` contributes its empty-neighbour count weighted by
//! `2^(1-k)`. Per-queen sums are squashed so that trapped queens weigh
//! heavily and very open queens saturate.

use crate::core::{col_of, on_board, pos_of, row_of, Pos, Side, DIRECTIONS, QUEENS_PER_SIDE};
use crate::game::GameState;

/// Raw two-cell mobility walk for one queen.
fn queen_mobility(state: &GameState, pos: Pos) -> f64 {
    let row = row_of(pos);
    let col = col_of(pos);
    let mut value = 0.0;

    for &(dr, dc) in &DIRECTIONS {
        for k in 1..=2i8 {
            let r = row + dr * k;
            let c = col + dc * k;
            if !on_board(r, c) || !state.board[pos_of(r, c) as usize].is_empty() {
                break;
            }
            let n = state.neighbor_empty_count(pos_of(r, c));
            value += n as f64 * (2.0f64).powi(1 - k as i32);
        }
    }

    value
}

/// Squash a raw per-queen mobility sum. Low sums map linearly onto a
/// high penalty weight, high sums onto a flattening hyperbola.
fn squashed(x: f64) -> f64 {
    if x <= 5.0 {
        -0.4 * x + 7.0
    } else {
        85.0 / (12.0 + x)
    }
}

/// Mobility term M from `side`'s perspective. Internally written from
/// red's point of view and negated for blue at the boundary.
pub fn mobility(state: &GameState, side: Side) -> f64 {
    let mut value = 0.0;
    for i in 0..QUEENS_PER_SIDE {
        value += squashed(queen_mobility(
            state,
            state.queens[Side::Blue.index()][i],
        ));
        value -= squashed(queen_mobility(
            state,
            state.queens[Side::Red.index()][i],
        ));
    }

    side.sign() * value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{legal_step, Cell};

    #[test]
    fn opening_mobility_is_balanced() {
        let state = GameState::new();
        assert_eq!(mobility(&state, Side::Red), 0.0);
        assert_eq!(mobility(&state, Side::Blue), 0.0);
    }

    #[test]
    fn squash_mapping_breakpoints() {
        assert_eq!(squashed(0.0), 7.0);
        assert_eq!(squashed(5.0), 5.0);
        assert_eq!(squashed(6.0), 85.0 / 18.0);
        assert!(squashed(4.0) > squashed(6.0));
    }

    #[test]
    fn trapped_queen_walks_nowhere() {
        let mut state = GameState::new();
        // Wall in the red queen at (9, 3); its walk ends immediately.
        for pos in [82u8, 83, 84, 92, 94] {
            state.board[pos as usize] = Cell::Stone;
        }
        assert_eq!(queen_mobility(&state, 93), 0.0);
    }

    #[test]
    fn walling_red_favours_blue() {
        let mut state = GameState::new();
        let red_queens = state.queens[Side::Red.index()];
        for &queen in &red_queens {
            let row = row_of(queen);
            let col = col_of(queen);
            for &(dr, dc) in &DIRECTIONS {
                let r = row + dr;
                let c = col + dc;
                if legal_step(r, c) && state.board[pos_of(r, c) as usize].is_empty() {
                    state.board[pos_of(r, c) as usize] = Cell::Stone;
                }
            }
        }
        assert!(mobility(&state, Side::Blue) > 0.0);
        assert!(mobility(&state, Side::Red) < 0.0);
    }
}
