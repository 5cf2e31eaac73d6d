//! Static position evaluation.
//!
//! Three terms feed the evaluator: queen-distance territory (T1, which
//! also yields the contested-mass indicator `w`), king-distance
//! territory (T2), and mobility (M). The combination weights shift with
//! `w`: early positions are dominated by raw territory, later ones give
//! increasing weight to mobility.

pub mod mobility;
pub mod territory;

pub use mobility::mobility;
pub use territory::{territory_king, territory_queen};

use crate::core::Side;
use crate::game::GameState;

/// Coefficients (k1, k2, k3) selected by the contested mass `w`.
fn weights(w: f64) -> (f64, f64, f64) {
    if w <= 14.0 {
        (1.0, 0.0, 0.0)
    } else if w <= 25.0 {
        (1.0, 0.0, 0.2)
    } else if w <= 40.0 {
        (1.0, 1.0, 1.0)
    } else if w <= 55.0 {
        (1.0, 1.0, 2.0)
    } else if w <= 63.0 {
        (1.0, 1.0, 3.0)
    } else {
        (1.0, 1.0, 4.0)
    }
}

/// Full static evaluation from `side`'s perspective.
pub fn evaluate(state: &GameState, side: Side) -> f64 {
    let (t1, w) = territory_queen(state, side);
    let t2 = territory_king(state, side);
    let m = mobility(state, side);

    let (k1, k2, k3) = weights(w);
    k1 * t1 + k2 * t2 + k3 * m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, BOARD_SIZE};

    #[test]
    fn evaluation_is_antisymmetric() {
        let mut state = GameState::new();
        assert_eq!(evaluate(&state, Side::Red), -evaluate(&state, Side::Blue));

        // Still exact on an asymmetric position.
        state.apply(Side::Red, crate::core::MoveAction::new(60, 40, 41));
        assert_eq!(evaluate(&state, Side::Red), -evaluate(&state, Side::Blue));
    }

    #[test]
    fn opening_evaluation_is_zero() {
        let state = GameState::new();
        assert_eq!(evaluate(&state, Side::Red), 0.0);
    }

    #[test]
    fn weight_table_breakpoints() {
        assert_eq!(weights(0.0), (1.0, 0.0, 0.0));
        assert_eq!(weights(14.0), (1.0, 0.0, 0.0));
        assert_eq!(weights(14.5), (1.0, 0.0, 0.2));
        assert_eq!(weights(25.0), (1.0, 0.0, 0.2));
        assert_eq!(weights(40.0), (1.0, 1.0, 1.0));
        assert_eq!(weights(55.0), (1.0, 1.0, 2.0));
        assert_eq!(weights(63.0), (1.0, 1.0, 3.0));
        assert_eq!(weights(64.0), (1.0, 1.0, 4.0));
    }

    #[test]
    fn territory_advantage_raises_the_score() {
        // Stone wall across row 5 plus extra stones choking the red
        // half leaves blue with more private territory.
        let mut state = GameState::new();
        for col in 0..BOARD_SIZE {
            state.board[5 * BOARD_SIZE + col] = Cell::Stone;
        }
        assert!(evaluate(&state, Side::Blue) > 0.0);
        assert!(evaluate(&state, Side::Red) < 0.0);
    }
}
