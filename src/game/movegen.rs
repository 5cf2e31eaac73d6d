//! Move generation: queen slides and stone shots.
//!
//! Queens move like chess queens over consecutive empty cells; after
//! moving, a stone is shot from the landing square with the same
//! sliding rule, the vacated square counting as empty.

use crate::core::{
    col_of, legal_step, pos_of, row_of, Cell, MoveAction, Pos, Side, DIRECTIONS, GRID_SIZE,
};
use super::state::GameState;

/// Empty cells reachable by sliding from `origin` along `dir` until a
/// non-empty cell or the board edge, nearest first. The single walk
/// primitive behind queen moves, stone shots, and territory expansion.
pub fn slide(
    board: &[Cell; GRID_SIZE],
    origin: Pos,
    dir: (i8, i8),
) -> impl Iterator<Item = Pos> + '_ {
    let (dr, dc) = dir;
    let mut r = row_of(origin) + dr;
    let mut c = col_of(origin) + dc;

    std::iter::from_fn(move || {
        if legal_step(r, c) && board[pos_of(r, c) as usize].is_empty() {
            let pos = pos_of(r, c);
            r += dr;
            c += dc;
            Some(pos)
        } else {
            None
        }
    })
}

/// Empty cells slide-reachable from `origin` in all eight directions,
/// enumerated direction-major then by distance.
pub fn expand_territory(board: &[Cell; GRID_SIZE], origin: Pos) -> Vec<Pos> {
    let mut cells = Vec::with_capacity(32);
    for &dir in &DIRECTIONS {
        cells.extend(slide(board, origin, dir));
    }
    cells
}

/// Queen-move-only actions for `side` as `(from, to)` pairs. Used by
/// rollouts, where the stone is chosen separately.
pub fn queen_moves(state: &GameState, side: Side) -> Vec<(Pos, Pos)> {
    let mut moves = Vec::with_capacity(128);

    for &from in state.queen_positions(side) {
        for &dir in &DIRECTIONS {
            for to in slide(&state.board, from, dir) {
                moves.push((from, to));
            }
        }
    }

    moves
}

/// Full `(from, to, stone)` actions for `side`. Enumeration order is
/// queen x direction x distance x stone-direction x stone-distance;
/// the search sorts candidates by value before consuming them, so the
/// order is not load-bearing.
pub fn full_moves(state: &GameState, side: Side) -> Vec<MoveAction> {
    let mut board = state.board;
    let mut moves = Vec::with_capacity(2048);
    let queen = side.queen();

    for &from in state.queen_positions(side) {
        // The moving queen vacates its square for both the slide and
        // the stone shot.
        board[from as usize] = Cell::Empty;

        for &dir in &DIRECTIONS {
            for to in slide(&board, from, dir) {
                for &stone_dir in &DIRECTIONS {
                    for stone in slide(&board, to, stone_dir) {
                        moves.push(MoveAction::new(from, to, stone));
                    }
                }
            }
        }

        board[from as usize] = queen;
    }

    moves
}
