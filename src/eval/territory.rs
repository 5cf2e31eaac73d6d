//! Territory evaluation via breadth-first floods.
//!
//! Both terms flood the board from each side's four queens and compare
//! per-cell arrival distances. T1 uses queen-move layers (a whole slide
//! costs one layer); T2 uses king-move layers (one step per layer).

use crate::core::{
    col_of, legal_step, pos_of, row_of, Pos, Side, DIRECTIONS, GRID_SIZE, QUEENS_PER_SIDE,
};
use crate::game::GameState;

const UNREACHED: i32 = i32::MAX;

/// Distance field seeded from `seeds`, where one layer covers a full
/// queen slide. Occupied cells carry distance 0 and block propagation.
fn flood_sliding(state: &GameState, seeds: &[Pos; QUEENS_PER_SIDE]) -> [i32; GRID_SIZE] {
    let mut dist = [UNREACHED; GRID_SIZE];
    for (pos, cell) in state.board.iter().enumerate() {
        if !cell.is_empty() {
            dist[pos] = 0;
        }
    }

    let mut frontier: Vec<Pos> = seeds.to_vec();
    let mut next: Vec<Pos> = Vec::new();
    let mut layer = 1;

    while !frontier.is_empty() {
        for &pos in &frontier {
            let row = row_of(pos);
            let col = col_of(pos);
            for &(dr, dc) in &DIRECTIONS {
                let mut r = row + dr;
                let mut c = col + dc;
                // Cells claimed by this layer stay transparent so the
                // slide reaches everything behind them.
                while legal_step(r, c) && dist[pos_of(r, c) as usize] >= layer {
                    let new_pos = pos_of(r, c) as usize;
                    if dist[new_pos] > layer {
                        dist[new_pos] = layer;
                        next.push(new_pos as Pos);
                    }
                    r += dr;
                    c += dc;
                }
            }
        }
        frontier = std::mem::take(&mut next);
        layer += 1;
    }

    dist
}

/// Distance field seeded from `seeds`, one king step per layer.
fn flood_stepping(state: &GameState, seeds: &[Pos; QUEENS_PER_SIDE]) -> [i32; GRID_SIZE] {
    let mut dist = [UNREACHED; GRID_SIZE];
    for (pos, cell) in state.board.iter().enumerate() {
        if !cell.is_empty() {
            dist[pos] = 0;
        }
    }

    let mut frontier: Vec<Pos> = seeds.to_vec();
    let mut next: Vec<Pos> = Vec::new();
    let mut layer = 1;

    while !frontier.is_empty() {
        for &pos in &frontier {
            let row = row_of(pos);
            let col = col_of(pos);
            for &(dr, dc) in &DIRECTIONS {
                let r = row + dr;
                let c = col + dc;
                if legal_step(r, c) {
                    let new_pos = pos_of(r, c) as usize;
                    if dist[new_pos] > layer {
                        dist[new_pos] = layer;
                        next.push(new_pos as Pos);
                    }
                }
            }
        }
        frontier = std::mem::take(&mut next);
        layer += 1;
    }

    dist
}

/// Queen-distance territory T1 from `side`'s perspective, plus the
/// contested-mass indicator `w`.
///
/// Each cell contributes the sign of the distance difference; cells
/// reachable by both sides add `2^-|d_red - d_blue|` to `w` (occupied
/// cells sit at distance 0 for both and add 1 each), while cells out of
/// either side's reach add nothing.
pub fn territory_queen(state: &GameState, side: Side) -> (f64, f64) {
    let red = flood_sliding(state, state.queen_positions(Side::Red));
    let blue = flood_sliding(state, state.queen_positions(Side::Blue));

    let mut value = 0.0;
    let mut w = 0.0;
    for i in 0..GRID_SIZE {
        if red[i] < blue[i] {
            value += 1.0;
        } else if red[i] > blue[i] {
            value -= 1.0;
        }

        if red[i] != UNREACHED && blue[i] != UNREACHED {
            w += (2.0f64).powi(-(red[i] - blue[i]).abs());
        }
    }

    (side.sign() * value, w)
}

/// King-distance territory T2 from `side`'s perspective.
pub fn territory_king(state: &GameState, side: Side) -> f64 {
    let red = flood_stepping(state, state.queen_positions(Side::Red));
    let blue = flood_stepping(state, state.queen_positions(Side::Blue));

    let mut value = 0.0;
    for i in 0..GRID_SIZE {
        if red[i] < blue[i] {
            value += 1.0;
        } else if red[i] > blue[i] {
            value -= 1.0;
        }
    }

    side.sign() * value
}
