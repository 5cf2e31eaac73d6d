//! Game position representation.
//!
//! GameState holds the 100-cell board and the queen registry. The two
//! must agree at all times: every registered position holds that side's
//! queen, and every queen on the board is registered exactly once.

use thiserror::Error;

use crate::core::{
    col_of, legal_step, pos_of, row_of, Cell, MoveAction, Pos, Side, BOARD_SIZE, DIRECTIONS,
    GRID_SIZE, QUEENS_PER_SIDE,
};

// ============================================================================
// Input Validation
// ============================================================================

/// Validation failures for caller-supplied positions. These are the only
/// errors that cross the search boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid cell value {value} at position {pos}")]
    InvalidCell { pos: usize, value: i32 },

    #[error("queen position {0} outside the board")]
    QueenOutOfRange(i32),

    #[error("duplicate {side} queen at position {pos}")]
    DuplicateQueen { side: &'static str, pos: u8 },

    #[error("{side} queen registered at {pos} not present on the board")]
    QueenMismatch { side: &'static str, pos: u8 },

    #[error("board holds {found} {side} queens, expected 4")]
    QueenCount { side: &'static str, found: usize },
}

// ============================================================================
// GameState
// ============================================================================

/// The complete state of an Amazons position.
#[derive(Clone)]
pub struct GameState {
    /// Row-major cell contents
    pub board: [Cell; GRID_SIZE],
    /// Queen positions per side, indexed by `Side::index()`
    pub queens: [[Pos; QUEENS_PER_SIDE]; 2],
}

impl GameState {
    /// Standard starting position: blue queens on the top rows, red
    /// queens mirrored on the bottom rows.
    pub fn new() -> Self {
        let queens: [[Pos; QUEENS_PER_SIDE]; 2] = [[60, 69, 93, 96], [3, 6, 30, 39]];

        let mut board = [Cell::Empty; GRID_SIZE];
        for &pos in &queens[Side::Red.index()] {
            board[pos as usize] = Cell::RedQueen;
        }
        for &pos in &queens[Side::Blue.index()] {
            board[pos as usize] = Cell::BlueQueen;
        }

        GameState { board, queens }
    }

    /// Build a state from the caller's raw arrays, validating cell
    /// values and board/registry agreement.
    pub fn from_arrays(
        board: &[[i32; BOARD_SIZE]; BOARD_SIZE],
        queens: &[[i32; QUEENS_PER_SIDE]; 2],
    ) -> Result<Self, PositionError> {
        let mut cells = [Cell::Empty; GRID_SIZE];
        for (r, row) in board.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let pos = r * BOARD_SIZE + c;
                cells[pos] = u8::try_from(value)
                    .ok()
                    .and_then(Cell::from_u8)
                    .ok_or(PositionError::InvalidCell { pos, value })?;
            }
        }

        let mut registry = [[0 as Pos; QUEENS_PER_SIDE]; 2];
        for side in [Side::Red, Side::Blue] {
            let mut seen = [false; GRID_SIZE];
            for (slot, &value) in queens[side.index()].iter().enumerate() {
                if !(0..GRID_SIZE as i32).contains(&value) {
                    return Err(PositionError::QueenOutOfRange(value));
                }
                let pos = value as Pos;
                if seen[pos as usize] {
                    return Err(PositionError::DuplicateQueen {
                        side: side.name(),
                        pos,
                    });
                }
                seen[pos as usize] = true;
                if cells[pos as usize] != side.queen() {
                    return Err(PositionError::QueenMismatch {
                        side: side.name(),
                        pos,
                    });
                }
                registry[side.index()][slot] = pos;
            }

            let found = cells.iter().filter(|&&c| c == side.queen()).count();
            if found != QUEENS_PER_SIDE {
                return Err(PositionError::QueenCount {
                    side: side.name(),
                    found,
                });
            }
        }

        Ok(GameState {
            board: cells,
            queens: registry,
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Cell contents at `pos`.
    #[inline]
    pub fn cell(&self, pos: Pos) -> Cell {
        self.board[pos as usize]
    }

    /// Queen positions for a side.
    #[inline]
    pub fn queen_positions(&self, side: Side) -> &[Pos; QUEENS_PER_SIDE] {
        &self.queens[side.index()]
    }

    /// True if any 8-neighbour of `pos` is empty.
    pub fn has_empty_neighbor(&self, pos: Pos) -> bool {
        let row = row_of(pos);
        let col = col_of(pos);
        for &(dr, dc) in &DIRECTIONS {
            let r = row + dr;
            let c = col + dc;
            if legal_step(r, c) && self.board[pos_of(r, c) as usize].is_empty() {
                return true;
            }
        }
        false
    }

    /// Number of empty cells among the 8-neighbours of `pos`.
    pub fn neighbor_empty_count(&self, pos: Pos) -> i32 {
        let row = row_of(pos);
        let col = col_of(pos);
        let mut count = 0;
        for &(dr, dc) in &DIRECTIONS {
            let r = row + dr;
            let c = col + dc;
            if legal_step(r, c) && self.board[pos_of(r, c) as usize].is_empty() {
                count += 1;
            }
        }
        count
    }

    /// True if `mover` has won: the opposing side has no queen with an
    /// empty neighbour left, so it cannot move.
    pub fn is_won_by(&self, mover: Side) -> bool {
        self.queens[mover.opposite().index()]
            .iter()
            .all(|&q| !self.has_empty_neighbor(q))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Slide a queen of `side` from `from` to `to`, updating the
    /// registry. An illegal action is a programming bug and aborts
    /// rather than corrupting the position.
    pub fn move_queen(&mut self, side: Side, from: Pos, to: Pos) {
        assert_eq!(self.board[from as usize], side.queen());
        assert!(self.board[to as usize].is_empty());

        self.board[to as usize] = self.board[from as usize];
        self.board[from as usize] = Cell::Empty;

        for slot in self.queens[side.index()].iter_mut() {
            if *slot == from {
                *slot = to;
                break;
            }
        }
    }

    /// Place a stone on an empty cell.
    pub fn place_stone(&mut self, pos: Pos) {
        assert!(self.board[pos as usize].is_empty());
        self.board[pos as usize] = Cell::Stone;
    }

    /// Apply a full move for `side`: queen slide, then stone shot.
    pub fn apply(&mut self, side: Side, action: MoveAction) {
        self.move_queen(side, action.from, action.to);
        self.place_stone(action.stone);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_agrees(state: &GameState) -> bool {
        for side in [Side::Red, Side::Blue] {
            for &pos in state.queen_positions(side) {
                if state.cell(pos) != side.queen() {
                    return false;
                }
            }
            let on_board = state
                .board
                .iter()
                .filter(|&&c| c == side.queen())
                .count();
            if on_board != QUEENS_PER_SIDE {
                return false;
            }
        }
        true
    }

    #[test]
    fn starting_position_agrees() {
        let state = GameState::new();
        assert!(registry_agrees(&state));
        assert_eq!(state.cell(3), Cell::BlueQueen);
        assert_eq!(state.cell(96), Cell::RedQueen);
        assert_eq!(
            state.board.iter().filter(|c| c.is_empty()).count(),
            GRID_SIZE - 8
        );
    }

    #[test]
    fn apply_then_inverse_restores_position() {
        let original = GameState::new();
        let action = MoveAction::new(60, 40, 60);

        let mut state = original.clone();
        state.apply(Side::Red, action);
        assert_eq!(state.cell(40), Cell::RedQueen);
        assert_eq!(state.cell(60), Cell::Stone);
        assert!(registry_agrees(&state));

        // Inverse: lift the stone, slide the queen back.
        state.board[action.stone as usize] = Cell::Empty;
        state.move_queen(Side::Red, action.to, action.from);

        assert_eq!(state.board, original.board);
        assert_eq!(state.queens, original.queens);
    }

    #[test]
    fn walled_queen_has_no_empty_neighbor() {
        let mut state = GameState::new();
        // Wall in the red queen at (9, 3).
        for pos in [82u8, 83, 84, 92, 94] {
            state.board[pos as usize] = Cell::Stone;
        }
        assert!(!state.has_empty_neighbor(93));
        assert_eq!(state.neighbor_empty_count(93), 0);
        assert!(state.has_empty_neighbor(96));
    }

    #[test]
    fn win_requires_all_opposing_queens_dead() {
        let mut state = GameState::new();
        assert!(!state.is_won_by(Side::Red));

        // Wall in every blue queen.
        for &queen in &[3u8, 6, 30, 39] {
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
        assert!(state.is_won_by(Side::Red));
        assert!(!state.is_won_by(Side::Blue));
    }

    #[test]
    fn from_arrays_round_trips_the_opening() {
        let reference = GameState::new();
        let mut board = [[0i32; BOARD_SIZE]; BOARD_SIZE];
        for (pos, &cell) in reference.board.iter().enumerate() {
            board[pos / BOARD_SIZE][pos % BOARD_SIZE] = cell as i32;
        }
        let queens = [[60, 69, 93, 96], [3, 6, 30, 39]];

        let state = GameState::from_arrays(&board, &queens).unwrap();
        assert_eq!(state.board, reference.board);
        assert_eq!(state.queens, reference.queens);
    }

    #[test]
    fn from_arrays_rejects_malformed_input() {
        let reference = GameState::new();
        let mut board = [[0i32; BOARD_SIZE]; BOARD_SIZE];
        for (pos, &cell) in reference.board.iter().enumerate() {
            board[pos / BOARD_SIZE][pos % BOARD_SIZE] = cell as i32;
        }
        let queens = [[60, 69, 93, 96], [3, 6, 30, 39]];

        let mut bad_cell = board;
        bad_cell[4][4] = 7;
        assert!(matches!(
            GameState::from_arrays(&bad_cell, &queens),
            Err(PositionError::InvalidCell { pos: 44, value: 7 })
        ));

        let mut bad_range = queens;
        bad_range[0][0] = 100;
        assert!(matches!(
            GameState::from_arrays(&board, &bad_range),
            Err(PositionError::QueenOutOfRange(100))
        ));

        let mut mismatched = queens;
        mismatched[0][0] = 61;
        assert!(matches!(
            GameState::from_arrays(&board, &mismatched),
            Err(PositionError::QueenMismatch {
                side: "red",
                pos: 61
            })
        ));

        let mut duplicated = queens;
        duplicated[1][1] = 3;
        assert!(matches!(
            GameState::from_arrays(&board, &duplicated),
            Err(PositionError::DuplicateQueen {
                side: "blue",
                pos: 3
            })
        ));
    }
}
