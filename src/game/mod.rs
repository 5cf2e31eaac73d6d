//! Position state and move generation.

pub mod movegen;
pub mod state;

pub use movegen::{expand_territory, full_moves, queen_moves, slide};
pub use state::{GameState, PositionError};
