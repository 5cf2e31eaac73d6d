//! Core game primitives for the Amazons engine.
//!
//! This module contains the fundamental types and constants that
//! define the game: cells, sides, moves, and board geometry.

pub mod constants;
pub mod moves;
pub mod types;

// Re-export commonly used types at the module level
pub use constants::*;
pub use moves::{Candidate, MoveAction, Pos};
pub use types::{Cell, Side};
