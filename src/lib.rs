//! Amazons Simulator - a move-selection engine for the Game of the
//! Amazons.
//!
//! This crate provides:
//! - A fast 10x10 board representation with a per-side queen registry
//! - Sliding move generation for queen moves and stone shots
//! - A territory + mobility static evaluator
//! - Monte Carlo Tree Search (UCT) with progressive widening and
//!   parallel candidate evaluation

// Module declarations
pub mod core;
pub mod eval;
pub mod game;
pub mod mcts;

pub use crate::core::{Cell, MoveAction, Pos, Side};
pub use eval::evaluate;
pub use game::{GameState, PositionError};
pub use mcts::{search, search_with_config, SearchConfig, SearchError, SearchResult, UctSearch};
