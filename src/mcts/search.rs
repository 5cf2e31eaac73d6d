//! Search driver and public entry points.
//!
//! The driver loops select/expand until the wall-clock budget or the
//! attempt cap is spent, then returns the most-visited root child.

use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::core::{Side, BOARD_SIZE, QUEENS_PER_SIDE};
use crate::eval::territory_queen;
use crate::game::{GameState, PositionError};
use super::config::SearchConfig;
use super::tree::UctTree;

/// Errors that can cross the search boundary. All of them are input
/// validation failures raised before any search state is built.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid position: {0}")]
    Position(#[from] PositionError),

    #[error("invalid side value {0} (expected +1 or -1)")]
    InvalidSide(i32),

    #[error("negative time budget {0}")]
    NegativeBudget(f64),
}

/// Outcome of a search. `from`/`to`/`stone` are all `-1` when the side
/// to move has no legal action.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub from: i32,
    pub to: i32,
    pub stone: i32,
    /// Root visit total at termination
    pub attempt: u32,
    /// Static value of the chosen child
    pub value: f64,
    /// Win probability percentage for the chosen child
    pub pro: f64,
}

impl SearchResult {
    fn no_move(attempt: u32) -> Self {
        SearchResult {
            from: -1,
            to: -1,
            stone: -1,
            attempt,
            value: 0.0,
            pro: 0.0,
        }
    }
}

/// A reusable search driver holding the configuration and the rollout
/// random source.
pub struct UctSearch {
    config: SearchConfig,
    rng: fastrand::Rng,
}

impl UctSearch {
    pub fn new(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        UctSearch { config, rng }
    }

    /// Run a search for `to_move` on `state` with a wall-clock budget
    /// of `cal_time` seconds.
    pub fn run(
        &mut self,
        state: &GameState,
        to_move: Side,
        cal_time: f64,
        display_info: bool,
    ) -> SearchResult {
        let mut tree = UctTree::new(state.clone(), to_move, self.config.clone());
        let start = Instant::now();

        loop {
            let leaf = tree.select();
            tree.expand(leaf, &mut self.rng);

            if start.elapsed().as_secs_f64() > cal_time
                || tree.root().visits > self.config.max_attempts
            {
                break;
            }
        }

        let attempt = tree.root().visits;
        let (rank, action, child_idx) = match tree.best_child() {
            Some(best) => best,
            None => {
                debug!(attempt, "no legal move at the root");
                return SearchResult::no_move(attempt);
            }
        };

        let child = &tree.nodes[child_idx];
        let pro = (child.wins as f64 + child.visits as f64) / child.visits as f64 / 2.0 * 100.0;

        debug!(
            side = to_move.name(),
            from = action.from,
            to = action.to,
            stone = action.stone,
            attempt,
            child_visits = child.visits,
            value = child.value,
            "search finished"
        );

        if display_info {
            let (_, w) = territory_queen(state, to_move);
            println!(
                "{}(From:{},To:{},Stone:{})|{:.1}|(attempt:{}/{},number:{}/{},value:{:.2},pro:{:.0})",
                to_move.name(),
                action.from,
                action.to,
                action.stone,
                w,
                child.visits,
                attempt,
                rank,
                tree.root().children.len(),
                child.value,
                pro.clamp(0.0, 100.0),
            );
        }

        SearchResult {
            from: action.from as i32,
            to: action.to as i32,
            stone: action.stone as i32,
            attempt,
            value: child.value,
            pro,
        }
    }
}

/// Search a caller-supplied position with the default configuration.
pub fn search(
    board: &[[i32; BOARD_SIZE]; BOARD_SIZE],
    queens: &[[i32; QUEENS_PER_SIDE]; 2],
    move_side: i32,
    cal_time: f64,
    display_info: bool,
) -> Result<SearchResult, SearchError> {
    search_with_config(
        board,
        queens,
        move_side,
        cal_time,
        display_info,
        SearchConfig::default(),
    )
}

/// Search a caller-supplied position with an explicit configuration,
/// exposing the test-mode seed and budget knobs.
pub fn search_with_config(
    board: &[[i32; BOARD_SIZE]; BOARD_SIZE],
    queens: &[[i32; QUEENS_PER_SIDE]; 2],
    move_side: i32,
    cal_time: f64,
    display_info: bool,
    config: SearchConfig,
) -> Result<SearchResult, SearchError> {
    let side = Side::from_sign(move_side).ok_or(SearchError::InvalidSide(move_side))?;
    if cal_time < 0.0 {
        return Err(SearchError::NegativeBudget(cal_time));
    }
    let state = GameState::from_arrays(board, queens)?;

    Ok(UctSearch::new(config).run(&state, side, cal_time, display_info))
}
