//! Search configuration parameters.
//!
//! The defaults are the tuned constants the engine's strength depends
//! on; change them for experiments, not for play.

/// UCT search parameters.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// UCB exploration constant. Deliberately below the textbook
    /// sqrt(2): the static evaluator is a strong prior.
    pub exploration: f64,
    /// Cap on the candidate list kept per node
    pub max_candidates: usize,
    /// Children materialized on a node's first expansion
    pub initial_children: usize,
    /// Children added per progressive-widening step
    pub widen_step: usize,
    /// Node visits per widening step
    pub widen_interval: u32,
    /// Rollout length in plies before falling back to static evaluation
    pub rollout_depth: u32,
    /// Visit band (exclusive upper bound) in which a leaf rolls out
    /// instead of branching
    pub rollout_band: u32,
    /// Hard cap on root visits
    pub max_attempts: u32,
    /// Fixed RNG seed for deterministic play (None = entropy)
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exploration: 0.35,
            max_candidates: 250,
            initial_children: 5,
            widen_step: 5,
            widen_interval: 1000,
            rollout_depth: 6,
            rollout_band: 40,
            max_attempts: 5_000_000,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Config with a fixed seed for reproducible searches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
