//! Monte Carlo Tree Search.
//!
//! UCB1 selection with progressive widening, value-ordered expansion
//! with parallel candidate evaluation, shallow rollouts cut off by the
//! static evaluator, and signed-win backpropagation.

pub mod config;
pub mod node;
pub mod search;
pub mod tree;

pub use config::SearchConfig;
pub use node::UctNode;
pub use search::{search, search_with_config, SearchError, SearchResult, UctSearch};
pub use tree::UctTree;
