//! Minimax search for tictactoe-engine.
//!
//! ## Overview
//!
//! Full-depth, exhaustive minimax: every board reachable from the input is
//! visited, so the returned action is game-theoretically optimal, not a
//! heuristic. There is no pruning or caching; the 3×3 tree is small enough
//! that the whole search runs in milliseconds.
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_engine::core::Board;
//! use tictactoe_engine::search::optimal_action;
//!
//! let board = Board::new();
//! if let Some(action) = optimal_action(&board) {
//!     let next = board.apply(action).unwrap();
//!     println!("played {}:\n{}", action, next);
//! }
//! ```
//!
//! For search diagnostics, use the context form:
//!
//! ```rust
//! use tictactoe_engine::core::Board;
//! use tictactoe_engine::search::MinimaxSearch;
//!
//! let mut search = MinimaxSearch::new();
//! if let Some(action) = search.best_action(&Board::new()) {
//!     println!("best: {} ({} nodes visited)", action, search.stats().nodes_visited);
//! }
//! ```

pub mod minimax;
pub mod stats;

// Re-export main types
pub use minimax::{max_value, min_value, optimal_action, MinimaxSearch};
pub use stats::SearchStats;
