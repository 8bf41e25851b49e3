//! # tictactoe-engine
//!
//! A tic-tac-toe game engine with exhaustive minimax search.
//!
//! ## Design Principles
//!
//! 1. **Immutable Boards**: `Board` is a `Copy` value; applying an action
//!    produces a fresh successor and never touches the input. The search
//!    branches without defensive cloning or shared mutable state.
//!
//! 2. **Derived Turn State**: Whose turn it is gets recomputed from mark
//!    counts on every call instead of being stored, so there is no current
//!    player field to fall out of sync with the squares.
//!
//! 3. **Exhaustive Search**: Minimax walks the entire remaining game tree to
//!    every terminal leaf. No alpha-beta pruning, no transposition caching,
//!    no heuristic cutoffs; the 3×3 tree is bounded by nine plies.
//!
//! ## Architecture
//!
//! The caller (a game loop, UI, or service — none of which live here) holds
//! the authoritative board and drives turns:
//!
//! - Construct a board (`Board::new` or `Board::from_squares`)
//! - Query `player_to_move`, `legal_actions`, `winner`, `is_terminal`,
//!   `utility`
//! - Apply an action for a successor board
//! - Ask `search::optimal_action` for the best move
//!
//! ## Modules
//!
//! - `core`: players, actions, the board model and its derived queries
//! - `search`: mutually recursive minimax value functions, action selection,
//!   search statistics

pub mod core;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Action, Board, InvalidAction, Player, Square};

pub use crate::search::{max_value, min_value, optimal_action, MinimaxSearch, SearchStats};
