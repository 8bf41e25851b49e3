//! Exhaustive minimax over the full game tree.
//!
//! The maximizing player is always `X` and the minimizing player always `O`,
//! matching the +1/-1 utility convention on `Board`. The value functions are
//! mutually recursive and walk depth-first to every reachable terminal leaf:
//! no pruning, no memoization, no depth limit. The tree is bounded by nine
//! plies, so the worst case from an empty board is ~9! leaf evaluations.

use std::time::Instant;

use crate::core::{Action, Board, Player};

use super::stats::SearchStats;

/// Highest achievable utility (X wins). The full range is {-1, 0, 1}.
const MAX_UTILITY: i8 = 1;

/// Lowest achievable utility (O wins).
const MIN_UTILITY: i8 = -1;

/// Minimax search context.
///
/// Owns the statistics for the current search. The search itself is pure:
/// running it twice on the same board gives the same action.
#[derive(Clone, Debug, Default)]
pub struct MinimaxSearch {
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a new search context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the optimal action for the player to move.
    ///
    /// Returns `None` on a terminal board: there is nothing to play and
    /// callers must check terminality before treating the result as a move.
    ///
    /// Among equal-valued actions the earliest one in row-major enumeration
    /// order wins, because only a strictly better value displaces the
    /// running candidate.
    pub fn best_action(&mut self, board: &Board) -> Option<Action> {
        let start = Instant::now();
        self.stats.reset();

        if board.is_terminal() {
            return None;
        }

        let mut best_action = None;
        match board.player_to_move() {
            Player::X => {
                // Seeded one below the achievable minimum so the first
                // action always becomes the candidate.
                let mut best_value = MIN_UTILITY - 1;
                for action in board.legal_actions() {
                    let value = self.min_value(&apply_legal(board, action));
                    if value > best_value {
                        best_value = value;
                        best_action = Some(action);
                    }
                }
            }
            Player::O => {
                let mut best_value = MAX_UTILITY + 1;
                for action in board.legal_actions() {
                    let value = self.max_value(&apply_legal(board, action));
                    if value < best_value {
                        best_value = value;
                        best_action = Some(action);
                    }
                }
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        log::debug!(
            "minimax: {} nodes, {} leaves in {}us",
            self.stats.nodes_visited,
            self.stats.leaves_evaluated,
            self.stats.time_us
        );

        best_action
    }

    /// Value of `board` with the maximizing player (X) to act.
    ///
    /// Terminal boards evaluate to their utility; otherwise the maximum of
    /// `min_value` over every successor. Accumulates into the context's
    /// statistics.
    pub fn max_value(&mut self, board: &Board) -> i8 {
        self.stats.nodes_visited += 1;

        if board.is_terminal() {
            self.stats.leaves_evaluated += 1;
            return board.utility();
        }

        let mut value = MIN_UTILITY - 1;
        for action in board.legal_actions() {
            value = value.max(self.min_value(&apply_legal(board, action)));
        }
        value
    }

    /// Value of `board` with the minimizing player (O) to act.
    ///
    /// Mirror image of `max_value`.
    pub fn min_value(&mut self, board: &Board) -> i8 {
        self.stats.nodes_visited += 1;

        if board.is_terminal() {
            self.stats.leaves_evaluated += 1;
            return board.utility();
        }

        let mut value = MAX_UTILITY + 1;
        for action in board.legal_actions() {
            value = value.min(self.max_value(&apply_legal(board, action)));
        }
        value
    }

    /// Get statistics from the most recent `best_action` call, or the
    /// running totals of direct `max_value`/`min_value` calls.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Compute the optimal action for the player to move, or `None` on a
/// terminal board.
pub fn optimal_action(board: &Board) -> Option<Action> {
    MinimaxSearch::new().best_action(board)
}

/// Value of `board` with the maximizing player (X) to act.
pub fn max_value(board: &Board) -> i8 {
    MinimaxSearch::new().max_value(board)
}

/// Value of `board` with the minimizing player (O) to act.
pub fn min_value(board: &Board) -> i8 {
    MinimaxSearch::new().min_value(board)
}

/// Apply an action known to come from `legal_actions`.
fn apply_legal(board: &Board, action: Action) -> Board {
    match board.apply(action) {
        Ok(next) => next,
        // Unreachable for actions enumerated from this board.
        Err(err) => unreachable!("enumerated action was rejected: {}", err),
    }
}
