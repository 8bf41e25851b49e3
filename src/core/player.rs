//! Player identity.
//!
//! Turn order is never stored on the board: whose turn it is gets derived
//! from mark counts each time (see `Board::player_to_move`). This type is
//! the identity itself.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// `X` is the first player and moves first on the initial board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player.
    X,
    /// Second player.
    O,
}

impl Player {
    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Terminal utility when this player wins: +1 for `X`, -1 for `O`.
    #[must_use]
    pub const fn winning_utility(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}
