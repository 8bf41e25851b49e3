//! Action representation: a board coordinate.
//!
//! An action is a `(row, col)` pair naming an empty square. Actions are only
//! meaningful relative to a specific board: a coordinate that is legal on one
//! board may be occupied on another. `Board::legal_actions` is the source of
//! truth for which actions exist.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A move: place the current player's mark at `(row, col)`.
///
/// Coordinates are 0-indexed from the top-left corner. Ordering is
/// row-major, matching the enumeration order of `Board::legal_actions`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Row index (0-based, top to bottom).
    pub row: u8,
    /// Column index (0-based, left to right).
    pub col: u8,
}

impl Action {
    /// Create an action targeting `(row, col)`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned when an action cannot be applied to a board.
///
/// This is the crate's only error kind. It signals a caller contract
/// violation: the action was not drawn from `Board::legal_actions`, either
/// because the square is already taken or because the coordinates fall
/// outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidAction {
    /// The offending action.
    pub action: Action,
    /// The mark occupying the target square, or `None` if the action was
    /// out of bounds.
    pub occupied_by: Option<Player>,
}

impl std::fmt::Display for InvalidAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.occupied_by {
            Some(player) => write!(
                f,
                "invalid action {}: square already taken by {}",
                self.action, player
            ),
            None => write!(f, "invalid action {}: out of bounds", self.action),
        }
    }
}

impl std::error::Error for InvalidAction {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_ordering_is_row_major() {
        let mut actions = vec![Action::new(2, 0), Action::new(0, 1), Action::new(0, 0)];
        actions.sort();
        assert_eq!(
            actions,
            vec![Action::new(0, 0), Action::new(0, 1), Action::new(2, 0)]
        );
    }

    #[test]
    fn test_action_display() {
        assert_eq!(format!("{}", Action::new(1, 2)), "(1, 2)");
    }

    #[test]
    fn test_invalid_action_display() {
        let occupied = InvalidAction {
            action: Action::new(0, 0),
            occupied_by: Some(Player::X),
        };
        assert_eq!(
            format!("{}", occupied),
            "invalid action (0, 0): square already taken by X"
        );

        let out_of_bounds = InvalidAction {
            action: Action::new(3, 0),
            occupied_by: None,
        };
        assert_eq!(
            format!("{}", out_of_bounds),
            "invalid action (3, 0): out of bounds"
        );
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::new(2, 1);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
