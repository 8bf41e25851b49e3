//! Board state and the pure queries derived from it.
//!
//! ## Board
//!
//! A 3×3 grid of squares, stored row-major. Boards are plain `Copy` values:
//! applying an action constructs a fresh board and never mutates the input,
//! so the search can branch freely without defensive cloning.
//!
//! ## Derived queries
//!
//! Everything about the game position is recomputed from the grid on demand:
//! - whose turn it is (from mark counts)
//! - legal actions (empty squares)
//! - winner, terminality, utility
//!
//! No turn counter or status field is stored; there is nothing to fall out
//! of sync with the squares.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, InvalidAction};
use super::player::Player;

const SIZE: usize = 3;

/// A single square on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark placed.
    #[default]
    Empty,
    /// Square holding a player's mark.
    Taken(Player),
}

/// A 3×3 tic-tac-toe position.
///
/// The board assumes legal reachability: the count of `X` marks equals the
/// count of `O` marks, or exceeds it by exactly one. This invariant is not
/// enforced; queries on unreachable boards still answer, but the answers
/// only carry game meaning on legal positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; SIZE]; SIZE],
}

impl Board {
    /// Side length of the square grid. Win length always equals this.
    pub const SIZE: usize = SIZE;

    /// Create the initial board with every square empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            squares: [[Square::Empty; Self::SIZE]; Self::SIZE],
        }
    }

    /// Build a board from explicit square contents, row-major.
    ///
    /// Intended for setting up arbitrary positions (fixtures, resumed
    /// games). Reachability is not checked.
    #[must_use]
    pub const fn from_squares(squares: [[Square; Self::SIZE]; Self::SIZE]) -> Self {
        Self { squares }
    }

    /// Get the square at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.squares.get(row)?.get(col).copied()
    }

    /// Check whether the square at `(row, col)` is empty.
    ///
    /// Out-of-bounds coordinates are not empty.
    #[must_use]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Count the marks belonging to `player`.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|&&square| square == Square::Taken(player))
            .count()
    }

    /// The player whose turn it is on this board.
    ///
    /// Derived from mark counts: `O` moves when it has strictly fewer marks
    /// than `X`, otherwise `X` moves. Equal counts (including the empty
    /// board) mean `X`, since `X` always moves first and play alternates.
    #[must_use]
    pub fn player_to_move(&self) -> Player {
        if self.count(Player::O) < self.count(Player::X) {
            Player::O
        } else {
            Player::X
        }
    }

    /// All actions targeting an empty square, enumerated row-major.
    ///
    /// The result is a set of distinct coordinates; the row-major order is
    /// what makes search tie-breaking reproducible. Empty when the board is
    /// full.
    #[must_use]
    pub fn legal_actions(&self) -> SmallVec<[Action; 9]> {
        let mut actions = SmallVec::new();
        for row in 0..Self::SIZE {
            for col in 0..Self::SIZE {
                if self.squares[row][col] == Square::Empty {
                    actions.push(Action::new(row as u8, col as u8));
                }
            }
        }
        actions
    }

    /// Apply `action` for the player to move, producing the successor board.
    ///
    /// The mark placed is `player_to_move()` of the *input* board. The input
    /// is never modified. Returns `InvalidAction` if the target square is
    /// already taken or out of bounds, which callers that only play actions
    /// from `legal_actions` will never see.
    pub fn apply(&self, action: Action) -> Result<Board, InvalidAction> {
        let (row, col) = (action.row as usize, action.col as usize);
        match self.get(row, col) {
            None => Err(InvalidAction {
                action,
                occupied_by: None,
            }),
            Some(Square::Taken(player)) => Err(InvalidAction {
                action,
                occupied_by: Some(player),
            }),
            Some(Square::Empty) => {
                let mut next = *self;
                next.squares[row][col] = Square::Taken(self.player_to_move());
                Ok(next)
            }
        }
    }

    /// The player owning a completed line, if any.
    ///
    /// Scans rows top-to-bottom, then columns left-to-right, then the main
    /// diagonal, then the anti-diagonal, and returns on the first full run
    /// of one player's marks. At most one player can have a line on a legal
    /// board, so the scan order is fixed purely for reproducibility.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        for row in 0..Self::SIZE {
            if let Some(player) = self.run_owner((0..Self::SIZE).map(|col| (row, col))) {
                return Some(player);
            }
        }
        for col in 0..Self::SIZE {
            if let Some(player) = self.run_owner((0..Self::SIZE).map(|row| (row, col))) {
                return Some(player);
            }
        }
        if let Some(player) = self.run_owner((0..Self::SIZE).map(|i| (i, i))) {
            return Some(player);
        }
        self.run_owner((0..Self::SIZE).map(|i| (Self::SIZE - 1 - i, i)))
    }

    /// Check whether every square is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.squares
            .iter()
            .flatten()
            .all(|&square| square != Square::Empty)
    }

    /// Check whether the game is over: someone won, or the board is full.
    ///
    /// Terminality is monotone along any sequence of `apply` calls from the
    /// initial board, but nothing here enforces that callers stop playing;
    /// that is the caller's contract.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Terminal utility: +1 if `X` won, -1 if `O` won, 0 otherwise.
    ///
    /// Only meaningful on terminal boards. On a non-terminal board this
    /// returns 0, indistinguishable from a draw; callers must check
    /// `is_terminal` first and must not use 0 to tell the two apart. This
    /// convention is deliberate and documented rather than turned into an
    /// error.
    #[must_use]
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(player) => player.winning_utility(),
            None => 0,
        }
    }

    /// Owner of a full run of identical marks along `coords`, if any.
    fn run_owner(&self, mut coords: impl Iterator<Item = (usize, usize)>) -> Option<Player> {
        let (row, col) = coords.next()?;
        let Square::Taken(first) = self.squares[row][col] else {
            return None;
        };
        for (row, col) in coords {
            if self.squares[row][col] != Square::Taken(first) {
                return None;
            }
        }
        Some(first)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_idx, row) in self.squares.iter().enumerate() {
            for (col_idx, square) in row.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, "   ")?,
                    Square::Taken(player) => write!(f, " {} ", player)?,
                }
                if col_idx < Self::SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row_idx < Self::SIZE - 1 {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}
