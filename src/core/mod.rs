//! Core engine types: players, actions, and the board model.
//!
//! Everything here is pure data with pure derived queries. Boards are never
//! mutated in place; successors are fresh values.

pub mod action;
pub mod board;
pub mod player;

pub use action::{Action, InvalidAction};
pub use board::{Board, Square};
pub use player::Player;
