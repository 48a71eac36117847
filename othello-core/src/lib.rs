//! `othello-core` is an Othello board model with a move engine and a plain-text save layout.
//!
//! This package is split into three pieces:
//!
//!  - [`Board`] holds the 8×8 grid of cells and reads and writes the save layout.
//!  - [`engine`] validates a placement (occupancy, adjacency, captures) and
//!    commits it atomically. It keeps no state of its own and never decides
//!    whose turn it is or whether the game is over.
//!  - [`Location`] and [`Color`] convert between the user-facing notation
//!    ("D3", "white") and the internal coordinates.

pub mod engine;
pub mod test_utils;

mod board;
mod color;
mod location;

pub use board::*;
pub use color::*;
pub use engine::{attempt_move, Captures, MoveRejection};
pub use location::*;

/// The number of cells on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on an Othello board.
pub const NUM_SPACES: usize = EDGE_LENGTH * EDGE_LENGTH;
