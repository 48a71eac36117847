//! Move legality and capture resolution.
//!
//! The engine keeps no state between calls: each [`attempt_move`] validates a
//! placement against whatever board it is given and commits it only if every
//! check passes. Whose turn it is, passing, and the end of the game are left
//! to the caller; the engine does not detect a position with no legal moves.

use crate::{Board, Color, Location, EDGE_LENGTH};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::fmt;

/// Offsets to the eight neighbouring cells, as (row, column) steps.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// Every ray from one cell together reaches at most 27 other cells.
type CaptureBuffer = ArrayVec<[Location; 32]>;
type RunBuffer = ArrayVec<[Location; EDGE_LENGTH]>;

/// Why a placement was refused. Rejections are a normal outcome, not a failure.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum MoveRejection {
    #[display(fmt = "Cell {} is already occupied.", _0)]
    Occupied(#[error(not(source))] Location),
    #[display(fmt = "Cell {} is not adjacent to any existing occupied cell.", _0)]
    NotAdjacent(#[error(not(source))] Location),
    #[display(fmt = "Move at cell {} does not capture any cells.", _0)]
    NoCaptures(#[error(not(source))] Location),
}

/// The cells flipped by a placement, in direction order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Captures(CaptureBuffer);

impl Captures {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether `loc` is captured.
    pub fn contains(&self, loc: Location) -> bool {
        self.0.contains(&loc)
    }

    pub fn iter(&self) -> impl Iterator<Item = Location> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Captures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .iter()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

/// Returns whether any in-bounds neighbour of `loc` holds a piece of either color.
pub fn is_adjacent(board: &Board, loc: Location) -> bool {
    let (row, col) = (loc.row() as isize, loc.col() as isize);
    DIRECTIONS
        .iter()
        .any(|&(d_row, d_col)| board.get(row + d_row, col + d_col).is_some())
}

/// Walk from `loc` one `(d_row, d_col)` step at a time, returning the run of opposing pieces
/// which ends at a piece of `color`. The run is empty if the walk reaches an
/// empty cell or the edge of the board first.
fn scan(board: &Board, loc: Location, color: Color, (d_row, d_col): (isize, isize)) -> RunBuffer {
    let mut run = RunBuffer::new();
    let (mut row, mut col) = (loc.row() as isize, loc.col() as isize);

    loop {
        row += d_row;
        col += d_col;

        match board.get(row, col) {
            // Empty, or off the board.
            None => return RunBuffer::new(),
            Some(found) if found == color => return run,
            Some(_) => run.extend(Location::checked(row, col)),
        }
    }
}

/// Find every cell a placement of `color` at `loc` would flip, without
/// checking occupancy or adjacency and without touching the board.
pub fn captures(board: &Board, loc: Location, color: Color) -> Captures {
    let mut captured = CaptureBuffer::new();
    for &direction in DIRECTIONS.iter() {
        captured.extend(scan(board, loc, color, direction));
    }
    Captures(captured)
}

/// Try to place a piece of `color` at `loc`.
///
/// On success the piece and every captured cell are set to `color` and the
/// captures are returned. On rejection the board is left untouched.
pub fn attempt_move(
    board: &mut Board,
    loc: Location,
    color: Color,
) -> Result<Captures, MoveRejection> {
    if board[loc].is_some() {
        return Err(MoveRejection::Occupied(loc));
    }

    if !is_adjacent(board, loc) {
        return Err(MoveRejection::NotAdjacent(loc));
    }

    let captured = captures(board, loc, color);
    if captured.is_empty() {
        return Err(MoveRejection::NoCaptures(loc));
    }

    board.place(loc, color);
    for cell in captured.iter() {
        board.place(cell, color);
    }

    Ok(captured)
}
