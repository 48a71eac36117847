//! Code for working with [`Location`]s on the Othello board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

/// A location on the Othello board, stored as 0-indexed row and column.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    row: u8,
    col: u8,
}

const COLUMN_LABELS: &str = "ABCDEFGH";
const ROW_LABELS: &str = "12345678";

impl Location {
    /// Convert from row and column coordinates.
    /// Returns None if the coordinates are off the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Convert from signed coordinates, which may point past any edge.
    #[inline]
    pub fn checked(row: isize, col: isize) -> Option<Self> {
        if row < 0 || col < 0 {
            return None;
        }
        Self::from_coords(row as usize, col as usize)
    }

    /// Convert from a row-major square index.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::from_coords(index / EDGE_LENGTH, index % EDGE_LENGTH)
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Step by `(d_row, d_col)`, or None if that leaves the board.
    #[inline]
    pub fn offset(self, (d_row, d_col): (isize, isize)) -> Option<Self> {
        Self::checked(self.row as isize + d_row, self.col as isize + d_col)
    }

    /// Every location on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES).filter_map(Location::from_index)
    }

    /// The column letter ("A".."H") of this location.
    pub fn column_label(self) -> char {
        label(COLUMN_LABELS, self.col())
    }

    /// The row number ("1".."8") of this location.
    pub fn row_label(self) -> char {
        label(ROW_LABELS, self.row())
    }
}

fn label(labels: &str, index: usize) -> char {
    labels.as_bytes()[index] as char
}

/// Convert this [`Location`] into string notation ("D3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(self.column_label())?;
        f.write_char(self.row_label())
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "expected a column letter A-H followed by a row number 1-8")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4"), either case.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LABELS.find(col_str).ok_or(ParseLocationError)?;
        let row = ROW_LABELS
            .find(chars.next().ok_or(ParseLocationError)?)
            .ok_or(ParseLocationError)?;

        if chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row, col).ok_or(ParseLocationError)
    }
}
