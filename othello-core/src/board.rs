//! The 8×8 board model and its plain-text save layout.
//!
//! A save is exactly eight lines of eight characters: a space for an empty
//! cell and a color code (`W` or `B`) for an occupied one, rows top to bottom.

use crate::{Color, Location, EDGE_LENGTH};
use std::convert::Infallible;
use std::fmt::{self, Formatter, Write};
use std::ops::Index;

/// The contents of one board cell: a piece color, or None if it is empty.
pub type Cell = Option<Color>;

/// The save-layout character for an empty cell.
pub const EMPTY_CODE: char = ' ';

/// An 8×8 grid of cells in row-major order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the starting board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting layout: the four center cells, White on the
    /// main diagonal and Black on the anti-diagonal.
    pub fn new() -> Self {
        let mut cells = [[None; EDGE_LENGTH]; EDGE_LENGTH];
        cells[3][3] = Some(Color::White);
        cells[4][4] = Some(Color::White);
        cells[3][4] = Some(Color::Black);
        cells[4][3] = Some(Color::Black);
        Self { cells }
    }

    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[None; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// Read a cell. Returns None for an empty cell and for coordinates off the board.
    #[inline]
    pub fn get(&self, row: isize, col: isize) -> Cell {
        Location::checked(row, col).and_then(|loc| self[loc])
    }

    /// Write `color` into a cell, replacing whatever was there.
    /// Panics if the coordinates are off the board.
    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        let loc = Location::from_coords(row, col)
            .unwrap_or_else(|| panic!("cell ({}, {}) is off the board", row, col));
        self.place(loc, color);
    }

    /// Write `color` into the cell at `loc`.
    #[inline]
    pub fn place(&mut self, loc: Location, color: Color) {
        self.cells[loc.row()][loc.col()] = Some(color);
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        Location::all().map(move |loc| (loc, self[loc]))
    }

    /// Count the cells held by `color`.
    pub fn count(&self, color: Color) -> usize {
        self.cells().filter(|&(_, cell)| cell == Some(color)).count()
    }

    /// Count the cells with no piece.
    pub fn count_empty(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_none()).count()
    }

    /// Encode the board in the save layout, without a trailing newline.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Decode a board from the save layout.
    ///
    /// Never fails: each line is truncated or padded with empty cells to eight
    /// columns, lines past the eighth are dropped and missing lines are empty.
    /// Characters other than the two color codes read as empty cells.
    pub fn deserialize(text: &str) -> Self {
        let mut board = Self::empty();

        for (row, line) in text.split('\n').take(EDGE_LENGTH).enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            for (col, code) in line.chars().take(EDGE_LENGTH).enumerate() {
                if let Ok(color) = Color::from_code(code) {
                    board.set(row, col, color);
                }
            }
        }

        board
    }

    /// A human-readable grid labelled with column letters and row numbers.
    pub fn pretty(&self) -> impl fmt::Display + '_ {
        Pretty(self)
    }
}

impl Index<Location> for Board {
    type Output = Cell;

    #[inline]
    fn index(&self, loc: Location) -> &Cell {
        &self.cells[loc.row()][loc.col()]
    }
}

fn cell_code(cell: Cell) -> char {
    cell.map_or(EMPTY_CODE, Color::code)
}

/// Write the save layout.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for &cell in cells {
                write!(f, "{}", cell_code(cell))?;
            }
        }
        Ok(())
    }
}

/// Parse the save layout. See [`Board::deserialize`].
impl std::str::FromStr for Board {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::deserialize(s))
    }
}

struct Pretty<'a>(&'a Board);

/// Column letters across the top, then one line per row led by its number.
impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(' ')?;
        for (loc, _) in self.0.cells().take(EDGE_LENGTH) {
            write!(f, " {}", loc.column_label())?;
        }

        for (loc, cell) in self.0.cells() {
            if loc.col() == 0 {
                write!(f, "\n{}", loc.row_label())?;
            }
            let glyph = match cell {
                None => '.',
                Some(color) => color.code(),
            };
            write!(f, " {}", glyph)?;
        }
        Ok(())
    }
}
