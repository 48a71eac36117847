//! The two piece colors and their textual forms.

use derive_more::{Display, Error};

/// One of the two players' piece colors.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Color {
    #[display(fmt = "black")]
    Black,
    #[display(fmt = "white")]
    White,
}

/// A save-layout character which is not a color code.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "board cell colour must be one of 'W' or 'B', got {:?}", _0)]
pub struct InvalidColor(#[error(not(source))] pub char);

/// A color argument which is not one of the accepted spellings.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "expected one of: w, b, white, black")]
pub struct ParseColorError;

impl Color {
    /// Both colors, Black first.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// The single-letter code used in the save layout.
    #[inline]
    pub fn code(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }

    /// Read a save-layout color code.
    pub fn from_code(code: char) -> Result<Self, InvalidColor> {
        match code {
            'B' => Ok(Color::Black),
            'W' => Ok(Color::White),
            other => Err(InvalidColor(other)),
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Parse a player argument: "w", "b", "white" or "black", in any case.
impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn color_codes() {
        assert_eq!(Color::Black.code(), 'B');
        assert_eq!(Color::White.code(), 'W');
        assert_eq!(Color::from_code('B'), Ok(Color::Black));
        assert_eq!(Color::from_code('W'), Ok(Color::White));
    }

    #[test]
    fn color_from_bad_code() {
        assert_eq!(Color::from_code('w'), Err(InvalidColor('w')));
        assert_eq!(Color::from_code(' '), Err(InvalidColor(' ')));
        assert_eq!(Color::from_code('X'), Err(InvalidColor('X')));
    }

    #[test]
    fn color_from_str_success() {
        for s in &["w", "W", "white", "White", "WHITE"] {
            assert_eq!(Color::from_str(s), Ok(Color::White));
        }
        for s in &["b", "B", "black", "bLaCk"] {
            assert_eq!(Color::from_str(s), Ok(Color::Black));
        }
    }

    #[test]
    fn color_from_str_fail() {
        assert_eq!(Color::from_str(""), Err(ParseColorError));
        assert_eq!(Color::from_str("red"), Err(ParseColorError));
        assert_eq!(Color::from_str("wh"), Err(ParseColorError));
        assert_eq!(Color::from_str("blacks"), Err(ParseColorError));
    }

    #[test]
    fn color_not() {
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(!Color::White, Color::Black);
    }
}
