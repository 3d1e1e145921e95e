use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Squares per side of the board.
pub const BOARD_SIZE: u8 = 8;

/// Error when parsing algebraic square notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid square notation: '{0}'")]
pub struct ParseSquareError(String);

/// A square in player-facing coordinates.
///
/// `file` runs 0 (a) to 7 (h), `rank` runs 0 (White's home side) to 7
/// (Black's home side). White pawns start on rank 1, black pawns on rank 6.
/// Values are always in range; off-board arithmetic is expressed by
/// [`Position::offset`] returning `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    file: u8,
    rank: u8,
}

impl Position {
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < BOARD_SIZE && rank < BOARD_SIZE {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Storage coordinates of this square.
    ///
    /// The board stores row 0 at the top (Black's home side), so
    /// `row = 7 - rank` and `col = file`. Inverse of [`Position::from_storage`].
    #[inline]
    pub const fn to_storage(self) -> (usize, usize) {
        ((BOARD_SIZE - 1 - self.rank) as usize, self.file as usize)
    }

    /// Square at the given storage coordinates, or `None` outside the grid.
    pub const fn from_storage(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE as usize && col < BOARD_SIZE as usize {
            Some(Self {
                file: col as u8,
                rank: BOARD_SIZE - 1 - row as u8,
            })
        } else {
            None
        }
    }

    /// Square reached by moving `file_delta` files and `rank_delta` ranks,
    /// or `None` when the result falls off the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file as i8 + file_delta;
        let rank = self.rank as i8 + rank_delta;
        if (0..BOARD_SIZE as i8).contains(&file) && (0..BOARD_SIZE as i8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Iterate every square, rank 0 upward, file a to h.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE)
            .flat_map(|rank| (0..BOARD_SIZE).map(move |file| Self { file, rank }))
    }

    /// The file rendered as its letter, `a` through `h`.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.file) as char
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank + 1)
    }
}

impl FromStr for Position {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseSquareError(s.to_string()));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Self::new(file, rank).ok_or_else(|| ParseSquareError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("a1", 0, 0)]
    #[test_case("h8", 7, 7)]
    #[test_case("e4", 4, 3)]
    #[test_case("c7", 2, 6)]
    fn test_parse_valid_square(text: &str, file: u8, rank: u8) {
        let pos: Position = text.parse().expect("square should parse");
        assert_eq!(pos.file(), file);
        assert_eq!(pos.rank(), rank);
    }

    #[test_case(""; "empty")]
    #[test_case("e"; "too short")]
    #[test_case("e44"; "too long")]
    #[test_case("i4"; "file out of range")]
    #[test_case("e9"; "rank out of range")]
    #[test_case("E4"; "uppercase file")]
    #[test_case("♟x"; "non ascii")]
    fn test_parse_invalid_square(text: &str) {
        assert_eq!(
            text.parse::<Position>(),
            Err(ParseSquareError(text.to_string()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for pos in Position::all() {
            let text = pos.to_string();
            assert_eq!(text.parse::<Position>(), Ok(pos));
        }
    }

    #[test]
    fn test_storage_round_trip() {
        for pos in Position::all() {
            let (row, col) = pos.to_storage();
            assert_eq!(Position::from_storage(row, col), Some(pos));
        }
    }

    #[test]
    fn test_storage_orientation() {
        // White's home rank sits in the bottom storage row.
        let a1: Position = "a1".parse().unwrap();
        assert_eq!(a1.to_storage(), (7, 0));
        let h8: Position = "h8".parse().unwrap();
        assert_eq!(h8.to_storage(), (0, 7));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Position::new(8, 0), None);
        assert_eq!(Position::new(0, 8), None);
        assert!(Position::new(7, 7).is_some());
    }

    #[test_case(0, 1, Some("a2"))]
    #[test_case(-1, 0, None; "off left edge")]
    #[test_case(0, -1, None; "off bottom edge")]
    #[test_case(7, 7, Some("h8"))]
    fn test_offset(file_delta: i8, rank_delta: i8, expected: Option<&str>) {
        let a1: Position = "a1".parse().unwrap();
        let expected = expected.map(|s| s.parse().unwrap());
        assert_eq!(a1.offset(file_delta, rank_delta), expected);
    }

    #[test]
    fn test_from_storage_rejects_out_of_range() {
        assert_eq!(Position::from_storage(8, 0), None);
        assert_eq!(Position::from_storage(0, 8), None);
    }
}
