//! Board positions as (row, column) coordinates.

use std::fmt;

/// A square on the board, addressed by row and column.
///
/// Row 0 is Black's back rank (rank 8 in algebraic notation) and row 7 is
/// White's back rank (rank 1); column 0 is file a. So `e2` is row 6, column 4.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Total number of positions.
    pub const COUNT: usize = 64;

    /// Create a position from a row and a column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or greater. Use [`Position::from_coords`]
    /// when the coordinates come from untrusted input.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Position {
        assert!(row < 8 && col < 8, "position coordinates must be in 0..8");
        Position { row, col }
    }

    /// Create a position from a row and a column, returning `None` if either
    /// is out of range.
    #[inline]
    pub const fn from_coords(row: u8, col: u8) -> Option<Position> {
        if row < 8 && col < 8 {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a position.
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        // Rank 8 is row 0, rank 1 is row 7.
        Some(Position {
            row: b'8' - rank_byte,
            col: file_byte - b'a',
        })
    }

    /// Return the row (0..7, top to bottom from Black's side).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Return the column (0..7, file a to file h).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the zero-based row-major index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Return the position shifted by the given row and column deltas, or
    /// `None` if the result falls off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over all 64 positions in row-major order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Position> {
        (0u8..64).map(|i| Position {
            row: i / 8,
            col: i % 8,
        })
    }

    // Named position constants
    pub const A1: Position = Position { row: 7, col: 0 };
    pub const B1: Position = Position { row: 7, col: 1 };
    pub const C1: Position = Position { row: 7, col: 2 };
    pub const D1: Position = Position { row: 7, col: 3 };
    pub const E1: Position = Position { row: 7, col: 4 };
    pub const F1: Position = Position { row: 7, col: 5 };
    pub const G1: Position = Position { row: 7, col: 6 };
    pub const H1: Position = Position { row: 7, col: 7 };
    pub const A2: Position = Position { row: 6, col: 0 };
    pub const B2: Position = Position { row: 6, col: 1 };
    pub const C2: Position = Position { row: 6, col: 2 };
    pub const D2: Position = Position { row: 6, col: 3 };
    pub const E2: Position = Position { row: 6, col: 4 };
    pub const F2: Position = Position { row: 6, col: 5 };
    pub const G2: Position = Position { row: 6, col: 6 };
    pub const H2: Position = Position { row: 6, col: 7 };
    pub const A3: Position = Position { row: 5, col: 0 };
    pub const B3: Position = Position { row: 5, col: 1 };
    pub const C3: Position = Position { row: 5, col: 2 };
    pub const D3: Position = Position { row: 5, col: 3 };
    pub const E3: Position = Position { row: 5, col: 4 };
    pub const F3: Position = Position { row: 5, col: 5 };
    pub const G3: Position = Position { row: 5, col: 6 };
    pub const H3: Position = Position { row: 5, col: 7 };
    pub const A4: Position = Position { row: 4, col: 0 };
    pub const B4: Position = Position { row: 4, col: 1 };
    pub const C4: Position = Position { row: 4, col: 2 };
    pub const D4: Position = Position { row: 4, col: 3 };
    pub const E4: Position = Position { row: 4, col: 4 };
    pub const F4: Position = Position { row: 4, col: 5 };
    pub const G4: Position = Position { row: 4, col: 6 };
    pub const H4: Position = Position { row: 4, col: 7 };
    pub const A5: Position = Position { row: 3, col: 0 };
    pub const B5: Position = Position { row: 3, col: 1 };
    pub const C5: Position = Position { row: 3, col: 2 };
    pub const D5: Position = Position { row: 3, col: 3 };
    pub const E5: Position = Position { row: 3, col: 4 };
    pub const F5: Position = Position { row: 3, col: 5 };
    pub const G5: Position = Position { row: 3, col: 6 };
    pub const H5: Position = Position { row: 3, col: 7 };
    pub const A6: Position = Position { row: 2, col: 0 };
    pub const B6: Position = Position { row: 2, col: 1 };
    pub const C6: Position = Position { row: 2, col: 2 };
    pub const D6: Position = Position { row: 2, col: 3 };
    pub const E6: Position = Position { row: 2, col: 4 };
    pub const F6: Position = Position { row: 2, col: 5 };
    pub const G6: Position = Position { row: 2, col: 6 };
    pub const H6: Position = Position { row: 2, col: 7 };
    pub const A7: Position = Position { row: 1, col: 0 };
    pub const B7: Position = Position { row: 1, col: 1 };
    pub const C7: Position = Position { row: 1, col: 2 };
    pub const D7: Position = Position { row: 1, col: 3 };
    pub const E7: Position = Position { row: 1, col: 4 };
    pub const F7: Position = Position { row: 1, col: 5 };
    pub const G7: Position = Position { row: 1, col: 6 };
    pub const H7: Position = Position { row: 1, col: 7 };
    pub const A8: Position = Position { row: 0, col: 0 };
    pub const B8: Position = Position { row: 0, col: 1 };
    pub const C8: Position = Position { row: 0, col: 2 };
    pub const D8: Position = Position { row: 0, col: 3 };
    pub const E8: Position = Position { row: 0, col: 4 };
    pub const F8: Position = Position { row: 0, col: 5 };
    pub const G8: Position = Position { row: 0, col: 6 };
    pub const H8: Position = Position { row: 0, col: 7 };
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self)
    }
}
