//! Error types for setup notation parsing and board validation.

use std::fmt;

/// Errors that occur when parsing a board setup string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The setup string does not have exactly 2 space-separated fields.
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 rows.
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row in the piece placement describes more or fewer than 8 squares.
    BadRowLength {
        /// Zero-based row index (0 = Black's back rank).
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// The parsed board fails structural validation.
    InvalidBoard {
        /// The underlying board validation error.
        source: BoardError,
    },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::WrongFieldCount { found } => {
                write!(f, "expected 2 setup fields, found {found}")
            }
            NotationError::WrongRowCount { found } => {
                write!(f, "expected 8 rows in piece placement, found {found}")
            }
            NotationError::BadRowLength { row, length } => {
                write!(f, "row {row} describes {length} squares, expected 8")
            }
            NotationError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            NotationError::InvalidColor { found } => {
                write!(f, "invalid side to move: \"{found}\"")
            }
            NotationError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for NotationError {
    fn from(source: BoardError) -> Self {
        NotationError::InvalidBoard { source }
    }
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, NotationError};

    #[test]
    fn notation_error_display() {
        let err = NotationError::WrongFieldCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 2 setup fields, found 4");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::InvalidKingCount {
            color: "White",
            count: 0,
        };
        assert_eq!(format!("{err}"), "expected 1 king for White, found 0");
    }

    #[test]
    fn notation_error_from_board_error() {
        let board_err = BoardError::InvalidKingCount {
            color: "Black",
            count: 2,
        };
        let notation_err: NotationError = board_err.into();
        assert!(matches!(notation_err, NotationError::InvalidBoard { .. }));
    }
}
