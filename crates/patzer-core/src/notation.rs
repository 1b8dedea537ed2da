//! Setup notation parsing and serialization for [`Board`].
//!
//! The notation is a two-field subset of FEN: the piece placement grid and
//! the side to move. Castling, en passant, and move counters do not exist
//! in this game model, so the remaining FEN fields are omitted.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::NotationError;
use crate::piece::Piece;
use crate::position::Position;

/// The setup string for the standard starting position.
pub const STARTING_NOTATION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Board, NotationError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(NotationError::WrongFieldCount {
                found: fields.len(),
            });
        }

        // Parse piece placement. Placement rows run top to bottom, which is
        // exactly board row order (row 0 = Black's back rank).
        let rows: Vec<&str> = fields[0].split('/').collect();
        if rows.len() != 8 {
            return Err(NotationError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();

        for (row, row_str) in rows.iter().enumerate() {
            let mut col: u8 = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(NotationError::InvalidPieceChar { character: c });
                    }
                    col += digit as u8;
                    if col > 8 {
                        return Err(NotationError::BadRowLength {
                            row,
                            length: col as usize,
                        });
                    }
                } else {
                    let piece = Piece::from_symbol(c)
                        .ok_or(NotationError::InvalidPieceChar { character: c })?;

                    if col >= 8 {
                        return Err(NotationError::BadRowLength {
                            row,
                            length: col as usize + 1,
                        });
                    }

                    board.place(Position::new(row as u8, col), piece);
                    col += 1;
                }
            }

            if col != 8 {
                return Err(NotationError::BadRowLength {
                    row,
                    length: col as usize,
                });
            }
        }

        // Parse side to move
        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(NotationError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };
        board.set_current_player(side_to_move);

        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Piece placement
        for row in 0u8..8 {
            let mut empty_count = 0u8;

            for col in 0u8..8 {
                match self.piece_on(Position::new(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => {
                        empty_count += 1;
                    }
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if row < 7 {
                write!(f, "/")?;
            }
        }

        // Side to move
        write!(f, " {}", self.current_player())
    }
}
