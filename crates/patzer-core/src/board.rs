//! The chess board: an 8x8 grid of piece cells and the player to move.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Piece kinds on the back rank, from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete game state.
///
/// The board is `Copy`: move arbitration and checkmate probing apply moves
/// to copies and commit by overwriting the original, so a rejected move
/// never leaves a half-applied grid behind.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// One cell per square, row-major by [`Position::index()`].
    squares: [Option<Piece>; Position::COUNT],
    /// Which player moves next.
    current_player: Color,
}

impl Board {
    /// Return an empty board with White to move.
    pub fn empty() -> Board {
        Board {
            squares: [None; Position::COUNT],
            current_player: Color::White,
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();

        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.place(Position::new(0, col), Piece::new(kind, Color::Black));
            board.place(Position::new(7, col), Piece::new(kind, Color::White));
        }
        for col in 0..8 {
            board.place(Position::new(1, col), Piece::BLACK_PAWN);
            board.place(Position::new(6, col), Piece::WHITE_PAWN);
        }

        board
    }

    /// Put a piece on the given position, replacing any previous occupant.
    #[inline]
    pub fn place(&mut self, pos: Position, piece: Piece) {
        self.squares[pos.index()] = Some(piece);
    }

    /// Return the piece on the given position, if any.
    #[inline]
    pub fn piece_on(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()]
    }

    /// Return the color of the piece on the given position, if any.
    #[inline]
    pub fn color_on(&self, pos: Position) -> Option<Color> {
        self.squares[pos.index()].map(Piece::color)
    }

    /// Return `true` if the given position is occupied.
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.squares[pos.index()].is_some()
    }

    /// Return the position of the king for the given side, scanning the
    /// board in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the board has no king for the given color (invalid board state).
    pub fn king_position(&self, color: Color) -> Position {
        Position::all()
            .find(|&pos| self.piece_on(pos) == Some(Piece::new(PieceKind::King, color)))
            .expect("board must have a king for each side")
    }

    /// Return the player to move.
    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Set the player to move.
    #[inline]
    pub(crate) fn set_current_player(&mut self, color: Color) {
        self.current_player = color;
    }

    /// Move the occupant of `from` to `to`, replacing any capture.
    ///
    /// No legality checks; callers validate first.
    #[inline]
    pub(crate) fn move_piece(&mut self, from: Position, to: Position) {
        self.squares[to.index()] = self.squares[from.index()].take();
    }

    /// Validate the structural integrity of the board.
    ///
    /// Pawns resting on a back rank are legal here: without promotion a pawn
    /// that reaches the last row simply stops, so the state is reachable.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            let king_count = Position::all()
                .filter(|&pos| self.piece_on(pos) == Some(king))
                .count() as u32;
            if king_count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count: king_count,
                });
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = match board.piece_on(Position::new(row, col)) {
                    Some(piece) => piece.symbol(),
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
