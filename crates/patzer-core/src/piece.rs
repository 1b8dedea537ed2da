//! Colored chess pieces.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece.
///
/// A piece has no idea where it stands; the board cell holding it is the
/// single source of truth for its position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// All 12 pieces, White's six followed by Black's six.
    pub const ALL: [Piece; 12] = [
        Self::WHITE_PAWN,
        Self::WHITE_ROOK,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
        Self::BLACK_PAWN,
        Self::BLACK_ROOK,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Parse a setup-notation letter into a piece.
    ///
    /// Uppercase letters produce White pieces; lowercase letters produce Black pieces.
    /// Returns `None` for characters that are not valid piece letters.
    #[inline]
    pub fn from_symbol(c: char) -> Option<Piece> {
        let kind = PieceKind::from_symbol(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return the piece's setup-notation letter.
    ///
    /// Uppercase for White pieces, lowercase for Black pieces.
    #[inline]
    pub fn symbol(self) -> char {
        let base = self.kind.symbol();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind.symbol().to_ascii_uppercase();
        write!(f, "{}{}", color_prefix, kind_char)
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn new_accessors() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), kind, "kind mismatch for {color:?} {kind:?}");
                assert_eq!(piece.color(), color, "color mismatch for {color:?} {kind:?}");
            }
        }
    }

    #[test]
    fn symbol_roundtrip() {
        for piece in Piece::ALL {
            let c = piece.symbol();
            assert_eq!(
                Piece::from_symbol(c),
                Some(piece),
                "roundtrip failed for {piece:?} (char '{c}')"
            );
        }
    }

    #[test]
    fn from_symbol_case_sensitivity() {
        assert_eq!(Piece::from_symbol('P'), Some(Piece::WHITE_PAWN));
        assert_eq!(Piece::from_symbol('K'), Some(Piece::WHITE_KING));
        assert_eq!(Piece::from_symbol('p'), Some(Piece::BLACK_PAWN));
        assert_eq!(Piece::from_symbol('k'), Some(Piece::BLACK_KING));
        assert_eq!(Piece::from_symbol('Q'), Some(Piece::WHITE_QUEEN));
        assert_eq!(Piece::from_symbol('n'), Some(Piece::BLACK_KNIGHT));

        assert_eq!(Piece::from_symbol('x'), None);
        assert_eq!(Piece::from_symbol('1'), None);
        assert_eq!(Piece::from_symbol(' '), None);
        assert_eq!(Piece::from_symbol('Z'), None);
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", Piece::WHITE_PAWN), "P");
        assert_eq!(format!("{}", Piece::WHITE_KING), "K");
        assert_eq!(format!("{}", Piece::BLACK_PAWN), "p");
        assert_eq!(format!("{}", Piece::BLACK_KING), "k");
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Piece::WHITE_PAWN), "WP");
        assert_eq!(format!("{:?}", Piece::WHITE_QUEEN), "WQ");
        assert_eq!(format!("{:?}", Piece::BLACK_KNIGHT), "BN");
        assert_eq!(format!("{:?}", Piece::BLACK_KING), "BK");
    }

    #[test]
    fn all_covers_every_piece() {
        assert_eq!(Piece::ALL.len(), 12);
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                assert!(Piece::ALL.contains(&Piece::new(kind, color)));
            }
        }
    }
}
