//! Candidate move generation for each piece kind.
//!
//! Generators apply movement and occupancy rules only; they know nothing
//! about turn order or check. Check probing must see raw attacks (a pinned
//! piece still gives check), so king safety is layered on top by the
//! arbiter, never baked in here.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS, gen_slider};

/// Return every destination the occupant of `from` may move to under its
/// movement rules. An empty square yields no moves.
pub fn valid_moves(board: &Board, from: Position) -> Vec<Position> {
    let piece = match board.piece_on(from) {
        Some(piece) => piece,
        None => return Vec::new(),
    };

    let mut moves = Vec::new();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, from, piece.color(), &mut moves),
        PieceKind::Rook => gen_slider(board, from, piece.color(), &ROOK_DIRS, &mut moves),
        PieceKind::Knight => gen_knight(board, from, piece.color(), &mut moves),
        PieceKind::Bishop => gen_slider(board, from, piece.color(), &BISHOP_DIRS, &mut moves),
        PieceKind::Queen => gen_slider(board, from, piece.color(), &QUEEN_DIRS, &mut moves),
        PieceKind::King => gen_king(board, from, piece.color(), &mut moves),
    }
    moves
}

/// Return `true` if moving the occupant of `from` to `to` follows the
/// occupant's movement rules.
///
/// Defined as membership in [`valid_moves`], so the two views of legality
/// can never disagree.
pub fn is_move_valid(board: &Board, from: Position, to: Position) -> bool {
    valid_moves(board, from).contains(&to)
}
