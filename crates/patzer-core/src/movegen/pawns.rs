//! Pawn move generation.

use crate::board::Board;
use crate::color::Color;
use crate::position::Position;

/// Generate pawn moves: single push, double push from the start row, and
/// diagonal captures. White pawns move toward row 0, Black toward row 7.
///
/// A pawn on its last row has nowhere left to go; without promotion it
/// simply stops generating moves.
pub(super) fn gen_pawn(board: &Board, from: Position, color: Color, moves: &mut Vec<Position>) {
    let (dir, start_row): (i8, u8) = match color {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };

    // Pushes never capture.
    if let Some(one) = from.offset(dir, 0)
        && !board.is_occupied(one)
    {
        moves.push(one);

        // Double push: only from the start row, and only through an empty square.
        if from.row() == start_row
            && let Some(two) = one.offset(dir, 0)
            && !board.is_occupied(two)
        {
            moves.push(two);
        }
    }

    // Diagonal steps only onto enemy occupants.
    for dc in [-1, 1] {
        if let Some(target) = from.offset(dir, dc)
            && board.color_on(target) == Some(color.flip())
        {
            moves.push(target);
        }
    }
}
