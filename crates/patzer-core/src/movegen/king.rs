//! King move generation.

use crate::board::Board;
use crate::color::Color;
use crate::position::Position;

/// The eight adjacent (row, column) steps.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate king steps to the eight neighboring squares.
///
/// Stepping next to the enemy king or onto an attacked square is allowed
/// here; the arbiter rejects those moves through its self-check test.
pub(super) fn gen_king(board: &Board, from: Position, color: Color, moves: &mut Vec<Position>) {
    for (dr, dc) in KING_OFFSETS {
        if let Some(to) = from.offset(dr, dc)
            && board.color_on(to) != Some(color)
        {
            moves.push(to);
        }
    }
}
