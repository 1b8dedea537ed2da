//! Knight move generation.

use crate::board::Board;
use crate::color::Color;
use crate::position::Position;

/// The eight L-shaped (row, column) jumps.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generate knight moves. Knights jump over occupancy; only the destination
/// matters.
pub(super) fn gen_knight(board: &Board, from: Position, color: Color, moves: &mut Vec<Position>) {
    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(dr, dc)
            && board.color_on(to) != Some(color)
        {
            moves.push(to);
        }
    }
}
