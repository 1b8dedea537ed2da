//! Sliding piece move generation: bishops, rooks, and queens.

use crate::board::Board;
use crate::color::Color;
use crate::position::Position;

/// Orthogonal ray directions.
pub(super) const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions.
pub(super) const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight ray directions.
pub(super) const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Walk each ray from `from`, pushing empty squares until the first occupant.
/// An enemy occupant is included as a capture; an own occupant stops the ray
/// one short.
pub(super) fn gen_slider(
    board: &Board,
    from: Position,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Position>,
) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(next) = cur.offset(dr, dc) {
            match board.color_on(next) {
                None => {
                    moves.push(next);
                    cur = next;
                }
                Some(occupant) => {
                    if occupant != color {
                        moves.push(next);
                    }
                    break;
                }
            }
        }
    }
}
