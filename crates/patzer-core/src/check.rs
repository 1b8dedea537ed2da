//! Check and checkmate detection.

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::movegen;
use crate::position::Position;

impl Board {
    /// Return `true` if the king of `color` is attacked by any opposing piece.
    ///
    /// Attack probing uses raw movement rules only: whether the attacking
    /// piece could legally play the capture is irrelevant, so a pinned piece
    /// still gives check.
    ///
    /// # Panics
    ///
    /// Panics if the board has no king for the given color (invalid board state).
    pub fn is_king_in_check(&self, color: Color) -> bool {
        let king_pos = self.king_position(color);
        Position::all().any(|from| {
            self.color_on(from) == Some(!color) && movegen::is_move_valid(self, from, king_pos)
        })
    }

    /// Return `true` if `color` is checkmated.
    ///
    /// A side that is not in check is never checkmated, so a stalemated side
    /// reports `false`. Otherwise every candidate move of every piece of
    /// `color` is played out on a board copy; checkmate means none of them
    /// leaves the king safe.
    pub fn is_checkmate(&self, color: Color) -> bool {
        if !self.is_king_in_check(color) {
            return false;
        }

        for from in Position::all() {
            if self.color_on(from) != Some(color) {
                continue;
            }
            for to in movegen::valid_moves(self, from) {
                let mut next = *self;
                next.move_piece(from, to);
                if !next.is_king_in_check(color) {
                    trace!(%from, %to, "check escape found");
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;

    #[test]
    fn starting_position_no_check() {
        let board = Board::starting_position();
        assert!(!board.is_king_in_check(Color::White));
        assert!(!board.is_king_in_check(Color::Black));
    }

    #[test]
    fn queen_checks_down_open_file() {
        let board: Board = "k3q3/8/8/8/8/8/8/4K3 w".parse().unwrap();
        assert!(board.is_king_in_check(Color::White));
    }

    #[test]
    fn blocked_file_is_no_check() {
        let board: Board = "k3q3/8/8/4p3/8/8/8/4K3 w".parse().unwrap();
        assert!(!board.is_king_in_check(Color::White));
    }

    #[test]
    fn knight_check_ignores_blockers() {
        // The knight jumps the pawn wall.
        let board: Board = "4k3/8/8/8/8/3n4/PPPP4/4K3 w".parse().unwrap();
        assert!(board.is_king_in_check(Color::White));
    }

    #[test]
    fn pawn_checks_diagonally_forward() {
        let board: Board = "4k3/8/8/8/8/8/3p4/4K3 w".parse().unwrap();
        assert!(board.is_king_in_check(Color::White));
        // A pawn ahead of the king attacks nothing behind it.
        let board: Board = "4k3/8/8/8/8/8/4p3/4K3 w".parse().unwrap();
        assert!(!board.is_king_in_check(Color::White));
    }

    #[test]
    fn pinned_piece_still_gives_check() {
        // The black rook on h5 is pinned against its own king by the rook on
        // h1, yet its attack along the fifth rank still counts.
        let board: Board = "7k/8/8/K6r/8/8/8/7R w".parse().unwrap();
        assert!(board.is_king_in_check(Color::White));
    }

    #[test]
    fn check_is_one_sided() {
        let board: Board = "k3q3/8/8/8/8/8/8/4K3 w".parse().unwrap();
        assert!(board.is_king_in_check(Color::White));
        assert!(!board.is_king_in_check(Color::Black));
    }

    #[test]
    fn cornered_king_protected_queen_is_mate() {
        // Queen on g7 gives check; Kxg7 fails because the king on g6 guards
        // it, and no black piece can help.
        let board: Board = "7k/6Q1/6K1/8/8/8/8/8 b".parse().unwrap();
        assert!(board.is_checkmate(Color::Black));
    }

    #[test]
    fn unprotected_queen_is_not_mate() {
        // Same check, but the queen hangs: Kxg7 escapes.
        let board: Board = "7k/6Q1/8/8/8/8/8/K7 b".parse().unwrap();
        assert!(board.is_king_in_check(Color::Black));
        assert!(!board.is_checkmate(Color::Black));
    }

    #[test]
    fn back_rank_mate() {
        let board: Board = "R5k1/5ppp/8/8/8/8/8/7K b".parse().unwrap();
        assert!(board.is_checkmate(Color::Black));
    }

    #[test]
    fn interposition_defeats_back_rank_mate() {
        // The rook on e4 can drop to e8 and block.
        let board: Board = "R5k1/5ppp/8/8/4r3/8/8/7K b".parse().unwrap();
        assert!(board.is_king_in_check(Color::Black));
        assert!(!board.is_checkmate(Color::Black));
    }

    #[test]
    fn capturing_the_checker_defeats_mate() {
        // The rook on g8 takes the queen.
        let board: Board = "6rk/6Q1/6K1/8/8/8/8/8 b".parse().unwrap();
        assert!(board.is_king_in_check(Color::Black));
        assert!(!board.is_checkmate(Color::Black));
    }

    #[test]
    fn smothered_mate() {
        // The king's own pieces seal every flight square and nothing can
        // capture the knight or block its jump.
        let board: Board = "6rk/5Npp/8/8/8/8/8/K7 b".parse().unwrap();
        assert!(board.is_checkmate(Color::Black));
    }

    #[test]
    fn stalemate_is_not_checkmate() {
        // Black has no legal move but is not in check; no mate is reported
        // and no draw claim is made.
        let board: Board = "k7/8/1Q6/8/8/8/8/4K3 b".parse().unwrap();
        assert!(!board.is_king_in_check(Color::Black));
        assert!(!board.is_checkmate(Color::Black));
    }

    #[test]
    fn checkmate_implies_check() {
        let positions = [
            "7k/6Q1/6K1/8/8/8/8/8 b",
            "R5k1/5ppp/8/8/8/8/8/7K b",
            "6rk/5Npp/8/8/8/8/8/K7 b",
        ];
        for setup in positions {
            let board: Board = setup.parse().unwrap();
            if board.is_checkmate(Color::Black) {
                assert!(
                    board.is_king_in_check(Color::Black),
                    "mate without check in {setup}"
                );
            }
        }
    }
}
