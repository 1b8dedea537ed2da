//! Move arbitration: the only mutating entry point on [`Board`].

use tracing::debug;

use crate::board::Board;
use crate::color::Color;
use crate::movegen;
use crate::position::Position;

/// The result of a [`Board::try_move`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was illegal; the board is unchanged.
    Rejected,
    /// The move was played and the game goes on.
    Continuing,
    /// The move was played and the new current player is in check.
    Check,
    /// The move was played and checkmated the opponent; `winner` is the
    /// player who delivered it.
    Checkmate {
        /// The player who gave mate.
        winner: Color,
    },
}

impl MoveOutcome {
    /// Return `true` unless the move was rejected.
    #[inline]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, MoveOutcome::Rejected)
    }
}

impl Board {
    /// Arbitrate and, if legal, play the move from `from` to `to` for the
    /// current player.
    ///
    /// A move is rejected when the source square is empty, the piece on it
    /// belongs to the opponent, the destination violates the piece's
    /// movement rules, or playing it would leave the mover's own king in
    /// check. The return value does not distinguish rejection causes; they
    /// appear in debug-level logs.
    ///
    /// An accepted move is worked out on a board copy and committed by
    /// overwrite, so `self` is never left half-applied. The turn then
    /// passes, and the new current player is tested for check and checkmate.
    pub fn try_move(&mut self, from: Position, to: Position) -> MoveOutcome {
        let piece = match self.piece_on(from) {
            Some(piece) => piece,
            None => {
                debug!(%from, %to, "rejected: source square is empty");
                return MoveOutcome::Rejected;
            }
        };

        let mover = piece.color();
        if mover != self.current_player() {
            debug!(%from, %to, player = %self.current_player(), "rejected: opponent's piece");
            return MoveOutcome::Rejected;
        }

        if !movegen::is_move_valid(self, from, to) {
            debug!(%from, %to, "rejected: destination violates movement rules");
            return MoveOutcome::Rejected;
        }

        let mut next = *self;
        next.move_piece(from, to);
        if next.is_king_in_check(mover) {
            debug!(%from, %to, "rejected: own king would be in check");
            return MoveOutcome::Rejected;
        }

        next.set_current_player(!mover);
        *self = next;

        let defender = self.current_player();
        if self.is_king_in_check(defender) {
            if self.is_checkmate(defender) {
                debug!(%from, %to, winner = %mover, "checkmate");
                MoveOutcome::Checkmate { winner: mover }
            } else {
                debug!(%from, %to, "check");
                MoveOutcome::Check
            }
        } else {
            MoveOutcome::Continuing
        }
    }
}
