//! Core chess rules: board state, move arbitration, and check/checkmate
//! detection for a two-player game.

mod board;
mod check;
mod color;
mod error;
mod movegen;
mod notation;
mod piece;
mod piece_kind;
mod position;
mod try_move;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{BoardError, NotationError};
pub use movegen::{is_move_valid, valid_moves};
pub use notation::STARTING_NOTATION;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use try_move::MoveOutcome;
