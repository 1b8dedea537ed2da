//! Interactive two-player session loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use patzer_core::{Board, MoveOutcome, Position, valid_moves};

use crate::command::{Command, parse_command};
use crate::error::CommandError;

/// An interactive two-player session.
///
/// Reads player input from stdin, arbitrates each move on the shared
/// [`Board`], and announces check and checkmate as they happen. The
/// session ends on checkmate, `quit`, or end of input.
pub struct Session {
    board: Board,
}

impl Session {
    /// Create a session starting from the standard position.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
        }
    }

    /// Create a session starting from a prepared board.
    pub fn with_board(board: Board) -> Self {
        Self { board }
    }

    /// Run the session loop, reading from stdin until the game ends,
    /// `quit` is received, or input closes.
    pub fn run(mut self) -> Result<(), CommandError> {
        self.handle_board();
        self.prompt()?;

        let stdin = io::stdin();
        let reader = stdin.lock();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                self.prompt()?;
                continue;
            }
            debug!(input = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Board) => self.handle_board(),
                Ok(Command::Help) => self.handle_help(),
                Ok(Command::Moves(from)) => self.handle_moves(from),
                Ok(Command::Move { from, to }) => {
                    if self.handle_move(from, to) {
                        break;
                    }
                }
                Ok(Command::Quit) => break,
                Err(e) => {
                    warn!(error = %e, "rejected input");
                    println!("{e}");
                }
            }
            self.prompt()?;
        }

        info!("patzer shutting down");
        Ok(())
    }

    /// Arbitrate one move attempt. Returns `true` when it ended the game.
    fn handle_move(&mut self, from: Position, to: Position) -> bool {
        match self.board.try_move(from, to) {
            MoveOutcome::Rejected => {
                println!("illegal move: {from}{to}");
                false
            }
            MoveOutcome::Continuing => {
                self.handle_board();
                false
            }
            MoveOutcome::Check => {
                self.handle_board();
                println!("{} is in check", self.board.current_player().name());
                false
            }
            MoveOutcome::Checkmate { winner } => {
                self.handle_board();
                println!("checkmate, {} wins", winner.name());
                info!(winner = %winner, "game over");
                true
            }
        }
    }

    fn handle_moves(&self, from: Position) {
        let targets = valid_moves(&self.board, from);
        if targets.is_empty() {
            println!("no moves from {from}");
            return;
        }
        let list: Vec<String> = targets.iter().map(|to| to.to_string()).collect();
        println!("{from}: {}", list.join(" "));
    }

    fn handle_board(&self) {
        println!("{}", self.board.pretty());
    }

    fn handle_help(&self) {
        println!("commands:");
        println!("  e2e4 (or e2 e4)   play a move");
        println!("  moves <square>    list candidate moves from a square");
        println!("  board             reprint the board");
        println!("  help              show this text");
        println!("  quit              end the session");
    }

    fn prompt(&self) -> Result<(), CommandError> {
        print!("{} to move> ", self.board.current_player().name());
        io::stdout().flush()?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use patzer_core::Position;

    use super::Session;

    #[test]
    fn rejected_move_does_not_end_the_game() {
        let mut session = Session::new();
        assert!(!session.handle_move(Position::E2, Position::E5));
    }

    #[test]
    fn quiet_moves_keep_the_game_going() {
        let mut session = Session::new();
        assert!(!session.handle_move(Position::E2, Position::E4));
        assert!(!session.handle_move(Position::E7, Position::E5));
    }

    #[test]
    fn checkmate_ends_the_game() {
        let mut session = Session::new();
        assert!(!session.handle_move(Position::E2, Position::E4));
        assert!(!session.handle_move(Position::F7, Position::F6));
        assert!(!session.handle_move(Position::D2, Position::D4));
        assert!(!session.handle_move(Position::G7, Position::G5));
        assert!(session.handle_move(Position::D1, Position::H5));
    }
}
