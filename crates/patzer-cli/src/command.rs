//! Player command parsing.

use patzer_core::Position;

use crate::error::CommandError;

/// A parsed line of player input.
#[derive(Debug)]
pub enum Command {
    /// `e2e4` or `e2 e4` -- attempt a move.
    Move {
        /// Square the piece moves from.
        from: Position,
        /// Square the piece moves to.
        to: Position,
    },
    /// `moves e2` -- list the candidate moves from a square.
    Moves(Position),
    /// `board` -- reprint the current position.
    Board,
    /// `help` -- show the command summary.
    Help,
    /// `quit` (or `exit`) -- end the session.
    Quit,
}

/// Parse a single line of player input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(CommandError::UnknownCommand {
            input: line.to_string(),
        });
    }

    match tokens[0] {
        "board" => Ok(Command::Board),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "moves" => {
            let square = tokens.get(1).ok_or(CommandError::MissingSquare)?;
            Ok(Command::Moves(parse_square(square)?))
        }
        _ => parse_move(&tokens),
    }
}

/// Parse a move given compactly as `e2e4` or as two tokens `e2 e4`.
fn parse_move(tokens: &[&str]) -> Result<Command, CommandError> {
    // split_at needs a char boundary; squares are plain ASCII
    if tokens.len() == 1 && tokens[0].len() == 4 && tokens[0].is_ascii() {
        let (from, to) = tokens[0].split_at(2);
        return Ok(Command::Move {
            from: parse_square(from)?,
            to: parse_square(to)?,
        });
    }
    if tokens.len() == 2 {
        return Ok(Command::Move {
            from: parse_square(tokens[0])?,
            to: parse_square(tokens[1])?,
        });
    }
    Err(CommandError::UnknownCommand {
        input: tokens.join(" "),
    })
}

/// Parse one algebraic square such as `e2`.
fn parse_square(square: &str) -> Result<Position, CommandError> {
    Position::from_algebraic(square).ok_or_else(|| CommandError::InvalidSquare {
        square: square.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_move_compact() {
        match parse_command("e2e4").unwrap() {
            Command::Move { from, to } => {
                assert_eq!(from, Position::E2);
                assert_eq!(to, Position::E4);
            }
            _ => panic!("expected Move"),
        }
    }

    #[test]
    fn parse_move_two_tokens() {
        match parse_command("g8 f6").unwrap() {
            Command::Move { from, to } => {
                assert_eq!(from, Position::G8);
                assert_eq!(to, Position::F6);
            }
            _ => panic!("expected Move"),
        }
    }

    #[test]
    fn parse_move_ignores_extra_whitespace() {
        match parse_command("  e2   e4  ").unwrap() {
            Command::Move { from, to } => {
                assert_eq!(from, Position::E2);
                assert_eq!(to, Position::E4);
            }
            _ => panic!("expected Move"),
        }
    }

    #[test]
    fn parse_board() {
        assert!(matches!(parse_command("board").unwrap(), Command::Board));
    }

    #[test]
    fn parse_help() {
        assert!(matches!(parse_command("help").unwrap(), Command::Help));
    }

    #[test]
    fn parse_quit() {
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_exit_as_quit() {
        assert!(matches!(parse_command("exit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_moves_square() {
        match parse_command("moves e2").unwrap() {
            Command::Moves(from) => assert_eq!(from, Position::E2),
            _ => panic!("expected Moves"),
        }
    }

    #[test]
    fn parse_moves_missing_square() {
        let result = parse_command("moves");
        assert!(matches!(result, Err(CommandError::MissingSquare)));
    }

    #[test]
    fn parse_moves_bad_square() {
        let result = parse_command("moves e9");
        assert!(matches!(
            result,
            Err(CommandError::InvalidSquare { square }) if square == "e9"
        ));
    }

    #[test]
    fn parse_move_off_board_rank() {
        let result = parse_command("e2e9");
        assert!(matches!(
            result,
            Err(CommandError::InvalidSquare { square }) if square == "e9"
        ));
    }

    #[test]
    fn parse_move_off_board_file() {
        let result = parse_command("i2 i4");
        assert!(result.is_err());
    }

    #[test]
    fn parse_unknown_command() {
        let result = parse_command("castle kingside please");
        assert!(matches!(
            result,
            Err(CommandError::UnknownCommand { .. })
        ));
    }

    #[test]
    fn parse_lone_square_is_not_a_move() {
        let result = parse_command("e2");
        assert!(matches!(
            result,
            Err(CommandError::UnknownCommand { .. })
        ));
    }

    #[test]
    fn parse_empty_line() {
        assert!(parse_command("").is_err());
    }

    #[test]
    fn parse_non_ascii_does_not_panic() {
        assert!(parse_command("é2e4").is_err());
    }
}
