//! Session input errors.

/// Errors from parsing player input or reading the terminal.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The input is neither a move nor a known command.
    #[error("unrecognized command: {input}")]
    UnknownCommand {
        /// The offending input line.
        input: String,
    },

    /// A square was not valid algebraic notation.
    #[error("invalid square: {square} (expected a1..h8)")]
    InvalidSquare {
        /// The square string that failed to parse.
        square: String,
    },

    /// `moves` was given without a square to list moves for.
    #[error("moves needs a square, e.g. `moves e2`")]
    MissingSquare,

    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
