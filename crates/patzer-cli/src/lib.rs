//! Terminal front end for patzer.

pub mod command;
pub mod error;
pub mod session;

pub use command::Command;
pub use error::CommandError;
pub use session::Session;
