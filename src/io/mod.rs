// I/O module
// Interactive command session over stdin/stdout

pub mod command;
pub mod session;

pub use command::{parse_amount, Command};
pub use session::{Session, SessionEnd};
