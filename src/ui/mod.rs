//! Console front end: the text board and the human-versus-machine turn loop.

mod board_text;
mod session;

pub use session::{Session, SessionOutcome};
