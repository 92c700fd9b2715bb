//! Prompter adapters.
//!
//! `LinePrompter` works over any reader/writer pair and is what piped or
//! scripted runs use. `TerminalPrompter` (feature `interactive`) gives line
//! editing when standard input is a terminal.

mod line;
#[cfg(feature = "interactive")]
mod terminal;

pub use line::LinePrompter;
#[cfg(feature = "interactive")]
pub use terminal::TerminalPrompter;
