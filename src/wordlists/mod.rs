//! Game resources: word lists and board layouts
//!
//! The dictionary the computer player searches against, loaded from a
//! newline-delimited file, and board layouts parsed from text files or taken
//! from the layout embedded at build time.

mod board_file;
mod dictionary;
mod embedded;
pub mod loader;

pub use board_file::{BoardError, load_board, parse_board};
pub use dictionary::Dictionary;
pub use embedded::{DEFAULT_BOARD, DEFAULT_BOARD_LINES, default_board};
pub use loader::{load_from_file, load_or_empty};
