//! Command implementations

pub mod autoplay;
pub mod check_board;
mod config;
mod console;
pub mod play;
pub mod suggest;

pub use autoplay::{AutoplaySummary, autoplay, run_autoplay};
pub use check_board::{BoardReport, check_board};
pub use config::{BoardSource, DEFAULT_WORDLIST, GameConfig};
pub use console::ConsoleHuman;
pub use play::run_play;
pub use suggest::{RackParseError, parse_rack, suggest};
