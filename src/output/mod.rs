//! Terminal output formatting
//!
//! Display utilities for the game and the commands.

pub mod display;
pub mod formatters;

pub use display::{
    computer_spinner, print_autoplay_summary, print_board_report, print_game_end,
    print_game_state, print_suggestion, print_turn, render_board,
};
