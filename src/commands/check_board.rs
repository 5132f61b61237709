//! Board file validation

use crate::core::{Board, Position, Premium, Square};
use crate::wordlists::{BoardError, load_board};
use std::path::Path;

/// Summary of a loaded board layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardReport {
    pub size: usize,
    pub center: Position,
    pub letter_premiums: usize,
    pub word_premiums: usize,
    /// Premium squares with a value below one
    pub penalty_squares: usize,
}

impl BoardReport {
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let premiums = || board.rows().flatten().map(Square::premium);
        Self {
            size: board.size(),
            center: board.center(),
            letter_premiums: premiums().filter(|p| matches!(p, Premium::Letter(_))).count(),
            word_premiums: premiums().filter(|p| matches!(p, Premium::Word(_))).count(),
            penalty_squares: premiums()
                .filter(|p| !matches!(p, Premium::None) && p.value() < 1)
                .count(),
        }
    }
}

/// Load a board file and summarize it
///
/// # Errors
/// Whatever prevented the board from loading.
pub fn check_board<P: AsRef<Path>>(path: P) -> Result<BoardReport, BoardError> {
    load_board(path).map(|board| BoardReport::from_board(&board))
}
