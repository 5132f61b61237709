//! Embedded board layout
//!
//! The default layout compiled into the binary at build time.

use super::{BoardError, parse_board};
use crate::core::Board;

// Include generated layout from build script
include!(concat!(env!("OUT_DIR"), "/default_board.rs"));

/// The built-in 16x16 board
///
/// # Errors
/// Only if the embedded layout itself is malformed.
pub fn default_board() -> Result<Board, BoardError> {
    parse_board(&DEFAULT_BOARD.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Position, Premium};

    #[test]
    fn default_layout_is_well_formed() {
        assert_eq!(DEFAULT_BOARD_LINES, 17);
        let board = default_board().unwrap();
        assert_eq!(board.size(), 16);
        assert_eq!(board.center(), Position::new(8, 7));
    }

    #[test]
    fn default_layout_has_penalty_squares() {
        let board = default_board().unwrap();
        assert_eq!(
            board.square(Position::new(1, 1)).unwrap().premium(),
            Premium::Word(12)
        );
        assert_eq!(
            board.square(Position::new(8, 1)).unwrap().premium(),
            Premium::Word(-3)
        );
        assert_eq!(
            board.square(Position::new(8, 0)).unwrap().premium(),
            Premium::Letter(3)
        );
    }
}
