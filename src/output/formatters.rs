//! Plain-text formatting helpers for terminal output

use crate::core::{Axis, Move, Position};
use crate::game::{GameState, Seat};

/// Width of one rendered square
pub const CELL_WIDTH: usize = 3;

const ROW_LABEL_WIDTH: usize = 3;

/// Column letters over a board of `size` columns, aligned with rendered rows
#[must_use]
pub fn column_header(size: usize) -> String {
    let mut header = " ".repeat(ROW_LABEL_WIDTH);
    for column in 0..size {
        let letter = Position::new(1, column as i32).column_letter().unwrap_or('?');
        header.push_str(&format!(" {letter} "));
    }
    header
}

/// Right-aligned row number followed by a space
#[must_use]
pub fn row_label(row: usize) -> String {
    format!("{row:>width$} ", width = ROW_LABEL_WIDTH - 1)
}

/// Short human description of a move
#[must_use]
pub fn describe_move(mv: &Move) -> String {
    match mv {
        Move::Pass => "passed".to_string(),
        Move::Place(p) => {
            let direction = match p.axis() {
                Axis::Horizontal => "across",
                Axis::Vertical => "down",
            };
            format!("played {} {direction} from {}", p.word(), p.anchor())
        }
    }
}

/// Final outcome line
#[must_use]
pub fn describe_state(state: GameState, first: &str, second: &str) -> String {
    match state {
        GameState::InProgress => "The game is still in progress.".to_string(),
        GameState::Won(Seat::First) => format!("{first} wins!"),
        GameState::Won(Seat::Second) => format!("{second} wins!"),
        GameState::Draw => "It's a draw!".to_string(),
    }
}

/// `name` padded to `width`, then the score
#[must_use]
pub fn score_line(name: &str, score: i32, width: usize) -> String {
    format!("{:<width$} {score:>4}", format!("{name} score:"))
}
