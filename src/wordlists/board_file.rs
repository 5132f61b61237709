//! Board layout files
//!
//! The first line holds the board size; each following line holds one row of
//! exactly `size` tokens with no separators: `.` for a plain square, `(v)`
//! for a letter premium and `{v}` for a word premium, where `v` is one or two
//! digits with an optional leading minus.

use crate::core::{Board, BoardSizeError, Premium, SIZE_RANGE};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Why a board layout was rejected
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("cannot read board file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("board file is empty")]
    Empty,

    #[error("board size {0:?} is not a number")]
    InvalidSize(String),

    #[error(transparent)]
    Size(#[from] BoardSizeError),

    #[error("malformed square in row {row} at column {column}")]
    MalformedSquare { row: usize, column: usize },

    #[error("row {row} has {found} squares, expected {expected}")]
    WrongTokenCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("board has {found} rows, expected {expected}")]
    WrongRowCount { expected: usize, found: usize },
}

/// Parse a board layout from text
///
/// Any malformed row, wrong square count or wrong row count rejects the whole
/// layout. A single trailing newline is allowed.
///
/// # Errors
/// Returns the first problem found, as a [`BoardError`].
///
/// # Examples
/// ```
/// use skrabbkle::wordlists::parse_board;
///
/// let row = "(2)..........{3}\n";
/// let text = format!("12\n{}", row.repeat(12));
/// let board = parse_board(&text).unwrap();
/// assert_eq!(board.size(), 12);
///
/// assert!(parse_board("10\n").is_err());
/// ```
pub fn parse_board(text: &str) -> Result<Board, BoardError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(BoardError::Empty)?.trim();
    if header.is_empty() {
        return Err(BoardError::Empty);
    }

    let size: usize = header
        .parse()
        .map_err(|_| BoardError::InvalidSize(header.to_string()))?;
    if !SIZE_RANGE.contains(&size) {
        return Err(BoardSizeError::OutOfRange(size).into());
    }

    let rows: Vec<&str> = lines.collect();
    if rows.len() != size {
        return Err(BoardError::WrongRowCount {
            expected: size,
            found: rows.len(),
        });
    }

    let premiums = rows
        .iter()
        .enumerate()
        .map(|(i, line)| parse_row(line.trim_end_matches('\r'), i + 1, size))
        .collect::<Result<Vec<_>, _>>()?;

    let board = Board::from_rows(premiums)?;
    debug!(size, center = %board.center(), "parsed board layout");
    Ok(board)
}

/// Read and parse a board layout file
///
/// # Errors
/// [`BoardError::Io`] when the file cannot be read, otherwise whatever
/// [`parse_board`] reports.
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board, BoardError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| BoardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_board(&text)
}

fn parse_row(line: &str, row: usize, size: usize) -> Result<Vec<Premium>, BoardError> {
    let mut premiums = Vec::with_capacity(size);
    let mut rest = line;

    while !rest.is_empty() {
        let column = premiums.len();
        let malformed = || BoardError::MalformedSquare { row, column };

        if let Some(tail) = rest.strip_prefix('.') {
            premiums.push(Premium::None);
            rest = tail;
            continue;
        }

        let (close, wrap): (char, fn(i32) -> Premium) = match rest.chars().next() {
            Some('(') => (')', Premium::Letter),
            Some('{') => ('}', Premium::Word),
            _ => return Err(malformed()),
        };
        let end = rest.find(close).ok_or_else(malformed)?;
        let value = parse_premium_value(&rest[1..end]).ok_or_else(malformed)?;
        premiums.push(wrap(value));
        rest = &rest[end + 1..];
    }

    if premiums.len() != size {
        return Err(BoardError::WrongTokenCount {
            row,
            expected: size,
            found: premiums.len(),
        });
    }
    Ok(premiums)
}

/// One or two digits with an optional leading minus
fn parse_premium_value(text: &str) -> Option<i32> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if !(1..=2).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
