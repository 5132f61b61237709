//! Game configuration shared by the commands

use crate::core::{Board, TileBag};
use crate::solver::SearchLimits;
use crate::wordlists::{BoardError, Dictionary, default_board, load_board, load_or_empty};
use std::path::PathBuf;

/// Word list used when none is given
pub const DEFAULT_WORDLIST: &str = "data/wordlist.txt";

/// Where the board layout comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoardSource {
    /// The layout compiled into the binary
    #[default]
    Default,
    File(PathBuf),
}

impl BoardSource {
    /// `default` selects the built-in layout; anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case("default") {
            Self::Default
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Build the board
    ///
    /// # Errors
    /// When the layout file cannot be read or is malformed.
    pub fn load(&self) -> Result<Board, BoardError> {
        match self {
            Self::Default => default_board(),
            Self::File(path) => load_board(path),
        }
    }
}

/// Everything needed to set up a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub board: BoardSource,
    pub wordlist: PathBuf,
    /// Fixed seed for a reproducible bag; random when absent
    pub seed: Option<u64>,
    /// Show the computer's rack during play
    pub open: bool,
    pub limits: SearchLimits,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardSource::Default,
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            seed: None,
            open: false,
            limits: SearchLimits::default(),
        }
    }
}

impl GameConfig {
    /// A freshly shuffled bag
    #[must_use]
    pub fn new_bag(&self) -> TileBag {
        match self.seed {
            Some(seed) => TileBag::seeded(seed),
            None => TileBag::standard(&mut rand::rng()),
        }
    }

    /// The dictionary, or an empty one if the word list cannot be read
    #[must_use]
    pub fn load_dictionary(&self) -> Dictionary {
        load_or_empty(&self.wordlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_source_from_arg() {
        assert_eq!(BoardSource::from_arg("default"), BoardSource::Default);
        assert_eq!(BoardSource::from_arg("DEFAULT"), BoardSource::Default);
        assert_eq!(
            BoardSource::from_arg("boards/small.txt"),
            BoardSource::File(PathBuf::from("boards/small.txt"))
        );
    }

    #[test]
    fn default_source_loads_builtin_board() {
        let board = BoardSource::Default.load().unwrap();
        assert_eq!(board.size(), 16);
    }

    #[test]
    fn seeded_bags_repeat() {
        let config = GameConfig {
            seed: Some(42),
            ..GameConfig::default()
        };
        let mut a = config.new_bag();
        let mut b = config.new_bag();
        for _ in 0..99 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn missing_wordlist_gives_empty_dictionary() {
        let config = GameConfig {
            wordlist: PathBuf::from("/definitely/not/here/words.txt"),
            ..GameConfig::default()
        };
        assert!(config.load_dictionary().is_empty());
    }
}
