//! SkraBBKle
//!
//! A Scrabble-like tile-placement game on configurable boards with negative
//! premium squares, played against a computer opponent that searches rack
//! permutations exhaustively in a fixed priority order.
//!
//! # Quick Start
//!
//! ```rust
//! use skrabbkle::core::{Board, Rack, Tile};
//! use skrabbkle::solver::ComputerPlayer;
//! use skrabbkle::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["CAT", "AT"]);
//! let board = Board::new(15).unwrap();
//! let rack = Rack::from_tiles("CATS".chars().map(|c| Tile::letter(c, 1)));
//!
//! let mv = ComputerPlayer::new(&dictionary).find_move(&board, &rack);
//! println!("Computer plays {mv}");
//! ```

// Core domain types
pub mod core;

// Move scoring
pub mod scoring;

// Automated move search
pub mod solver;

// Turn orchestration
pub mod game;

// Word lists and board layouts
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
