//! Core domain types for SkraBBKle
//!
//! Tiles, racks, the board and moves. Everything here is pure state plus the
//! rules that guard it; no I/O.

mod bag;
mod board;
mod moves;
mod position;
mod rack;
mod square;
mod tile;

pub use bag::{DISTRIBUTION, TileBag, WILDCARD_COUNT, WILDCARD_VALUE, standard_tiles};
pub use board::{Board, BoardSizeError, SIZE_RANGE};
pub use moves::{IllegalMove, Move, MoveRequest, NotationError, Placement};
pub use position::{Axis, Position};
pub use rack::{RACK_SIZE, Rack};
pub use square::{Premium, Square};
pub use tile::{Tile, UNASSIGNED};
