//! Automated move search
//!
//! Candidate words are generated lazily from the rack and matched against the
//! dictionary and the board in a fixed, deterministic priority order.

pub mod candidates;
mod engine;

pub use engine::{ComputerPlayer, SearchLimits, SearchOutcome};
