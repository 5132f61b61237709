//! Per-seat player record

use crate::core::{Rack, TileBag};

/// Name, score and rack of one seat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: i32,
    pub rack: Rack,
    pub passed_last_turn: bool,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            rack: Rack::new(),
            passed_last_turn: false,
        }
    }

    /// Top the rack up from `bag`, returning how many tiles were drawn
    pub fn fill_rack(&mut self, bag: &mut TileBag) -> usize {
        self.rack.refill(bag)
    }

    /// Subtract the value of the tiles still on the rack
    ///
    /// Returns the penalty applied.
    pub fn apply_rack_penalty(&mut self) -> i32 {
        let penalty = self.rack.total_value();
        self.score -= penalty;
        penalty
    }
}
