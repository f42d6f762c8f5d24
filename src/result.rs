//! Round result types for showdown.

use alloc::vec::Vec;

use crate::eval::HandValue;
use crate::player::Player;

/// Result of winner determination.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// Every seated player: winners first, then the rest in seating order.
    pub players: Vec<Player>,
    /// The winning hand value, `None` when no hand was valid.
    pub winning_value: Option<HandValue>,
}

impl RoundResult {
    /// Iterates over the winners. More than one means a tie.
    pub fn winners(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_winner())
    }

    /// Returns the number of winners.
    #[must_use]
    pub fn winner_count(&self) -> usize {
        self.winners().count()
    }

    /// Returns whether the round ended in a tie.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winner_count() > 1
    }
}
