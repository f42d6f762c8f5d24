#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::{HashMap, HashSet};
use log::{debug, warn};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

use crate::card::Card;

use super::{FiveCardGame, GameState};

impl FiveCardGame {
    /// Validates every player's hand.
    ///
    /// A hand is valid when all of these hold:
    /// - it holds exactly [`hand_size`](crate::GameOptions::hand_size)
    ///   distinct cards,
    /// - every card was drawn from the deck this round,
    /// - no card appears twice across all hands, including twice in the same
    ///   hand.
    ///
    /// The outcome is recorded on each player, invalid hands are not an
    /// error. Showdown results from an earlier evaluation are cleared.
    pub fn validate_hands(&mut self) {
        let mut frequencies: HashMap<Card, usize> = HashMap::new();
        for card in self.players.iter().flat_map(|p| p.hand().cards()) {
            *frequencies.entry(*card).or_insert(0) += 1;
        }

        let drawn: HashSet<Card> = self.drawn.iter().copied().collect();

        for player in &mut self.players {
            let cards: HashSet<Card> = player.hand().cards().iter().copied().collect();

            let violation = if cards.len() != self.options.hand_size {
                Some("wrong number of distinct cards")
            } else if !cards.is_subset(&drawn) {
                Some("holds a card that was not dealt")
            } else if cards.iter().any(|c| frequencies.get(c) != Some(&1)) {
                Some("holds a card that appears more than once")
            } else {
                None
            };

            if let Some(reason) = violation {
                warn!("Invalid hand for {}: {reason}", player.name());
            }

            player.clear_result();
            player.set_valid(violation.is_none());
        }

        self.state = GameState::Validated;
        debug!("Validated {} hands", self.players.len());
    }
}
