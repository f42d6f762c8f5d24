use log::{debug, warn};

use crate::error::GameError;
use crate::player::Player;

use super::{FiveCardGame, GameState};

impl FiveCardGame {
    /// Deals a new hand to every seated player.
    ///
    /// Previous hands are discarded. Cards go out one at a time, round-robin,
    /// until every player holds [`hand_size`](crate::GameOptions::hand_size)
    /// cards. If the deck runs out first, dealing stops and the remaining
    /// players are left short. Every card dealt is recorded in the ledger.
    ///
    /// The deck is not refilled; call [`reset`](Self::reset) to start a round
    /// with a full deck.
    ///
    /// # Errors
    ///
    /// Returns an error if no players are seated.
    pub fn deal(&mut self) -> Result<&[Player], GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }

        for player in &mut self.players {
            player.hand_mut().clear();
            player.clear_round();
        }

        'rounds: for _ in 0..self.options.hand_size {
            for player in &mut self.players {
                let Some(card) = self.deck.draw_one() else {
                    warn!("Deck exhausted while dealing, hands are short");
                    break 'rounds;
                };
                self.drawn.push(card);
                player.hand_mut().add_card(card);
            }
        }

        self.state = GameState::Dealt;
        debug!(
            "Dealt {} players, {} cards left in the deck",
            self.players.len(),
            self.deck.len()
        );

        Ok(&self.players)
    }
}
