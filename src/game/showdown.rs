use alloc::vec::Vec;

use log::info;

use crate::error::GameError;
use crate::player::Player;
use crate::result::RoundResult;

use super::{FiveCardGame, GameState};

impl FiveCardGame {
    /// Evaluates the valid hands and flags the winners.
    ///
    /// Only players whose hand passed the last
    /// [`validate_hands`](Self::validate_hands) contend. Every contender with
    /// the best hand value wins, so ties produce several winners. Results
    /// from an earlier showdown are cleared first.
    ///
    /// The returned players list the winners first, then everyone else in
    /// seating order. If no hand is valid there are no winners.
    ///
    /// # Errors
    ///
    /// Returns an error if no players are seated.
    pub fn determine_winners(&mut self) -> Result<RoundResult, GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }

        for player in &mut self.players {
            player.clear_result();
            if player.has_valid_hand() {
                let value = player.hand().value();
                player.set_value(value);
            }
        }

        let winning_value = self.players.iter().filter_map(Player::value).max();
        self.state = GameState::WinnersDetermined;

        let Some(best) = winning_value else {
            info!("No valid hands, no winners");
            return Ok(RoundResult {
                players: self.players.clone(),
                winning_value: None,
            });
        };

        for player in &mut self.players {
            if player.value() == Some(best) {
                player.set_winner();
            }
        }

        // Winners share one value, so seating order is also value order.
        let (mut players, rest): (Vec<Player>, Vec<Player>) =
            self.players.iter().cloned().partition(Player::is_winner);
        players.extend(rest);

        info!(
            "{} winner(s) with {} (score {})",
            players.iter().filter(|p| p.is_winner()).count(),
            best.category,
            best.score
        );

        Ok(RoundResult {
            players,
            winning_value: Some(best),
        })
    }
}
