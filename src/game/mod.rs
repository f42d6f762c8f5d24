//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundResult;

mod deal;
mod showdown;
pub mod state;
mod validate;

pub use state::GameState;

/// The operations a table game offers to its callers.
///
/// The registry drives games only through this trait.
pub trait CardGame {
    /// Creates a game with a freshly shuffled deck.
    fn with_seed(options: GameOptions, seed: u64) -> Self
    where
        Self: Sized;

    /// Seats a player.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already seated.
    fn add_player(&mut self, name: &str) -> Result<(), GameError>;

    /// Removes a player, returning it if it was seated.
    fn remove_player(&mut self, name: &str) -> Option<Player>;

    /// Returns the seated players in seating order.
    fn players(&self) -> &[Player];

    /// Replaces a player's hand with caller supplied cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not seated.
    fn submit_hand(&mut self, name: &str, hand: Hand) -> Result<(), GameError>;

    /// Deals a new round of hands.
    ///
    /// # Errors
    ///
    /// Returns an error if no players are seated.
    fn deal(&mut self) -> Result<&[Player], GameError>;

    /// Starts a new round with a full reshuffled deck.
    fn reset(&mut self);

    /// Checks every hand against the cards actually dealt.
    fn validate_hands(&mut self);

    /// Ranks the valid hands and flags the winners.
    ///
    /// # Errors
    ///
    /// Returns an error if no players are seated.
    fn determine_winners(&mut self) -> Result<RoundResult, GameError>;
}

/// A five-card poker game.
///
/// The game owns the deck, the seated players, and the ledger of cards drawn
/// during the current round. Use [`GameOptions`] to configure the table.
#[derive(Debug, Clone)]
pub struct FiveCardGame {
    /// Game options.
    options: GameOptions,
    /// The deck.
    deck: Deck,
    /// Cards drawn from the deck this round.
    drawn: Vec<Card>,
    /// Seated players, in seating order.
    players: Vec<Player>,
    /// Current round state.
    state: GameState,
}

impl FiveCardGame {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use pokrs::{DECK_SIZE, FiveCardGame, GameOptions};
    ///
    /// let game = FiveCardGame::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut game = Self::with_deck(options, Deck::new(seed));
        game.reset();
        game
    }

    /// Creates a game that deals from `deck` as given, without shuffling.
    ///
    /// The next [`reset`](Self::reset) replaces the deck's contents with a
    /// full shuffled deck.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            options,
            deck,
            drawn: Vec::new(),
            players: Vec::new(),
            state: GameState::Idle,
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Seats a new player.
    ///
    /// # Errors
    ///
    /// Returns an error if a player with the same name is already seated.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), GameError> {
        let name = name.into();
        if self.players.iter().any(|p| p.name() == name) {
            return Err(GameError::DuplicatePlayer);
        }

        debug!("Player {name} joined");
        self.players.push(Player::new(name));
        Ok(())
    }

    /// Removes a player, returning it if it was seated.
    pub fn remove_player(&mut self, name: &str) -> Option<Player> {
        let index = self.players.iter().position(|p| p.name() == name)?;
        debug!("Player {name} left");
        Some(self.players.remove(index))
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the seated players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the seated player with this name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Replaces a player's hand with caller supplied cards.
    ///
    /// This is how hands come back from clients for evaluation. Nothing is
    /// checked here; the next [`validate_hands`](Self::validate_hands) decides
    /// whether the hand is legitimate.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not seated.
    pub fn submit_hand(&mut self, name: &str, hand: Hand) -> Result<(), GameError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.name() == name)
            .ok_or(GameError::PlayerNotFound)?;
        player.set_hand(hand);
        Ok(())
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the cards drawn from the deck this round, in draw order.
    #[must_use]
    pub fn drawn_cards(&self) -> &[Card] {
        &self.drawn
    }

    /// Starts a new round.
    ///
    /// Refills and reshuffles the deck and forgets the cards drawn so far.
    /// Seated players keep their hands, but validation and showdown results
    /// are cleared.
    pub fn reset(&mut self) {
        self.deck.reset();
        self.deck.shuffle();
        self.drawn.clear();
        for player in &mut self.players {
            player.clear_round();
        }
        self.state = GameState::Idle;
        debug!("Deck reset and shuffled");
    }
}

impl CardGame for FiveCardGame {
    fn with_seed(options: GameOptions, seed: u64) -> Self {
        Self::new(options, seed)
    }

    fn add_player(&mut self, name: &str) -> Result<(), GameError> {
        Self::add_player(self, name)
    }

    fn remove_player(&mut self, name: &str) -> Option<Player> {
        Self::remove_player(self, name)
    }

    fn players(&self) -> &[Player] {
        Self::players(self)
    }

    fn submit_hand(&mut self, name: &str, hand: Hand) -> Result<(), GameError> {
        Self::submit_hand(self, name, hand)
    }

    fn deal(&mut self) -> Result<&[Player], GameError> {
        Self::deal(self)
    }

    fn reset(&mut self) {
        Self::reset(self);
    }

    fn validate_hands(&mut self) {
        Self::validate_hands(self);
    }

    fn determine_winners(&mut self) -> Result<RoundResult, GameError> {
        Self::determine_winners(self)
    }
}
