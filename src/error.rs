//! Error types for deck, game, and registry operations.

use thiserror::Error;

use crate::registry::GameId;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// More cards were requested than remain in the deck.
    #[error("cannot draw {requested} cards, only {remaining} remaining")]
    OutOfRange {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The roster is empty.
    #[error("no players are available in the game")]
    NoPlayers,
    /// A player with the same name is already seated.
    #[error("player already seated")]
    DuplicatePlayer,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors that can occur when addressing a game through the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No game is registered under this id.
    #[error("game {0} not found")]
    GameNotFound(GameId),
    /// The game rejected the operation.
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Card notation must be exactly two characters.
    #[error("card must be two characters, rank then suit")]
    Length,
    /// Unknown rank character.
    #[error("invalid rank '{0}'")]
    Rank(char),
    /// Unknown suit character.
    #[error("invalid suit '{0}'")]
    Suit(char),
}
