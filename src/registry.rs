//! Registry of independent games addressed by opaque ids.
//!
//! Each game sits behind its own lock, so operations on one game are
//! serialized while different games proceed independently.

use alloc::vec::Vec;
use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use log::info;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::RegistryError;
use crate::game::{CardGame, FiveCardGame};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundResult;
use crate::sync::{Mutex, Shared, shared};

/// Opaque game identifier.
///
/// Displayed and parsed as 16 lowercase hex digits.
///
/// ```
/// use pokrs::GameId;
///
/// let id: GameId = "00000000000000ff".parse().unwrap();
/// assert_eq!(id.to_string(), "00000000000000ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GameId(u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for GameId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s, 16).map(Self)
    }
}

/// A collection of running games.
///
/// ```
/// use pokrs::{GameOptions, GameRegistry};
///
/// let registry: GameRegistry = GameRegistry::new(GameOptions::default(), 7);
/// let id = registry.create();
/// let players = registry.deal(id, &["alice", "bob"]).unwrap();
/// assert_eq!(players.len(), 2);
///
/// let result = registry.evaluate(id).unwrap();
/// assert!(result.winner_count() >= 1);
/// ```
pub struct GameRegistry<G = FiveCardGame> {
    /// Options for every game created by this registry.
    options: GameOptions,
    /// Running games.
    games: Mutex<HashMap<GameId, Shared<G>>>,
    /// Source of game ids and game seeds.
    rng: Mutex<ChaCha8Rng>,
}

impl<G: CardGame> GameRegistry<G> {
    /// Creates an empty registry with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            games: Mutex::new(HashMap::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates a new game with no players and returns its id.
    pub fn create(&self) -> GameId {
        let mut rng = self.rng.lock();
        let mut games = self.games.lock();

        let id = loop {
            let id = GameId(rng.next_u64());
            if !games.contains_key(&id) {
                break id;
            }
        };

        let game = G::with_seed(self.options, rng.next_u64());
        games.insert(id, shared(game));
        drop(games);
        drop(rng);

        info!("Created game {id}");
        id
    }

    /// Removes a game. Returns whether it existed.
    pub fn remove(&self, id: GameId) -> bool {
        let removed = self.games.lock().remove(&id).is_some();
        if removed {
            info!("Removed game {id}");
        }
        removed
    }

    /// Returns whether a game is registered under `id`.
    pub fn contains(&self, id: GameId) -> bool {
        self.games.lock().contains_key(&id)
    }

    /// Returns the number of running games.
    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    /// Returns whether no games are running.
    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }

    /// Runs `f` with exclusive access to a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game does not exist.
    pub fn with_game<R>(
        &self,
        id: GameId,
        f: impl FnOnce(&mut G) -> R,
    ) -> Result<R, RegistryError> {
        let shared = self
            .games
            .lock()
            .get(&id)
            .cloned()
            .ok_or(RegistryError::GameNotFound(id))?;
        let mut game = shared.lock();
        Ok(f(&mut *game))
    }

    /// Returns snapshots of a game's seated players.
    ///
    /// # Errors
    ///
    /// Returns an error if the game does not exist.
    pub fn players(&self, id: GameId) -> Result<Vec<Player>, RegistryError> {
        self.with_game(id, |game| game.players().to_vec())
    }

    /// Seats a player in a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game does not exist or refuses the player.
    pub fn add_player(&self, id: GameId, name: &str) -> Result<(), RegistryError> {
        Ok(self.with_game(id, |game| game.add_player(name))??)
    }

    /// Removes a player from a game, returning it if it was seated.
    ///
    /// When the last player leaves and
    /// [`drop_empty_games`](GameOptions::drop_empty_games) is set, the game
    /// itself is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the game does not exist.
    pub fn remove_player(&self, id: GameId, name: &str) -> Result<Option<Player>, RegistryError> {
        // Hold the registry lock so no one can join between the removal and
        // the empty check.
        let mut games = self.games.lock();
        let game = games.get(&id).ok_or(RegistryError::GameNotFound(id))?;

        let mut guard = game.lock();
        let removed = guard.remove_player(name);
        let empty = guard.players().is_empty();
        drop(guard);

        if removed.is_some() && empty && self.options.drop_empty_games {
            games.remove(&id);
            info!("Removed empty game {id}");
        }

        Ok(removed)
    }

    /// Deals a round, first seating any of `names` not already seated.
    ///
    /// Returns the dealt players in seating order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game does not exist, a new player cannot be
    /// seated, or no players are seated.
    pub fn deal(&self, id: GameId, names: &[&str]) -> Result<Vec<Player>, RegistryError> {
        Ok(self.with_game(id, |game| {
            for name in names {
                if !game.players().iter().any(|p| p.name() == *name) {
                    game.add_player(name)?;
                }
            }
            game.deal().map(<[Player]>::to_vec)
        })??)
    }

    /// Replaces a player's hand with caller supplied cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game does not exist or the player is not
    /// seated.
    pub fn submit_hand(&self, id: GameId, name: &str, hand: Hand) -> Result<(), RegistryError> {
        Ok(self.with_game(id, |game| game.submit_hand(name, hand))??)
    }

    /// Validates every hand and determines the winners.
    ///
    /// # Errors
    ///
    /// Returns an error if the game does not exist or has no players.
    pub fn evaluate(&self, id: GameId) -> Result<RoundResult, RegistryError> {
        Ok(self.with_game(id, |game| {
            game.validate_hands();
            game.determine_winners()
        })??)
    }

    /// Starts a new round in a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game does not exist.
    pub fn reset(&self, id: GameId) -> Result<(), RegistryError> {
        self.with_game(id, |game| game.reset())
    }
}
