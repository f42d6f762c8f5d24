//! A five-card poker dealing and hand adjudication engine with optional
//! `no_std` support.
//!
//! The crate provides a [`FiveCardGame`] type that deals five-card hands from
//! a single 52-card deck, validates that every hand was legitimately dealt,
//! and determines the winners with deterministic tie-breaking. Hands are
//! classified and scored by [`eval::evaluate`]. A [`GameRegistry`] keeps many
//! independent games addressed by [`GameId`].
//!
//! # Example
//!
//! ```
//! use pokrs::{FiveCardGame, GameOptions};
//!
//! let mut game = FiveCardGame::new(GameOptions::default(), 42);
//! game.add_player("alice").unwrap();
//! game.add_player("bob").unwrap();
//!
//! game.deal().unwrap();
//! game.validate_hands();
//! let result = game.determine_winners().unwrap();
//! assert!(result.winners().all(|p| p.has_valid_hand()));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod eval;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod registry;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DrawError, GameError, ParseCardError, RegistryError};
pub use eval::{HandCategory, HandValue};
pub use game::{CardGame, FiveCardGame, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use player::Player;
pub use registry::{GameId, GameRegistry};
pub use result::RoundResult;
