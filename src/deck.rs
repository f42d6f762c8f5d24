//! A single 52-card deck with seeded shuffling.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// An ordered deck of cards.
///
/// The top of the deck is the end of [`Deck::cards`]; draws take from there.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, top last.
    cards: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, unshuffled deck whose shuffles are driven by `seed`.
    ///
    /// ```
    /// use pokrs::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(7);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Creates a stacked deck that yields `draws` in order, first card first.
    ///
    /// Useful for replaying a known deal. A later [`reset`](Self::reset)
    /// restores the full 52 cards.
    ///
    /// ```
    /// use pokrs::{Card, Deck};
    ///
    /// let ace: Card = "As".parse().unwrap();
    /// let king: Card = "Ks".parse().unwrap();
    /// let mut deck = Deck::from_draws(&[ace, king], 0);
    /// assert_eq!(deck.draw_one(), Some(ace));
    /// ```
    #[must_use]
    pub fn from_draws(draws: &[Card], seed: u64) -> Self {
        Self {
            cards: draws.iter().rev().copied().collect(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Repopulates the deck with all 52 cards in canonical order.
    ///
    /// Suits go Hearts, Diamonds, Clubs, Spades; within a suit ranks go Two
    /// to Ace. The order does not depend on any earlier shuffle.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Draws `count` cards from the top of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::OutOfRange`] if fewer than `count` cards remain.
    /// The deck is left untouched in that case.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        let remaining = self.cards.len();
        if count > remaining {
            return Err(DrawError::OutOfRange {
                requested: count,
                remaining,
            });
        }

        Ok(self.cards.drain(remaining - count..).rev().collect())
    }

    /// Draws the top card, if any.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
