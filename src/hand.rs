//! Player hand representation.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::ParseCardError;
use crate::eval::{self, HandValue};

/// A player's hand.
///
/// The hand places no limit on its size; whether it is a legal five-card
/// hand is decided by the game during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds this card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Evaluates the hand's category and score.
    #[must_use]
    pub fn value(&self) -> HandValue {
        eval::evaluate(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Parses whitespace separated cards.
///
/// ```
/// use pokrs::Hand;
///
/// let hand: Hand = "Th Jh Qh Kh Ah".parse().unwrap();
/// assert_eq!(hand.len(), 5);
/// ```
impl FromStr for Hand {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect()
    }
}
