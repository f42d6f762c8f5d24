//! Cards, suits, and ranks.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'h' => Some(Self::Hearts),
            'd' => Some(Self::Diamonds),
            'c' => Some(Self::Clubs),
            's' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// Card rank, valued 2 (Two) through 14 (Ace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace (always high, 14).
    Ace,
}

impl Rank {
    /// All ranks from Two to Ace.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the numeric value of the rank (2..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given numeric value.
    ///
    /// Returns `None` for values outside 2..=14.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value < 2 || value > 14 {
            return None;
        }
        Some(Self::ALL[(value - 2) as usize])
    }

    const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '2'..='9' => Self::from_value(c as u8 - b'0'),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        };
        f.write_str(name)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Parses a card from two-character notation, rank then suit.
///
/// ```
/// use pokrs::{Card, Rank, Suit};
///
/// let card: Card = "Td".parse().unwrap();
/// assert_eq!(card, Card::new(Suit::Diamonds, Rank::Ten));
/// ```
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length);
        };

        let rank = Rank::from_char(r).ok_or(ParseCardError::Rank(r))?;
        let suit = Suit::from_char(su).ok_or(ParseCardError::Suit(su))?;
        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
