//! Poker hand evaluation.
//!
//! [`evaluate`] classifies a set of cards into a [`HandCategory`] and a
//! score that breaks ties between hands of the same category. Scores from
//! different categories are not comparable; [`HandValue`] orders by
//! category first so that comparison never crosses categories.
//!
//! The evaluator does not look for duplicate or undealt cards, that is the
//! game's job during validation.

use core::fmt;

use crate::card::{Card, Rank};

/// Weight applied to the dominant rank group. One more than the highest
/// rank value.
const WEIGHT: u32 = 14;

/// Fixed score of the ace-low straight, scored as a five-high.
const WHEEL_SCORE: u32 = 15;

/// Poker hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// No other category applies.
    HighCard = 1,
    /// Two cards of one rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
    /// An ace-high straight flush.
    RoyalFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// The evaluated strength of a hand.
///
/// Ordering compares the category first and the score second, so equal
/// values are a true tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandValue {
    /// The hand category.
    pub category: HandCategory,
    /// Tie-break score within the category.
    pub score: u32,
}

impl HandValue {
    const fn new(category: HandCategory, score: u32) -> Self {
        Self { category, score }
    }
}

/// Evaluates five or more cards.
///
/// With more than five cards the highest straight is used and the rank sum
/// covers every card.
///
/// ```
/// use pokrs::{Hand, HandCategory, eval};
///
/// let hand: Hand = "2d 5d 7d Jd Kd".parse().unwrap();
/// let value = eval::evaluate(hand.cards());
/// assert_eq!(value.category, HandCategory::Flush);
/// assert_eq!(value.score, 38);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let sum: u32 = cards.iter().map(|c| u32::from(c.rank.value())).sum();
    let straight = straight_high(cards);
    let flush = is_flush(cards);

    // Only the plain straight gets the fixed wheel score.
    match (straight, flush) {
        (Some(Rank::Ace), true) => return HandValue::new(HandCategory::RoyalFlush, sum),
        (Some(_), true) => return HandValue::new(HandCategory::StraightFlush, sum),
        _ => {}
    }

    let groups = RankGroups::new(cards);

    if let Some(quad) = groups.highest(|n| n >= 4) {
        return HandValue::new(HandCategory::FourOfAKind, sum + quad * 4 * WEIGHT);
    }

    if let Some(trip) = groups.highest(|n| n == 3) {
        // A second set of trips also fills the house.
        if let Some(pair) = groups.highest_except(trip, |n| n >= 2) {
            let score = sum + trip * 3 * WEIGHT * WEIGHT + pair * 2 * WEIGHT;
            return HandValue::new(HandCategory::FullHouse, score);
        }
    }

    if flush {
        return HandValue::new(HandCategory::Flush, sum);
    }

    if let Some(high) = straight {
        let score = if high == Rank::Five { WHEEL_SCORE } else { sum };
        return HandValue::new(HandCategory::Straight, score);
    }

    if let Some(trip) = groups.highest(|n| n == 3) {
        return HandValue::new(HandCategory::ThreeOfAKind, sum + trip * 3 * WEIGHT);
    }

    if let Some(pair) = groups.highest(|n| n == 2) {
        if groups.count(|n| n == 2) >= 2 {
            // Both cards of the top pair carry the weight.
            let score = sum + 2 * (pair * 2 * WEIGHT);
            return HandValue::new(HandCategory::TwoPair, score);
        }
        return HandValue::new(HandCategory::OnePair, sum + pair * 2 * WEIGHT);
    }

    let high = groups.highest(|n| n > 0).unwrap_or(0);
    HandValue::new(HandCategory::HighCard, sum + high * WEIGHT)
}

/// Returns whether at least five cards share a suit.
fn is_flush(cards: &[Card]) -> bool {
    let mut counts = [0u8; 4];
    for card in cards {
        counts[card.suit as usize] += 1;
    }
    counts.iter().any(|&n| n >= 5)
}

/// Returns the high card of the best straight, if any.
///
/// Bit `v` of the mask is set when a card of rank value `v` is present; the
/// ace also sets bit 1 so the wheel shows up as an ordinary run.
fn straight_high(cards: &[Card]) -> Option<Rank> {
    let mut mask: u16 = 0;
    for card in cards {
        let value = card.rank.value();
        mask |= 1 << value;
        if card.rank == Rank::Ace {
            mask |= 1 << 1;
        }
    }

    (5..=14u8)
        .rev()
        .find(|&high| (mask >> (high - 4)) & 0b1_1111 == 0b1_1111)
        .and_then(Rank::from_value)
}

/// Card counts per rank value.
struct RankGroups([u8; 15]);

impl RankGroups {
    fn new(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank.value() as usize] += 1;
        }
        Self(counts)
    }

    /// Highest rank value whose count satisfies `pred`.
    fn highest(&self, pred: impl Fn(u8) -> bool) -> Option<u32> {
        (2..=14u32).rev().find(|&v| pred(self.0[v as usize]))
    }

    fn highest_except(&self, skip: u32, pred: impl Fn(u8) -> bool) -> Option<u32> {
        (2..=14u32)
            .rev()
            .find(|&v| v != skip && pred(self.0[v as usize]))
    }

    fn count(&self, pred: impl Fn(u8) -> bool) -> usize {
        self.0.iter().filter(|&&n| pred(n)).count()
    }
}
