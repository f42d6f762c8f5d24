//! Seated players and their per-round results.

use alloc::string::String;
use core::hash::{Hash, Hasher};

use crate::eval::{HandCategory, HandValue};
use crate::hand::Hand;

/// A player at the table.
///
/// Players are identified by name: two players with the same name are the
/// same player. The game owns its players; the copies handed out by the game
/// are snapshots and changing them has no effect on the table.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    hand: Hand,
    value: Option<HandValue>,
    has_valid_hand: bool,
    winner: bool,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            value: None,
            has_valid_hand: false,
            winner: false,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the category of the hand, once winners have been determined.
    ///
    /// Always `None` for players whose hand failed validation.
    #[must_use]
    pub fn hand_rank(&self) -> Option<HandCategory> {
        self.value.map(|v| v.category)
    }

    /// Returns the evaluated hand value, once winners have been determined.
    #[must_use]
    pub const fn value(&self) -> Option<HandValue> {
        self.value
    }

    /// Returns whether the hand passed the last validation.
    #[must_use]
    pub const fn has_valid_hand(&self) -> bool {
        self.has_valid_hand
    }

    /// Returns whether the player won the last showdown.
    #[must_use]
    pub const fn is_winner(&self) -> bool {
        self.winner
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    pub(crate) const fn set_valid(&mut self, valid: bool) {
        self.has_valid_hand = valid;
    }

    pub(crate) const fn set_value(&mut self, value: HandValue) {
        self.value = Some(value);
    }

    pub(crate) const fn set_winner(&mut self) {
        self.winner = true;
    }

    /// Clears the showdown results, keeping the hand.
    pub(crate) const fn clear_result(&mut self) {
        self.value = None;
        self.winner = false;
    }

    /// Clears validation and showdown results, keeping the hand.
    pub(crate) const fn clear_round(&mut self) {
        self.clear_result();
        self.has_valid_hand = false;
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
