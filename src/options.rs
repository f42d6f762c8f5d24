//! Game configuration options.

/// Configuration options for a five-card game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pokrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_drop_empty_games(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each player, and the exact number of distinct cards a
    /// valid hand must hold.
    pub hand_size: usize,
    /// Whether the registry drops a game once its last player leaves.
    pub drop_empty_games: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            drop_empty_games: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards per hand.
    ///
    /// # Example
    ///
    /// ```
    /// use pokrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether the registry drops games whose roster empties.
    ///
    /// # Example
    ///
    /// ```
    /// use pokrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_drop_empty_games(false);
    /// assert!(!options.drop_empty_games);
    /// ```
    #[must_use]
    pub const fn with_drop_empty_games(mut self, drop: bool) -> Self {
        self.drop_empty_games = drop;
        self
    }
}
