//! Game state types.

/// Round state.
///
/// Every state can return to [`GameState::Idle`] through a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// Fresh shuffled deck, nothing dealt this round.
    Idle,
    /// Hands have been dealt.
    Dealt,
    /// Hands have been validated.
    Validated,
    /// Winners have been determined.
    WinnersDetermined,
}
