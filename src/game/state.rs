//! Round status types.

use core::fmt;

/// Outcome state of the current round.
///
/// The three decided states are terminal until the next
/// [`reset`](crate::Game::reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// The round is ongoing and accepts hit/stand.
    #[default]
    InProgress,
    /// The player won the round.
    PlayerWins,
    /// The dealer won the round.
    DealerWins,
    /// The round ended level; neither counter moves.
    Tie,
}

impl GameStatus {
    /// Returns whether the round is still accepting player commands.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::PlayerWins => "player wins",
            Self::DealerWins => "dealer wins",
            Self::Tie => "tie",
        };
        f.write_str(text)
    }
}
