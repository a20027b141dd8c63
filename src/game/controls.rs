//! Frontend-facing capability trait.

use crate::error::EmptyDeckError;
use crate::snapshot::Snapshot;

use super::Game;

/// The command and query surface a rendering frontend drives.
///
/// Implemented by [`Game`]. Frontends — graphical, terminal, or a test
/// harness — depend on this trait rather than on the controller type, which
/// keeps the core decoupled from any particular toolkit. Commands are
/// synchronous and their effects are observable only through
/// [`snapshot`](Self::snapshot) afterwards.
pub trait Controls {
    /// Starts a new round, returning prior cards to the discard pile and
    /// dealing two cards each.
    ///
    /// # Errors
    ///
    /// Propagates [`EmptyDeckError`] if the deck cannot produce four cards.
    fn reset(&mut self) -> Result<(), EmptyDeckError>;

    /// Deals one card to the player; a bust ends the round in the dealer's
    /// favor. No-op once the round is decided.
    ///
    /// # Errors
    ///
    /// Propagates [`EmptyDeckError`] from the draw.
    fn player_hit(&mut self) -> Result<(), EmptyDeckError>;

    /// Plays out the dealer to 17 and resolves the round. No-op once the
    /// round is decided.
    ///
    /// # Errors
    ///
    /// Propagates [`EmptyDeckError`] from the dealer's draws.
    fn player_stand(&mut self) -> Result<(), EmptyDeckError>;

    /// Returns the current table view.
    fn snapshot(&self) -> Snapshot;
}

impl Controls for Game {
    fn reset(&mut self) -> Result<(), EmptyDeckError> {
        Self::reset(self)
    }

    fn player_hit(&mut self) -> Result<(), EmptyDeckError> {
        Self::player_hit(self)
    }

    fn player_stand(&mut self) -> Result<(), EmptyDeckError> {
        Self::player_stand(self)
    }

    fn snapshot(&self) -> Snapshot {
        Self::snapshot(self)
    }
}
