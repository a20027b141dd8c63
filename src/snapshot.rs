//! Read-back views consumed by rendering frontends.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameStatus;

/// One participant's visible hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Cards in deal order.
    pub cards: Vec<Card>,
    /// Plain-sum hand total.
    pub total: u8,
}

/// Everything a frontend needs to render the table after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The player's hand.
    pub player: HandView,
    /// The dealer's hand.
    pub dealer: HandView,
    /// Status of the current round.
    pub status: GameStatus,
    /// Rounds the player has won this session.
    pub player_wins: u32,
    /// Rounds the dealer has won this session.
    pub dealer_wins: u32,
}
