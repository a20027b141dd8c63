//! Hand representation shared by the player and the dealer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// An ordered collection of cards held by one participant.
///
/// The total is the plain sum of card values: an ace always counts 11 and is
/// never demoted to 1. This follows the simplified house rules the engine
/// implements.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Sums the values of the cards in hand.
    ///
    /// Recomputed on every call; nothing is cached.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |sum, card| sum.saturating_add(card.value()))
    }

    /// Clears the hand.
    ///
    /// The caller moves the cards to the deck's discard pile first; clearing
    /// without doing so loses them and breaks card conservation.
    pub fn reset(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
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
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
