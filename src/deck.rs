//! Deck with a draw pile and a discard pile.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::EmptyDeckError;

/// Remaining-card threshold at or below which [`Deck::deal`] replenishes the
/// draw pile from the discard pile before drawing.
///
/// One suit's worth of cards, so the deck cannot run out mid-round even after
/// a worst-case hand.
pub const LOW_WATER_MARK: usize = 13;

/// A single 52-card deck with a discard pile.
///
/// The top of the deck is the end of the draw pile. Cards move from the draw
/// pile into hands on [`deal`](Self::deal), and back onto the discard pile on
/// round reset via [`discard`](Self::discard). Every card is in exactly one
/// of the draw pile, the discard pile, or a hand at all times.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards not yet dealt. The last element is the top of the deck.
    cards: Vec<Card>,
    /// Cards used in previous rounds, awaiting reshuffle.
    discard: Vec<Card>,
    /// Random number generator driving every shuffle.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates the canonical 52-card deck, shuffled with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(&mut rng);

        Self {
            cards,
            discard: Vec::new(),
            rng,
        }
    }

    /// Creates a deck that deals exactly `draws`, in order, with an empty
    /// discard pile.
    ///
    /// The draw pile stores cards top-last, so the slice is reversed on the
    /// way in. Useful for deterministic harnesses.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();

        Self {
            cards,
            discard: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Shuffles the discard pile and slides it underneath the draw pile.
    ///
    /// Cards still waiting to be drawn keep their order and are dealt first;
    /// the replenished cards are dealt after them. Leaves the discard pile
    /// empty.
    pub fn shuffle(&mut self) {
        self.discard.shuffle(&mut self.rng);

        let waiting = core::mem::take(&mut self.cards);
        self.cards = core::mem::take(&mut self.discard);
        self.cards.extend(waiting);
    }

    /// Removes and returns the top card of the deck.
    ///
    /// If the draw pile is at or below [`LOW_WATER_MARK`], the discard pile
    /// is shuffled back in first.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the draw pile is empty even after the
    /// replenishment attempt. This cannot happen under normal 52-card play;
    /// seeing it means a card was lost instead of moved to the discard pile.
    pub fn deal(&mut self) -> Result<Card, EmptyDeckError> {
        if self.cards.len() <= LOW_WATER_MARK {
            self.shuffle();
        }

        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Moves `cards` onto the discard pile.
    pub fn discard(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discard.len()
    }
}
