//! A simplified single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that plays one player against a dealer
//! with fixed house rules: the dealer draws to 17, hand totals are plain sums
//! (an ace always counts 11), and a two-card 21 is an ordinary 21 rather than
//! an automatic win. Cards cycle through a single 52-card [`Deck`] with a
//! discard pile that is shuffled back in once the draw pile runs low.
//!
//! Rendering frontends drive a round through the [`Controls`] trait and read
//! the table back as a [`Snapshot`].
//!
//! # Example
//!
//! ```
//! use vingt_et_un::{Game, GameStatus};
//!
//! let mut game = Game::new(42);
//! game.reset()?;
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.player_hand().len(), 2);
//! # Ok::<(), vingt_et_un::EmptyDeckError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{Deck, LOW_WATER_MARK};
pub use error::EmptyDeckError;
pub use game::{Controls, Game, GameStatus};
pub use hand::Hand;
pub use snapshot::{HandView, Snapshot};
