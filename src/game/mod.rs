//! Round controller and state management.

use crate::deck::Deck;
use crate::error::EmptyDeckError;
use crate::hand::Hand;
use crate::snapshot::{HandView, Snapshot};

mod controls;
pub mod state;

pub use controls::Controls;
pub use state::GameStatus;

/// The dealer stands at or above this total and always draws below it.
const DEALER_STAND: u8 = 17;

/// Totals above this are a bust.
const BUST: u8 = 21;

/// Cards dealt to each participant at the start of a round.
const OPENING_CARDS: usize = 2;

/// A simplified blackjack round controller.
///
/// The controller owns one [`Deck`], the player's and dealer's [`Hand`]s, the
/// round status, and the session win counters. Frontends issue
/// [`reset`](Self::reset), [`player_hit`](Self::player_hit), and
/// [`player_stand`](Self::player_stand), then read the table back through the
/// query surface. Hit and stand on a decided round are silent no-ops.
///
/// # Example
///
/// ```
/// use vingt_et_un::{Game, GameStatus};
///
/// let mut game = Game::new(7);
/// game.reset()?;
/// game.player_stand()?;
/// assert_ne!(game.status(), GameStatus::InProgress);
/// # Ok::<(), vingt_et_un::EmptyDeckError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// The deck shared by both participants.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Status of the current round.
    status: GameStatus,
    /// Rounds the player has won this session.
    player_wins: u32,
    /// Rounds the dealer has won this session.
    dealer_wins: u32,
}

impl Game {
    /// Creates a controller over a freshly shuffled deck.
    ///
    /// Both hands start empty; call [`reset`](Self::reset) to deal the
    /// opening cards, or use [`start`](Self::start) to do both in one step.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_deck(Deck::new(seed))
    }

    /// Creates a controller over a pre-built deck.
    ///
    /// Combined with [`Deck::stacked`] this gives fully deterministic rounds.
    #[must_use]
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            status: GameStatus::InProgress,
            player_wins: 0,
            dealer_wins: 0,
        }
    }

    /// Creates a controller and deals the opening hands.
    ///
    /// # Errors
    ///
    /// Propagates [`EmptyDeckError`] from the opening deal.
    pub fn start(seed: u64) -> Result<Self, EmptyDeckError> {
        let mut game = Self::new(seed);
        game.reset()?;
        Ok(game)
    }

    /// Starts a new round.
    ///
    /// Moves both hands' cards to the deck's discard pile, clears the hands,
    /// sets the status back to [`GameStatus::InProgress`], and deals two
    /// cards to the player followed by two to the dealer. Callable from any
    /// state. A two-card 21 is not detected here; it plays out as an ordinary
    /// 21 under the simplified rules.
    ///
    /// # Errors
    ///
    /// Propagates [`EmptyDeckError`] if the deck cannot produce four cards.
    pub fn reset(&mut self) -> Result<(), EmptyDeckError> {
        self.deck.discard(self.player.cards().iter().copied());
        self.deck.discard(self.dealer.cards().iter().copied());
        self.player.reset();
        self.dealer.reset();

        self.status = GameStatus::InProgress;

        for _ in 0..OPENING_CARDS {
            let card = self.deck.deal()?;
            self.player.add(card);
        }
        for _ in 0..OPENING_CARDS {
            let card = self.deck.deal()?;
            self.dealer.add(card);
        }

        Ok(())
    }

    /// Deals one card to the player.
    ///
    /// Silent no-op when the round is already decided. If the new total goes
    /// over 21 the player busts and the dealer wins immediately, without
    /// playing out its own hand.
    ///
    /// # Errors
    ///
    /// Propagates [`EmptyDeckError`]. The round is left unresolved; the error
    /// is fatal to this attempt, not a normal-flow condition.
    pub fn player_hit(&mut self) -> Result<(), EmptyDeckError> {
        if !self.status.is_in_progress() {
            return Ok(());
        }

        let card = self.deck.deal()?;
        self.player.add(card);

        if self.player.total() > BUST {
            self.status = GameStatus::DealerWins;
            self.dealer_wins += 1;
        }

        Ok(())
    }

    /// Ends the player's turn and plays out the dealer.
    ///
    /// Silent no-op when the round is already decided. The dealer draws one
    /// card at a time until its total reaches 17, then the round resolves: a
    /// dealer bust or a lower dealer total is a player win, a higher dealer
    /// total is a dealer win, and equal totals are a tie.
    ///
    /// # Errors
    ///
    /// Propagates [`EmptyDeckError`] from the dealer's draws. The round is
    /// left unresolved and the error is fatal to this attempt.
    pub fn player_stand(&mut self) -> Result<(), EmptyDeckError> {
        if !self.status.is_in_progress() {
            return Ok(());
        }

        // Totals never decrease, so this terminates within a few draws.
        while self.dealer.total() < DEALER_STAND {
            let card = self.deck.deal()?;
            self.dealer.add(card);
        }

        let dealer = self.dealer.total();
        let player = self.player.total();

        if dealer > BUST || player > dealer {
            self.status = GameStatus::PlayerWins;
            self.player_wins += 1;
        } else if player < dealer {
            self.status = GameStatus::DealerWins;
            self.dealer_wins += 1;
        } else {
            self.status = GameStatus::Tie;
        }

        Ok(())
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the status of the current round.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns how many rounds the player has won this session.
    #[must_use]
    pub const fn player_wins(&self) -> u32 {
        self.player_wins
    }

    /// Returns how many rounds the dealer has won this session.
    #[must_use]
    pub const fn dealer_wins(&self) -> u32 {
        self.dealer_wins
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Captures the full table view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: HandView {
                cards: self.player.cards().to_vec(),
                total: self.player.total(),
            },
            dealer: HandView {
                cards: self.dealer.cards().to_vec(),
                total: self.dealer.total(),
            },
            status: self.status,
            player_wins: self.player_wins,
            dealer_wins: self.dealer_wins,
        }
    }
}
