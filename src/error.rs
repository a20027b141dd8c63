//! Error types for game operations.

use thiserror::Error;

/// The deck ran out of cards despite replenishment from the discard pile.
///
/// Under normal 52-card play the low-water replenishment makes this
/// unreachable; seeing it means a card was lost rather than moved to the
/// discard pile. Callers should treat it as fatal to the current round, not
/// as a normal-flow condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deck exhausted: draw and discard piles are both empty")]
pub struct EmptyDeckError;
