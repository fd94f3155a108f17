//! Success payloads returned by deck operations.

use alloc::vec::Vec;

use chrono::{DateTime, Utc};

use crate::card::Card;

/// Read-only snapshot of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct DeckInfo {
    /// When the deck was built.
    pub created_at: DateTime<Utc>,
    /// Number of cards not yet drawn.
    pub remaining: usize,
    /// Number of cards currently drawn.
    pub drawn_cards: usize,
}

/// Result of a shuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Shuffled {
    /// The shuffled collection (full deck or just the remaining cards), in its new order.
    pub cards: Vec<Card>,
    /// Number of cards not yet drawn.
    pub remaining: usize,
}

/// Result of a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Drawn {
    /// The drawn cards, in draw order.
    pub cards: Vec<Card>,
    /// Number of cards not yet drawn.
    pub remaining: usize,
}

/// Result of returning cards to the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Returned {
    /// Number of cards put back.
    pub returned: usize,
    /// Number of cards not yet drawn.
    pub remaining: usize,
}
