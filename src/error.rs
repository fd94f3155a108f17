//! Error types for deck operations.
//!
//! Every failing operation leaves the deck exactly as it was.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

/// One or more identifiers are not part of the card catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card identifiers: {}", .cards.join(", "))]
pub struct InvalidCardError {
    /// The offending identifiers, in input order.
    pub cards: Vec<String>,
}

impl InvalidCardError {
    pub(crate) fn single(identifier: &str) -> Self {
        Self {
            cards: alloc::vec![identifier.to_owned()],
        }
    }
}

/// Errors that can occur when drawing cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// More cards were requested than remain in the deck.
    #[error("cannot draw {requested} cards, only {remaining} remaining")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards remaining.
        remaining: usize,
    },
    /// The draw mode is not one of `random`, `top`, or `bottom`.
    #[error("invalid draw mode `{0}`, expected `random`, `top`, or `bottom`")]
    InvalidMode(String),
}

/// Errors that can occur when returning cards to the deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReturnError {
    /// No cards were given.
    #[error("no cards to return")]
    Empty,
    /// Some identifiers are unknown, do not belong to this deck, or were never
    /// drawn. Nothing was returned.
    #[error("cards cannot be returned: {}", .cards.join(", "))]
    Rejected {
        /// The offending identifiers, in input order.
        cards: Vec<String>,
    },
}
