//! A standard playing-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that tracks every card it was built
//! with and the cards still undrawn, and supports listing, shuffling,
//! drawing, and returning cards. Decks can hold the 52 standard cards, the
//! standard cards plus two jokers, or a custom set of catalog cards.
//!
//! # Example
//!
//! ```
//! use carddeck::{Deck, DeckOptions, DrawMode, DrawOptions};
//!
//! let mut deck = Deck::new(DeckOptions::default(), 42).unwrap();
//! let drawn = deck
//!     .draw_cards(DrawOptions::default().with_count(5).with_mode(DrawMode::Top))
//!     .unwrap();
//! assert_eq!(drawn.remaining, 47);
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
pub mod options;
pub mod outcome;
pub mod shared;
mod sync;
pub mod validation;

// Re-export main types
pub use card::{
    ALL_STANDARD_CARDS, CATALOG_SIZE, Card, Code, DECK_SIZE, JOKER_CARDS, JOKER_COUNT,
    STANDARD_PLUS_JOKERS, Suit, suit_name, value_name,
};
pub use deck::Deck;
pub use error::{DrawError, InvalidCardError, ReturnError};
pub use options::{DeckOptions, DrawMode, DrawOptions, ShuffleOptions};
pub use outcome::{DeckInfo, Drawn, Returned, Shuffled};
pub use shared::SharedDeck;
pub use validation::validate_cards;
