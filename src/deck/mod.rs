//! The deck and its bookkeeping between all cards and the cards not yet drawn.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::card::{ALL_STANDARD_CARDS, Card, Code, JOKER_CARDS, STANDARD_PLUS_JOKERS};
use crate::error::InvalidCardError;
use crate::options::DeckOptions;
use crate::outcome::DeckInfo;
use crate::validation::validate_cards;

mod draw;
mod returns;
mod shuffle;

/// A deck of playing cards.
///
/// The deck owns the full set of cards it was built with and the subset
/// still undrawn. Drawing moves cards out of the remaining set, returning
/// moves them back, and shuffling reorders either collection. The full set
/// never changes membership after construction.
#[derive(Debug, Clone)]
pub struct Deck {
    /// When the deck was built.
    created_at: DateTime<Utc>,
    /// Whether jokers were requested at construction.
    joker_enable: bool,
    /// Every card belonging to the deck.
    cards: Vec<Code>,
    /// Cards not yet drawn; always a sub-multiset of `cards`.
    remaining_cards: Vec<Code>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Builds a deck stamped with the current time.
    ///
    /// `seed` drives every shuffle and random draw, so two decks built from
    /// the same options and seed behave identically.
    ///
    /// # Errors
    ///
    /// Returns an error if a custom card identifier is not in the catalog.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{Deck, DeckOptions};
    ///
    /// let deck = Deck::new(DeckOptions::default().with_jokers(true), 42).unwrap();
    /// assert_eq!(deck.len(), 54);
    /// assert_eq!(deck.remaining(), 54);
    /// ```
    #[cfg(feature = "std")]
    pub fn new(options: DeckOptions, seed: u64) -> Result<Self, InvalidCardError> {
        Self::with_created_at(options, seed, Utc::now())
    }

    /// Builds a deck with an explicit creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if a custom card identifier is not in the catalog.
    pub fn with_created_at(
        options: DeckOptions,
        seed: u64,
        created_at: DateTime<Utc>,
    ) -> Result<Self, InvalidCardError> {
        let mut cards = match options.cards.as_deref() {
            Some(custom) if !custom.is_empty() => {
                let mut cards = validate_cards(custom)?;
                if options.joker_enable {
                    cards.extend_from_slice(&JOKER_CARDS);
                }
                cards
            }
            _ if options.joker_enable => STANDARD_PLUS_JOKERS.to_vec(),
            _ => ALL_STANDARD_CARDS.to_vec(),
        };

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        if options.shuffled {
            cards.shuffle(&mut rng);
        }

        Ok(Self {
            created_at,
            joker_enable: options.joker_enable,
            remaining_cards: cards.clone(),
            cards,
            rng,
        })
    }

    /// Returns a snapshot of the creation time and draw counts.
    #[must_use]
    pub fn info(&self) -> DeckInfo {
        DeckInfo {
            created_at: self.created_at,
            remaining: self.remaining(),
            drawn_cards: self.cards.len() - self.remaining(),
        }
    }

    /// Lists the remaining cards, or every card of the deck.
    #[must_use]
    pub fn list_cards(&self, just_remaining: bool) -> Vec<Card> {
        if just_remaining {
            view(&self.remaining_cards)
        } else {
            view(&self.cards)
        }
    }

    /// Returns every card belonging to the deck.
    #[must_use]
    pub fn cards(&self) -> &[Code] {
        &self.cards
    }

    /// Returns the cards not yet drawn.
    #[must_use]
    pub fn remaining_cards(&self) -> &[Code] {
        &self.remaining_cards
    }

    /// Returns the number of cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining_cards.len()
    }

    /// Returns the number of cards belonging to the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether jokers were requested at construction.
    #[must_use]
    pub const fn joker_enable(&self) -> bool {
        self.joker_enable
    }

    /// Returns when the deck was built.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn view(codes: &[Code]) -> Vec<Card> {
    codes.iter().copied().map(Card::from).collect()
}

/// Counts how many copies of each code appear.
fn multiplicity(codes: &[Code]) -> HashMap<Code, usize> {
    let mut counts = HashMap::new();
    for &code in codes {
        *counts.entry(code).or_insert(0) += 1;
    }
    counts
}
