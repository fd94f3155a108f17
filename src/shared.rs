//! A deck that can be shared between threads.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DrawError, ReturnError};
use crate::options::{DrawOptions, ShuffleOptions};
use crate::outcome::{DeckInfo, Drawn, Returned, Shuffled};
use crate::sync::Mutex;

/// A [`Deck`] behind a mutex.
///
/// Each call holds the lock for the whole operation, so concurrent callers
/// observe every draw, return, and shuffle as a single step.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use carddeck::{Deck, DeckOptions, DrawOptions, SharedDeck};
///
/// let deck = Arc::new(SharedDeck::new(Deck::new(DeckOptions::default(), 9).unwrap()));
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let deck = Arc::clone(&deck);
///         thread::spawn(move || deck.draw_cards(DrawOptions::default().with_count(5)).unwrap())
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(deck.info().remaining, 32);
/// ```
pub struct SharedDeck {
    deck: Mutex<Deck>,
}

impl SharedDeck {
    /// Wraps a deck.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// See [`Deck::info`].
    pub fn info(&self) -> DeckInfo {
        self.deck.lock().info()
    }

    /// See [`Deck::list_cards`].
    pub fn list_cards(&self, just_remaining: bool) -> Vec<Card> {
        self.deck.lock().list_cards(just_remaining)
    }

    /// See [`Deck::shuffle`].
    pub fn shuffle(&self, options: ShuffleOptions) -> Shuffled {
        self.deck.lock().shuffle(options)
    }

    /// See [`Deck::draw_cards`].
    ///
    /// # Errors
    ///
    /// Returns an error if more cards are requested than remain.
    pub fn draw_cards(&self, options: DrawOptions) -> Result<Drawn, DrawError> {
        self.deck.lock().draw_cards(options)
    }

    /// See [`Deck::return_cards`].
    ///
    /// # Errors
    ///
    /// Returns an error if the batch is empty or any card cannot be returned.
    pub fn return_cards<S: AsRef<str>>(
        &self,
        identifiers: &[S],
    ) -> Result<Returned, ReturnError> {
        self.deck.lock().return_cards(identifiers)
    }

    /// See [`Deck::reset`].
    pub fn reset(&self, shuffled: bool) {
        self.deck.lock().reset(shuffled);
    }

    /// Runs a closure with exclusive access to the deck.
    pub fn with<R>(&self, f: impl FnOnce(&mut Deck) -> R) -> R {
        f(&mut self.deck.lock())
    }

    /// Returns a clone of the deck.
    pub fn snapshot(&self) -> Deck {
        self.deck.lock().clone()
    }

    /// Unwraps the deck.
    #[must_use]
    pub fn into_inner(self) -> Deck {
        self.deck.into_inner()
    }
}
