use rand::seq::SliceRandom;

use crate::options::ShuffleOptions;
use crate::outcome::Shuffled;

use super::{Deck, multiplicity, view};

impl Deck {
    /// Shuffles the deck with a uniform Fisher-Yates permutation.
    ///
    /// With `just_remaining` only the undrawn cards are reordered and the
    /// result lists them. Otherwise the full deck is reordered and the
    /// remaining cards are rearranged to follow the new full order; which
    /// cards are drawn does not change. Shuffling never adds or removes cards.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{Deck, DeckOptions, ShuffleOptions};
    ///
    /// let mut deck = Deck::new(DeckOptions::default(), 3).unwrap();
    /// let shuffled = deck.shuffle(ShuffleOptions::default());
    /// assert_eq!(shuffled.cards.len(), 52);
    /// assert_eq!(shuffled.remaining, 52);
    /// ```
    pub fn shuffle(&mut self, options: ShuffleOptions) -> Shuffled {
        if options.just_remaining {
            self.remaining_cards.shuffle(&mut self.rng);
            return Shuffled {
                cards: view(&self.remaining_cards),
                remaining: self.remaining(),
            };
        }

        self.cards.shuffle(&mut self.rng);
        self.align_remaining();

        Shuffled {
            cards: view(&self.cards),
            remaining: self.remaining(),
        }
    }

    /// Rebuilds the remaining cards in the order of the full deck, keeping
    /// the same number of copies of each code.
    fn align_remaining(&mut self) {
        let mut undrawn = multiplicity(&self.remaining_cards);
        self.remaining_cards = self
            .cards
            .iter()
            .copied()
            .filter(|code| match undrawn.get_mut(code) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    true
                }
                _ => false,
            })
            .collect();
    }

    /// Puts every drawn card back, optionally shuffling the whole deck.
    pub fn reset(&mut self, shuffled: bool) {
        self.remaining_cards.clone_from(&self.cards);
        if shuffled {
            self.shuffle(ShuffleOptions::default());
        }
    }
}
