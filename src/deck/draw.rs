use alloc::vec::Vec;

use rand::Rng;

use crate::card::Code;
use crate::error::DrawError;
use crate::options::{DrawMode, DrawOptions};
use crate::outcome::Drawn;

use super::{Deck, view};

impl Deck {
    /// Draws cards from the remaining cards.
    ///
    /// `top` takes from the front, `bottom` from the back, and `random`
    /// removes a uniformly chosen card on each draw. The drawn cards are
    /// returned in draw order. Drawing zero cards succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::NotEnoughCards`] if more cards are requested than
    /// remain. The deck is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{Deck, DeckOptions, DrawMode, DrawOptions};
    ///
    /// let mut deck = Deck::new(DeckOptions::default(), 7).unwrap();
    /// let drawn = deck
    ///     .draw_cards(DrawOptions::default().with_count(2).with_mode(DrawMode::Top))
    ///     .unwrap();
    /// assert_eq!(drawn.cards[0].code.as_str(), "AS");
    /// assert_eq!(drawn.cards[1].code.as_str(), "2S");
    /// assert_eq!(drawn.remaining, 50);
    /// ```
    pub fn draw_cards(&mut self, options: DrawOptions) -> Result<Drawn, DrawError> {
        let DrawOptions { count, mode } = options;
        let remaining = self.remaining();
        if count > remaining {
            return Err(DrawError::NotEnoughCards {
                requested: count,
                remaining,
            });
        }

        let drawn: Vec<Code> = match mode {
            DrawMode::Top => self.remaining_cards.drain(..count).collect(),
            DrawMode::Bottom => self
                .remaining_cards
                .drain(remaining - count..)
                .rev()
                .collect(),
            DrawMode::Random => (0..count)
                .map(|_| {
                    let index = self.rng.random_range(0..self.remaining_cards.len());
                    self.remaining_cards.remove(index)
                })
                .collect(),
        };

        Ok(Drawn {
            cards: view(&drawn),
            remaining: self.remaining(),
        })
    }
}
