use alloc::borrow::ToOwned;
use alloc::vec::Vec;

use crate::card::Code;
use crate::error::ReturnError;
use crate::outcome::Returned;

use super::{Deck, multiplicity};

impl Deck {
    /// Returns drawn cards to the end of the remaining cards.
    ///
    /// The batch is all-or-nothing: if any identifier is not in the catalog,
    /// does not belong to this deck, or is not currently drawn, nothing is
    /// returned. A code repeated in the batch is returned once per drawn
    /// copy; further repeats are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ReturnError::Empty`] for an empty batch, or
    /// [`ReturnError::Rejected`] listing every offending identifier. The deck
    /// is left unchanged in both cases.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{Deck, DeckOptions, DrawMode, DrawOptions, ReturnError};
    ///
    /// let mut deck = Deck::new(DeckOptions::default(), 1).unwrap();
    /// deck.draw_cards(DrawOptions::default().with_mode(DrawMode::Top)).unwrap();
    ///
    /// let err = deck.return_cards(&["AS", "KH"]).unwrap_err();
    /// assert_eq!(err, ReturnError::Rejected { cards: vec!["KH".to_owned()] });
    /// assert_eq!(deck.remaining(), 51);
    ///
    /// deck.return_cards(&["AS"]).unwrap();
    /// assert_eq!(deck.remaining(), 52);
    /// ```
    pub fn return_cards<S: AsRef<str>>(
        &mut self,
        identifiers: &[S],
    ) -> Result<Returned, ReturnError> {
        if identifiers.is_empty() {
            return Err(ReturnError::Empty);
        }

        let drawn = self.drawn_multiplicity();
        let mut outstanding = drawn.clone();
        let mut accepted = Vec::with_capacity(identifiers.len());
        let mut rejected = Vec::new();

        for identifier in identifiers {
            let identifier = identifier.as_ref();
            let Some(code) = identifier
                .parse::<Code>()
                .ok()
                .filter(|code| drawn.get(code).is_some_and(|count| *count > 0))
            else {
                rejected.push(identifier.to_owned());
                continue;
            };

            // Repeats past the drawn copies are dropped.
            if let Some(count) = outstanding.get_mut(&code).filter(|count| **count > 0) {
                *count -= 1;
                accepted.push(code);
            }
        }

        if !rejected.is_empty() {
            return Err(ReturnError::Rejected { cards: rejected });
        }

        let returned = accepted.len();
        self.remaining_cards.extend(accepted);

        Ok(Returned {
            returned,
            remaining: self.remaining(),
        })
    }

    /// Counts the drawn copies of each code.
    fn drawn_multiplicity(&self) -> super::HashMap<Code, usize> {
        let mut drawn = multiplicity(&self.cards);
        for code in &self.remaining_cards {
            if let Some(count) = drawn.get_mut(code) {
                *count = count.saturating_sub(1);
            }
        }
        drawn
    }
}
