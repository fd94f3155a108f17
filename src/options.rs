//! Option structs for deck construction, shuffling, and drawing.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::DrawError;

/// Which position a card is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum DrawMode {
    /// Any remaining card, chosen uniformly.
    #[default]
    Random,
    /// The front of the remaining cards.
    Top,
    /// The back of the remaining cards.
    Bottom,
}

impl DrawMode {
    /// Returns the mode name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawMode {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(DrawError::InvalidMode(String::from(other))),
        }
    }
}

/// Configuration for building a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use carddeck::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_jokers(true)
///     .with_cards(["AS", "KH"])
///     .with_shuffled(true);
/// assert_eq!(options.cards.as_deref().map(<[_]>::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeckOptions {
    /// Whether jokers are part of the deck.
    pub joker_enable: bool,
    /// Custom card identifiers. `None` or an empty list means the full catalog.
    pub cards: Option<Vec<String>>,
    /// Whether the deck is shuffled on construction.
    pub shuffled: bool,
}

impl DeckOptions {
    /// Sets whether jokers are part of the deck.
    ///
    /// With a custom card set the two jokers are appended to it; otherwise
    /// the deck holds all 54 catalog cards.
    #[must_use]
    pub fn with_jokers(mut self, enable: bool) -> Self {
        self.joker_enable = enable;
        self
    }

    /// Uses a custom set of card identifiers instead of the full catalog.
    ///
    /// The identifiers are validated when the deck is built.
    #[must_use]
    pub fn with_cards<I, S>(mut self, cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cards = Some(cards.into_iter().map(Into::into).collect());
        self
    }

    /// Sets whether the deck is shuffled on construction.
    #[must_use]
    pub fn with_shuffled(mut self, shuffled: bool) -> Self {
        self.shuffled = shuffled;
        self
    }
}

/// Configuration for [`Deck::shuffle`](crate::Deck::shuffle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShuffleOptions {
    /// Shuffle only the cards not yet drawn.
    pub just_remaining: bool,
}

impl ShuffleOptions {
    /// Sets whether only the remaining cards are shuffled.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::ShuffleOptions;
    ///
    /// let options = ShuffleOptions::default().with_just_remaining(true);
    /// assert!(options.just_remaining);
    /// ```
    #[must_use]
    pub const fn with_just_remaining(mut self, just_remaining: bool) -> Self {
        self.just_remaining = just_remaining;
        self
    }
}

/// Configuration for [`Deck::draw_cards`](crate::Deck::draw_cards).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOptions {
    /// Number of cards to draw.
    pub count: usize,
    /// Where each card is taken from.
    pub mode: DrawMode,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            count: 1,
            mode: DrawMode::Random,
        }
    }
}

impl DrawOptions {
    /// Sets the number of cards to draw.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{DrawMode, DrawOptions};
    ///
    /// let options = DrawOptions::default().with_count(5).with_mode(DrawMode::Top);
    /// assert_eq!(options.count, 5);
    /// assert_eq!(options.mode, DrawMode::Top);
    /// ```
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the draw mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: DrawMode) -> Self {
        self.mode = mode;
        self
    }
}
