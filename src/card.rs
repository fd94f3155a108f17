//! Card identifiers, the card catalog, and the display view of a card.
//!
//! Every card is named by a two-character [`Code`]: a value character
//! followed by a suit character (`"AS"` is the Ace of Spades, `"0H"` the Ten
//! of Hearts). The two jokers are `"1X"` and `"2X"`.

use core::fmt;
use core::str::FromStr;

use crate::error::InvalidCardError;

/// Number of standard cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of jokers in the catalog.
pub const JOKER_COUNT: usize = 2;

/// Number of identifiers in the full catalog (standard cards plus jokers).
pub const CATALOG_SIZE: usize = DECK_SIZE + JOKER_COUNT;

const CARDS_PER_SUIT: usize = 13;

/// Catalog order: suit-major (spades, diamonds, clubs, hearts), value-minor, then jokers.
const CODES: [&str; CATALOG_SIZE] = [
    "AS", "2S", "3S", "4S", "5S", "6S", "7S", "8S", "9S", "0S", "JS", "QS", "KS", //
    "AD", "2D", "3D", "4D", "5D", "6D", "7D", "8D", "9D", "0D", "JD", "QD", "KD", //
    "AC", "2C", "3C", "4C", "5C", "6C", "7C", "8C", "9C", "0C", "JC", "QC", "KC", //
    "AH", "2H", "3H", "4H", "5H", "6H", "7H", "8H", "9H", "0H", "JH", "QH", "KH", //
    "1X", "2X",
];

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// The pseudo-suit shared by both jokers.
    Joker,
}

impl Suit {
    /// The four standard suits in catalog order.
    pub const STANDARD: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    /// Looks up a suit by its identifier character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'S' => Some(Self::Spades),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            'H' => Some(Self::Hearts),
            'X' => Some(Self::Joker),
            _ => None,
        }
    }

    /// Returns the identifier character of the suit.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Hearts => 'H',
            Self::Joker => 'X',
        }
    }

    /// Returns the long display name (`"SPADES"`, `"JOKER"`, ...).
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Spades => "SPADES",
            Self::Diamonds => "DIAMONDS",
            Self::Clubs => "CLUBS",
            Self::Hearts => "HEARTS",
            Self::Joker => "JOKER",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

/// Long name of a suit character, or `None` if the character is not a suit.
#[must_use]
pub const fn suit_name(c: char) -> Option<&'static str> {
    match Suit::from_char(c) {
        Some(suit) => Some(suit.long_name()),
        None => None,
    }
}

/// Long name of a value character, or `None` if the character is not a value.
///
/// `'0'` stands for ten and is named `"10"`; the other digits name themselves.
#[must_use]
pub const fn value_name(c: char) -> Option<&'static str> {
    let name = match c {
        'A' => "ACE",
        '2' => "2",
        '3' => "3",
        '4' => "4",
        '5' => "5",
        '6' => "6",
        '7' => "7",
        '8' => "8",
        '9' => "9",
        '0' => "10",
        'J' => "JACK",
        'Q' => "QUEEN",
        'K' => "KING",
        'X' => "JOKER",
        _ => return None,
    };
    Some(name)
}

/// Short display value of a value character (`'0'` shows as `"10"`).
const fn short_value(c: char) -> &'static str {
    match c {
        'A' => "A",
        '1' => "1",
        '2' => "2",
        '3' => "3",
        '4' => "4",
        '5' => "5",
        '6' => "6",
        '7' => "7",
        '8' => "8",
        '9' => "9",
        '0' => "10",
        'J' => "J",
        'Q' => "Q",
        'K' => "K",
        _ => "X",
    }
}

/// A card identifier drawn from the closed catalog.
///
/// Codes order by catalog position, so sorting a list of codes puts it in
/// the order of [`STANDARD_PLUS_JOKERS`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(u8);

impl Code {
    const fn at(index: usize) -> Self {
        Self(index as u8)
    }

    /// Returns the two-character identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        CODES[self.0 as usize]
    }

    /// Returns whether this is one of the jokers.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.0 as usize >= DECK_SIZE
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        if self.is_joker() {
            Suit::Joker
        } else {
            Suit::STANDARD[self.0 as usize / CARDS_PER_SUIT]
        }
    }

    const fn value_char(self) -> char {
        self.as_str().as_bytes()[0] as char
    }

    /// Returns the short display value (`"A"`, `"10"`, `"K"`, `"1"` for the first joker).
    #[must_use]
    pub const fn value(self) -> &'static str {
        short_value(self.value_char())
    }

    /// Returns the long display value (`"ACE"`, `"10"`, `"KING"`, `"JOKER"`).
    #[must_use]
    pub const fn value_long(self) -> &'static str {
        if self.is_joker() {
            return "JOKER";
        }
        match value_name(self.value_char()) {
            Some(name) => name,
            None => "",
        }
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({})", self.as_str())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Code {
    type Err = InvalidCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CODES
            .iter()
            .position(|code| *code == s)
            .map(Self::at)
            .ok_or_else(|| InvalidCardError::single(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Code {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

const fn catalog<const N: usize>(start: usize) -> [Code; N] {
    let mut codes = [Code(0); N];
    let mut i = 0;
    while i < N {
        codes[i] = Code::at(start + i);
        i += 1;
    }
    codes
}

/// The 52 standard cards in catalog order.
pub const ALL_STANDARD_CARDS: [Code; DECK_SIZE] = catalog(0);

/// The two jokers.
pub const JOKER_CARDS: [Code; JOKER_COUNT] = catalog(DECK_SIZE);

/// The standard cards followed by the jokers.
pub const STANDARD_PLUS_JOKERS: [Code; CATALOG_SIZE] = catalog(0);

/// Display view of a card, computed on demand from its [`Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Card {
    /// The card identifier.
    pub code: Code,
    /// The suit.
    pub suit: Suit,
    /// Short display value.
    pub value: &'static str,
    /// Long display value.
    pub value_long: &'static str,
}

impl From<Code> for Card {
    fn from(code: Code) -> Self {
        Self {
            code,
            suit: code.suit(),
            value: code.value(),
            value_long: code.value_long(),
        }
    }
}
