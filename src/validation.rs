//! Catalog membership checks for caller-supplied identifiers.

use alloc::borrow::ToOwned;
use alloc::vec::Vec;

use crate::card::Code;
use crate::error::InvalidCardError;

/// Checks that every identifier belongs to the catalog (standard cards and
/// jokers) and returns the parsed codes in input order.
///
/// # Errors
///
/// Returns an [`InvalidCardError`] listing every identifier that is not in
/// the catalog.
///
/// # Example
///
/// ```
/// use carddeck::validate_cards;
///
/// assert!(validate_cards(&["AS", "0H", "1X"]).is_ok());
///
/// let err = validate_cards(&["AS", "ZZ", "10H"]).unwrap_err();
/// assert_eq!(err.cards, ["ZZ", "10H"]);
/// ```
pub fn validate_cards<S: AsRef<str>>(identifiers: &[S]) -> Result<Vec<Code>, InvalidCardError> {
    let mut codes = Vec::with_capacity(identifiers.len());
    let mut invalid = Vec::new();

    for identifier in identifiers {
        let identifier = identifier.as_ref();
        match identifier.parse::<Code>() {
            Ok(code) => codes.push(code),
            Err(_) => invalid.push(identifier.to_owned()),
        }
    }

    if invalid.is_empty() {
        Ok(codes)
    } else {
        Err(InvalidCardError { cards: invalid })
    }
}
