//! Deck integration tests.

use carddeck::{
    ALL_STANDARD_CARDS, Code, DECK_SIZE, Deck, DeckOptions, DrawError, DrawMode, DrawOptions,
    InvalidCardError, ReturnError, STANDARD_PLUS_JOKERS, SharedDeck, ShuffleOptions, Suit,
};
use chrono::{TimeZone, Utc};

fn deck(options: DeckOptions) -> Deck {
    Deck::new(options, 42).unwrap()
}

fn codes(deck: &Deck, just_remaining: bool) -> Vec<String> {
    deck.list_cards(just_remaining)
        .iter()
        .map(|card| card.code.to_string())
        .collect()
}

fn sorted(codes: &[Code]) -> Vec<Code> {
    let mut codes = codes.to_vec();
    codes.sort_unstable();
    codes
}

fn draw(deck: &mut Deck, count: usize, mode: DrawMode) -> Vec<String> {
    deck.draw_cards(DrawOptions::default().with_count(count).with_mode(mode))
        .unwrap()
        .cards
        .iter()
        .map(|card| card.code.to_string())
        .collect()
}

#[test]
fn default_deck_has_52_standard_cards() {
    let deck = deck(DeckOptions::default());
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(deck.cards(), ALL_STANDARD_CARDS);
    assert!(!deck.joker_enable());

    let info = deck.info();
    assert_eq!(info.remaining, 52);
    assert_eq!(info.drawn_cards, 0);
}

#[test]
fn joker_deck_has_54_cards() {
    let deck = deck(DeckOptions::default().with_jokers(true));
    assert_eq!(deck.len(), 54);
    assert_eq!(deck.remaining(), 54);
    assert_eq!(deck.cards(), STANDARD_PLUS_JOKERS);
    assert!(deck.joker_enable());
}

#[test]
fn custom_cards_with_jokers() {
    let deck = deck(
        DeckOptions::default()
            .with_jokers(true)
            .with_cards(["0C", "0D"]),
    );
    assert_eq!(deck.len(), 4);
    assert_eq!(deck.remaining(), 4);
    assert_eq!(codes(&deck, false), ["0C", "0D", "1X", "2X"]);
}

#[test]
fn custom_cards_without_jokers() {
    let deck = deck(DeckOptions::default().with_cards(["KH", "AS", "KH"]));
    assert_eq!(codes(&deck, false), ["KH", "AS", "KH"]);
    assert_eq!(deck.remaining(), 3);
}

#[test]
fn empty_custom_set_falls_back_to_catalog() {
    let empty: [&str; 0] = [];
    let deck = deck(DeckOptions::default().with_cards(empty));
    assert_eq!(deck.len(), 52);
}

#[test]
fn invalid_custom_cards_abort_construction() {
    let err = Deck::new(DeckOptions::default().with_cards(["AS", "1S", "ZZ"]), 1).unwrap_err();
    assert_eq!(
        err,
        InvalidCardError {
            cards: vec!["1S".to_owned(), "ZZ".to_owned()],
        }
    );
}

#[test]
fn shuffled_construction_keeps_every_card() {
    let deck = deck(DeckOptions::default().with_shuffled(true));
    assert_ne!(deck.cards(), ALL_STANDARD_CARDS);
    assert_eq!(sorted(deck.cards()), ALL_STANDARD_CARDS);
    assert_eq!(deck.cards(), deck.remaining_cards());
}

#[test]
fn same_seed_same_order() {
    let options = DeckOptions::default().with_shuffled(true);
    let a = Deck::new(options.clone(), 5).unwrap();
    let b = Deck::new(options, 5).unwrap();
    assert_eq!(a.cards(), b.cards());
}

#[test]
fn created_at_is_fixed() {
    let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let mut deck = Deck::with_created_at(DeckOptions::default(), 1, at).unwrap();
    draw(&mut deck, 3, DrawMode::Random);
    deck.shuffle(ShuffleOptions::default());
    assert_eq!(deck.created_at(), at);
    assert_eq!(deck.info().created_at, at);
}

#[test]
fn list_cards_is_idempotent() {
    let mut deck = deck(DeckOptions::default().with_jokers(true));
    draw(&mut deck, 10, DrawMode::Random);
    assert_eq!(deck.list_cards(false), deck.list_cards(false));
    assert_eq!(deck.list_cards(true), deck.list_cards(true));
    assert_eq!(deck.list_cards(true).len(), 44);
    assert_eq!(deck.list_cards(false).len(), 54);
}

#[test]
fn listed_cards_carry_display_names() {
    let deck = deck(DeckOptions::default().with_cards(["0H", "QS", "2X"]));
    let cards = deck.list_cards(false);
    assert_eq!(cards[0].suit, Suit::Hearts);
    assert_eq!(cards[0].value, "10");
    assert_eq!(cards[1].value_long, "QUEEN");
    assert_eq!(cards[2].suit, Suit::Joker);
    assert_eq!(cards[2].suit.to_string(), "JOKER");
}

#[test]
fn draw_top_five() {
    let mut deck = deck(DeckOptions::default());
    let drawn = draw(&mut deck, 5, DrawMode::Top);
    assert_eq!(drawn, ["AS", "2S", "3S", "4S", "5S"]);
    assert_eq!(deck.remaining(), 47);
    assert_eq!(deck.len(), 52);

    let info = deck.info();
    assert_eq!(info.remaining, 47);
    assert_eq!(info.drawn_cards, 5);
}

#[test]
fn draw_bottom_takes_from_the_back() {
    let mut deck = deck(DeckOptions::default());
    let drawn = draw(&mut deck, 3, DrawMode::Bottom);
    assert_eq!(drawn, ["KH", "QH", "JH"]);
    assert_eq!(codes(&deck, true).last().map(String::as_str), Some("0H"));
}

#[test]
fn draw_random_removes_distinct_cards() {
    let mut deck = deck(DeckOptions::default());
    let drawn = draw(&mut deck, 20, DrawMode::Random);
    assert_eq!(deck.remaining(), 32);

    let left = codes(&deck, true);
    for code in &drawn {
        assert!(!left.contains(code));
    }

    let mut unique = drawn.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 20);
}

#[test]
fn default_draw_is_one_random_card() {
    let mut deck = deck(DeckOptions::default());
    let drawn = deck.draw_cards(DrawOptions::default()).unwrap();
    assert_eq!(drawn.cards.len(), 1);
    assert_eq!(drawn.remaining, 51);
}

#[test]
fn draw_everything_then_nothing() {
    let mut deck = deck(DeckOptions::default().with_cards(["AS", "AD"]));
    draw(&mut deck, 2, DrawMode::Random);
    assert_eq!(deck.remaining(), 0);
    assert!(deck.remaining_cards().is_empty());

    let drawn = deck
        .draw_cards(DrawOptions::default().with_count(0))
        .unwrap();
    assert!(drawn.cards.is_empty());
}

#[test]
fn over_draw_leaves_deck_unchanged() {
    let mut deck = deck(DeckOptions::default());
    draw(&mut deck, 2, DrawMode::Top);
    let before = deck.remaining_cards().to_vec();

    let err = deck
        .draw_cards(DrawOptions::default().with_count(51))
        .unwrap_err();
    assert_eq!(
        err,
        DrawError::NotEnoughCards {
            requested: 51,
            remaining: 50,
        }
    );
    assert_eq!(deck.remaining_cards(), before);
}

#[test]
fn invalid_draw_mode_is_rejected() {
    let err = "middle".parse::<DrawMode>().unwrap_err();
    assert_eq!(err, DrawError::InvalidMode("middle".to_owned()));
    assert_eq!("bottom".parse::<DrawMode>().unwrap(), DrawMode::Bottom);
    assert!("Top".parse::<DrawMode>().is_err());
}

#[test]
fn draw_then_return_restores_remaining() {
    let mut deck = deck(DeckOptions::default().with_jokers(true));
    draw(&mut deck, 4, DrawMode::Top);
    let before = sorted(deck.remaining_cards());
    let count = deck.remaining();

    let drawn = draw(&mut deck, 7, DrawMode::Random);
    let returned = deck.return_cards(drawn.as_slice()).unwrap();
    assert_eq!(returned.returned, 7);
    assert_eq!(returned.remaining, count);
    assert_eq!(sorted(deck.remaining_cards()), before);
}

#[test]
fn returned_cards_go_to_the_back() {
    let mut deck = deck(DeckOptions::default());
    draw(&mut deck, 1, DrawMode::Top);
    deck.return_cards(&["AS"]).unwrap();
    assert_eq!(deck.remaining_cards().last().map(|c| c.as_str()), Some("AS"));
}

#[test]
fn return_empty_batch() {
    let mut deck = deck(DeckOptions::default());
    let none: [&str; 0] = [];
    assert_eq!(deck.return_cards(&none).unwrap_err(), ReturnError::Empty);
}

#[test]
fn return_is_all_or_nothing() {
    let mut deck = deck(DeckOptions::default());
    draw(&mut deck, 3, DrawMode::Top);
    let before = deck.remaining_cards().to_vec();

    // AS and 2S are drawn, KS never was, ZZ is not a card.
    let err = deck.return_cards(&["AS", "KS", "2S", "ZZ"]).unwrap_err();
    assert_eq!(
        err,
        ReturnError::Rejected {
            cards: vec!["KS".to_owned(), "ZZ".to_owned()],
        }
    );
    assert_eq!(deck.remaining_cards(), before);
    assert_eq!(deck.remaining(), 49);
}

#[test]
fn return_rejects_cards_outside_the_deck() {
    let mut deck = deck(DeckOptions::default().with_cards(["AS", "KS"]));
    draw(&mut deck, 2, DrawMode::Top);

    let err = deck.return_cards(&["AS", "QH", "1X"]).unwrap_err();
    assert_eq!(
        err,
        ReturnError::Rejected {
            cards: vec!["QH".to_owned(), "1X".to_owned()],
        }
    );
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn repeated_code_in_batch_is_returned_once() {
    let mut deck = deck(DeckOptions::default());
    draw(&mut deck, 2, DrawMode::Top);

    let returned = deck.return_cards(&["AS", "AS", "2S", "AS"]).unwrap();
    assert_eq!(returned.returned, 2);
    assert_eq!(returned.remaining, 52);
    assert_eq!(sorted(deck.remaining_cards()), ALL_STANDARD_CARDS);
}

#[test]
fn repeated_undrawn_code_is_still_rejected() {
    let mut deck = deck(DeckOptions::default());
    draw(&mut deck, 1, DrawMode::Top);

    let err = deck.return_cards(&["AS", "KS", "KS"]).unwrap_err();
    assert_eq!(
        err,
        ReturnError::Rejected {
            cards: vec!["KS".to_owned(), "KS".to_owned()],
        }
    );
    assert_eq!(deck.remaining(), 51);
}

#[test]
fn duplicate_custom_cards_return_by_count() {
    let mut deck = deck(DeckOptions::default().with_cards(["7C", "7C", "8C"]));
    draw(&mut deck, 2, DrawMode::Top);
    assert_eq!(codes(&deck, true), ["8C"]);

    deck.return_cards(&["7C", "7C"]).unwrap();
    assert_eq!(deck.remaining(), 3);
    assert!(deck.return_cards(&["7C"]).is_err());

    draw(&mut deck, 2, DrawMode::Bottom);
    let returned = deck.return_cards(&["7C", "7C", "7C"]).unwrap();
    assert_eq!(returned.returned, 2);
    assert_eq!(sorted(deck.remaining_cards()), sorted(deck.cards()));
}

#[test]
fn full_shuffle_keeps_drawn_cards_drawn() {
    let mut deck = deck(DeckOptions::default().with_jokers(true));
    let drawn = draw(&mut deck, 10, DrawMode::Random);
    let before_all = sorted(deck.cards());
    let before_left = sorted(deck.remaining_cards());

    let shuffled = deck.shuffle(ShuffleOptions::default());
    assert_eq!(shuffled.cards.len(), 54);
    assert_eq!(shuffled.remaining, 44);
    assert_eq!(sorted(deck.cards()), before_all);
    assert_eq!(sorted(deck.remaining_cards()), before_left);

    // Remaining cards follow the new full order.
    let order: Vec<Code> = deck
        .cards()
        .iter()
        .copied()
        .filter(|code| !drawn.contains(&code.to_string()))
        .collect();
    assert_eq!(deck.remaining_cards(), order);
}

#[test]
fn remaining_only_shuffle() {
    let mut deck = deck(DeckOptions::default());
    draw(&mut deck, 12, DrawMode::Top);
    let all_before = deck.cards().to_vec();
    let left_before = sorted(deck.remaining_cards());

    let shuffled = deck.shuffle(ShuffleOptions::default().with_just_remaining(true));
    assert_eq!(shuffled.cards.len(), 40);
    assert_eq!(shuffled.remaining, 40);
    assert_eq!(deck.cards(), all_before);
    assert_eq!(sorted(deck.remaining_cards()), left_before);
    assert_ne!(sorted(deck.remaining_cards()), deck.remaining_cards());
}

#[test]
fn reset_returns_everything() {
    let mut deck = deck(DeckOptions::default());
    draw(&mut deck, 30, DrawMode::Random);
    deck.reset(false);
    assert_eq!(deck.remaining_cards(), ALL_STANDARD_CARDS);

    draw(&mut deck, 30, DrawMode::Random);
    deck.reset(true);
    assert_eq!(deck.remaining(), 52);
    assert_eq!(deck.remaining_cards(), deck.cards());
    assert_eq!(sorted(deck.cards()), ALL_STANDARD_CARDS);
}

#[test]
fn shared_deck_forwards_operations() {
    let shared = SharedDeck::new(deck(DeckOptions::default()));
    let drawn = shared
        .draw_cards(DrawOptions::default().with_count(2).with_mode(DrawMode::Top))
        .unwrap();
    assert_eq!(drawn.remaining, 50);
    assert_eq!(shared.list_cards(true).len(), 50);

    assert!(shared.return_cards(&["KD"]).is_err());
    shared.return_cards(&["AS", "2S"]).unwrap();
    assert_eq!(shared.info().drawn_cards, 0);

    shared.shuffle(ShuffleOptions::default());
    assert_eq!(shared.with(|deck| deck.remaining()), 52);
    assert_eq!(shared.snapshot().len(), 52);

    shared.reset(true);
    assert_eq!(shared.into_inner().remaining(), 52);
}

#[test]
fn errors_display_offending_cards() {
    let err = Deck::new(DeckOptions::default().with_cards(["AS", "11"]), 1).unwrap_err();
    assert_eq!(err.to_string(), "invalid card identifiers: 11");

    let err = ReturnError::Rejected {
        cards: vec!["AS".to_owned(), "KS".to_owned()],
    };
    assert_eq!(err.to_string(), "cards cannot be returned: AS, KS");
}
