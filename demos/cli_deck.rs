//! CLI deck example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use carddeck::{Card, Deck, DeckOptions, DrawMode, DrawOptions, ShuffleOptions, Suit};

fn main() {
    println!("Card deck CLI example (type 'help' for commands, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let jokers = matches!(prompt_line("Include jokers? (y/n): ").as_str(), "y" | "yes");
    let options = DeckOptions::default()
        .with_jokers(jokers)
        .with_shuffled(true);
    let mut deck = match Deck::new(options, seed) {
        Ok(deck) => deck,
        Err(err) => {
            println!("Deck error: {err}");
            return;
        }
    };

    loop {
        let line = prompt_line("> ");
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        match command {
            "d" | "draw" => {
                let count = args.first().and_then(|n| n.parse().ok()).unwrap_or(1);
                let mode = match args.get(1).map_or(Ok(DrawMode::Random), |m| m.parse()) {
                    Ok(mode) => mode,
                    Err(err) => {
                        println!("Draw error: {err}");
                        continue;
                    }
                };
                match deck.draw_cards(DrawOptions::default().with_count(count).with_mode(mode)) {
                    Ok(drawn) => {
                        println!("Drew {}", format_cards(&drawn.cards));
                        println!("{} cards remaining", drawn.remaining);
                    }
                    Err(err) => println!("Draw error: {err}"),
                }
            }
            "r" | "return" => {
                let codes: Vec<String> = args.iter().map(|code| code.to_uppercase()).collect();
                match deck.return_cards(codes.as_slice()) {
                    Ok(returned) => println!(
                        "Returned {} card(s), {} remaining",
                        returned.returned, returned.remaining
                    ),
                    Err(err) => println!("Return error: {err}"),
                }
            }
            "s" | "shuffle" => {
                let just_remaining = args.first() == Some(&"remaining");
                let shuffled =
                    deck.shuffle(ShuffleOptions::default().with_just_remaining(just_remaining));
                println!("Shuffled {} card(s)", shuffled.cards.len());
            }
            "l" | "list" => {
                let just_remaining = args.first() != Some(&"all");
                let cards = deck.list_cards(just_remaining);
                if cards.is_empty() {
                    println!("(no cards)");
                } else {
                    println!("{}", format_cards(&cards));
                }
            }
            "i" | "info" => {
                let info = deck.info();
                println!(
                    "Created {} | {} remaining | {} drawn",
                    info.created_at.to_rfc3339(),
                    info.remaining,
                    info.drawn_cards
                );
            }
            "reset" => {
                deck.reset(true);
                println!("All cards returned and shuffled.");
            }
            "h" | "help" => print_help(),
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Unknown command."),
        }
    }
}

fn print_help() {
    println!("  draw [count] [random|top|bottom]  draw cards");
    println!("  return <code>...                  return drawn cards, e.g. `return AS 0H`");
    println!("  shuffle [remaining]               shuffle the deck or just the remaining cards");
    println!("  list [all]                        list remaining (or all) cards");
    println!("  info                              show deck info");
    println!("  reset                             return every card and shuffle");
    println!("  quit                              exit");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "quit".to_string();
    }
    if input.is_empty() {
        return "quit".to_string();
    }
    input.trim().to_lowercase()
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
        Suit::Joker => "35",
    };
    colorize(card.code.as_str(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
