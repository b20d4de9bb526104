//! Prints a deck built from command line options.
//!
//! ```text
//! cargo run --example print_deck -- --jokers 2 --decks 2 --shuffle
//! ```

use core::str::FromStr;
use std::env;
use std::process::ExitCode;

use deckrs::{Card, DeckOptions, Suit};

fn main() -> ExitCode {
    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!(
                "usage: print_deck [--jokers N] [--decks N] [--no-hearts] [--shuffle | --seed N] [--sort]"
            );
            return ExitCode::FAILURE;
        }
    };

    match options.build() {
        Ok(deck) => {
            print_deck(&deck);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Deck error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<DeckOptions, String> {
    let mut options = DeckOptions::new();

    while let Some(arg) = args.next() {
        options = match arg.as_str() {
            "--jokers" => options.with_jokers(parse_number(&arg, args.next())?),
            "--decks" => options.with_decks(parse_number(&arg, args.next())?),
            "--seed" => options.with_shuffle_seed(parse_number(&arg, args.next())?),
            "--no-hearts" => options.with_filter(|card| card.suit == Suit::Heart),
            "--shuffle" => options.with_shuffle(),
            "--sort" => options.with_default_sort(),
            _ => return Err(format!("Unknown option: {arg}")),
        };
    }

    Ok(options)
}

fn parse_number<T: FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    value
        .as_deref()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| format!("{flag} expects a number"))
}

fn print_deck(deck: &[Card]) {
    for (i, card) in deck.iter().enumerate() {
        println!("{:>3}. {card}", i + 1);
    }
    println!("\n{} card(s)", deck.len());
}
