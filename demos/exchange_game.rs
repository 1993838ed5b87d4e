//! Plays the standard four-player exchange game and prints every round.

#![allow(clippy::missing_docs_in_private_items)]

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use exchange_cards::{Card, DEFAULT_PLAYERS, Dealer, GameOptions, RoundResult};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut dealer = match Dealer::new(GameOptions::default(), DEFAULT_PLAYERS, seed) {
        Ok(dealer) => dealer,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    while dealer.check_winner().is_none() {
        match dealer.play() {
            Ok(result) => print_round(&result),
            Err(err) => {
                eprintln!("Round error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(winner) = dealer.winner() {
        println!(
            "The final winner is {} with score {}",
            winner.name, winner.score
        );
    }
    ExitCode::SUCCESS
}

fn print_round(result: &RoundResult) {
    println!("Round {}", result.round);
    for hand in &result.hands {
        let cards: Vec<String> = hand.cards.iter().map(format_card).collect();
        println!("  {}: [{}] value {}", hand.name, cards.join(", "), hand.value);
    }
    match result.round_winner.and_then(|index| result.hands.get(index)) {
        Some(hand) => println!("  Winner: {} with score {}", hand.name, hand.score),
        None => println!("  Tie at {}, nobody scores", result.high_value),
    }
}

fn format_card(card: &Card) -> String {
    let rank = match card.rank {
        0 => "A".to_string(),
        10 => "J".to_string(),
        11 => "Q".to_string(),
        12 => "K".to_string(),
        rank => (rank + 1).to_string(),
    };
    let suit = match card.suit {
        0 => "♥",
        1 => "♦",
        2 => "♣",
        3 => "♠",
        _ => "?",
    };
    format!("{rank}{suit}")
}
