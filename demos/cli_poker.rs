//! CLI five-card poker example.
//!
//! Seats the names given on the command line (or a default table) and deals
//! rounds until you quit. Set `RUST_LOG=debug` to watch the engine work.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pokrs::{Card, GameId, GameOptions, GameRegistry, Hand, Player, Rank, RoundResult, Suit};

fn main() {
    env_logger::init();
    println!("Five-card poker CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut names: Vec<String> = env::args().skip(1).collect();
    if names.is_empty() {
        names = ["you", "justin", "leah"].map(String::from).to_vec();
    }
    let names: Vec<&str> = names.iter().map(String::as_str).collect();

    let registry: GameRegistry = GameRegistry::new(GameOptions::default(), seed);
    let id = registry.create();
    println!("Game {id}");

    loop {
        if let Err(err) = registry.reset(id) {
            println!("Reset error: {err}");
            break;
        }

        let players = match registry.deal(id, &names) {
            Ok(players) => players,
            Err(err) => {
                println!("Deal error: {err}");
                break;
            }
        };
        print_table(&players);

        match prompt_line("[enter] showdown, [c] claim a hand, [q] quit: ").as_str() {
            "q" | "quit" => break,
            "c" | "claim" => claim_hand(&registry, id, &players),
            _ => {}
        }

        match registry.evaluate(id) {
            Ok(result) => print_result(&result),
            Err(err) => println!("Evaluate error: {err}"),
        }

        if matches!(prompt_line("Another round? (y/n): ").as_str(), "n" | "no" | "q") {
            break;
        }
    }

    registry.remove(id);
    println!("Goodbye.");
}

/// Lets the user type in a hand for a player, to see validation at work.
fn claim_hand(registry: &GameRegistry, id: GameId, players: &[Player]) {
    let Some(player) = players.first() else {
        return;
    };

    let input = prompt_line(&format!("Cards for {} (e.g. 'as ks qs js ts'): ", player.name()));
    match input.parse::<Hand>() {
        Ok(hand) => {
            if let Err(err) = registry.submit_hand(id, player.name(), hand) {
                println!("Submit error: {err}");
            }
        }
        Err(err) => println!("Could not read that hand: {err}"),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(players: &[Player]) {
    println!();
    for player in players {
        let rank = player
            .hand_rank()
            .map_or_else(String::new, |rank| format!("  ({rank})"));
        println!("{:>10}: {}{rank}", player.name(), format_hand(player.hand()));
    }
}

fn print_result(result: &RoundResult) {
    println!();
    for player in &result.players {
        let status = if player.is_winner() {
            colorize("WIN ", "32")
        } else if player.has_valid_hand() {
            "    ".to_string()
        } else {
            colorize("VOID", "90")
        };
        let rank = player
            .value()
            .map_or_else(|| "-".to_string(), |value| value.category.to_string());
        println!(
            "{status} {:>10}: {}  {rank}",
            player.name(),
            format_hand(player.hand())
        );
    }

    match result.winner_count() {
        0 => println!("No valid hands this round."),
        1 => {}
        n => println!("{n}-way tie."),
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("h", "31"),
        Suit::Diamonds => ("d", "31"),
        Suit::Clubs => ("c", "32"),
        Suit::Spades => ("s", "34"),
    };

    let rank = match card.rank {
        Rank::Ten => "T".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        Rank::Ace => "A".to_string(),
        other => other.value().to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
