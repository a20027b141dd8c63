//! Terminal blackjack frontend.
//!
//! Maps the classic key bindings onto the engine: `h` hits, `s` stands, `r`
//! starts a new round, `q` quits.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use vingt_et_un::{Controls, Game, GameStatus, HandView, Snapshot};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    println!("Blackjack (h: hit, s: stand, r: new round, q: quit)");

    let mut game = Game::new(seed);
    run(&mut game);
}

fn run(game: &mut impl Controls) {
    if let Err(err) = game.reset() {
        eprintln!("Deal error: {err}");
        return;
    }
    render(&game.snapshot());

    loop {
        let result = match prompt("Command: ").as_str() {
            "h" | "hit" => game.player_hit(),
            "s" | "stand" => game.player_stand(),
            "r" | "reset" => game.reset(),
            "q" | "quit" | "" => return,
            _ => {
                println!("Unknown command.");
                continue;
            }
        };

        // Deck exhaustion is an invariant violation, not a playable state.
        if let Err(err) = result {
            eprintln!("Deal error: {err}");
            return;
        }

        render(&game.snapshot());
    }
}

fn render(snapshot: &Snapshot) {
    println!();
    println!(
        "Player ({:>2}): {}",
        snapshot.player.total,
        format_hand(&snapshot.player)
    );
    println!(
        "Dealer ({:>2}): {}",
        snapshot.dealer.total,
        format_hand(&snapshot.dealer)
    );
    println!("Status: {}", status_line(snapshot.status));
    println!(
        "Wins: player {} / dealer {}",
        snapshot.player_wins, snapshot.dealer_wins
    );
}

fn format_hand(hand: &HandView) -> String {
    hand.cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

const fn status_line(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "In progress...",
        GameStatus::PlayerWins => "Player WINS... press 'r' for a new round",
        GameStatus::DealerWins => "Dealer WINS... press 'r' for a new round",
        GameStatus::Tie => "TIE game... press 'r' for a new round",
    }
}

fn prompt(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_lowercase()
}
