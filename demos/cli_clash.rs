//! CLI creature clash example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clashrs::{ClashGame, Creature, DrawOutcome, GameOptions, RoundWinner, standard_catalog};

fn main() {
    println!("Creature Clash CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = ClashGame::new(standard_catalog(), GameOptions::default(), seed);

    loop {
        let score = game.score();
        println!();
        println!(
            "Score - Player: {}  Computer: {}  (creatures remaining: {})",
            score.player,
            score.computer,
            game.cards_remaining()
        );

        match game.draw() {
            Ok(DrawOutcome::Cards { player, computer }) => {
                print_matchup(&player, &computer);

                loop {
                    let choice = prompt_line("Challenge with which trait? ");
                    match choice.as_str() {
                        "q" | "quit" => return,
                        name => match game.select_trait(name) {
                            Ok(result) => {
                                print_result(&result);
                                break;
                            }
                            Err(err) => println!("Selection error: {err}"),
                        },
                    }
                }
            }
            Ok(DrawOutcome::GameOver) => {
                let score = game.score();
                println!("Game over! Final score - Player: {}  Computer: {}", score.player, score.computer);

                match prompt_line("Play again? (y/n): ").as_str() {
                    "y" | "yes" => game.start(),
                    _ => {
                        println!("Goodbye.");
                        return;
                    }
                }
            }
            Err(err) => {
                println!("Draw error: {err}");
                return;
            }
        }
    }
}

fn print_matchup(player: &Creature, computer: &Creature) {
    println!("Your creature: {}", player.name);
    for name in player.trait_names() {
        if let Some(spec) = player.trait_spec(name) {
            println!("  {name}: {spec}");
        }
    }
    // The computer's dice stay hidden until the roll.
    println!("Computer's creature: {}", computer.name);
    for name in computer.trait_names() {
        println!("  {name}: ?");
    }
}

fn print_result(result: &clashrs::ClashResult) {
    match result.winner {
        RoundWinner::Player => println!(
            "You win {} with {} vs {}!",
            result.trait_name, result.player_roll, result.computer_roll
        ),
        RoundWinner::Computer => println!(
            "Computer wins {} with {} vs {}!",
            result.trait_name, result.computer_roll, result.player_roll
        ),
        RoundWinner::Tie => println!("Tie! Both rolled {}", result.player_roll),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::from("q");
    }
    line.trim().to_lowercase()
}
