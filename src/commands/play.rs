//! Interactive console game
//!
//! The classic loop: read a line, score it, print the markers, repeat
//! until the code is cracked or the attempts run out.

use crate::game::{GameConfig, Outcome, Session};
use crate::output::{print_banner, print_loss, print_turn, print_win};
use std::io::{self, Write};

/// Run interactive games until the player declines another
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails; the
/// game itself never errors on player input.
pub fn run_play(config: GameConfig, reveal_secret: bool) -> Result<(), String> {
    print_banner(config);

    loop {
        play_one_game(config, reveal_secret)?;

        match get_user_input("Play again? (yes/no)")?
            .trim()
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!(),
            _ => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn play_one_game(config: GameConfig, reveal_secret: bool) -> Result<(), String> {
    let mut session = Session::new(config, &mut rand::rng());

    if reveal_secret {
        println!("(the code is {})", session.secret());
    }

    while !session.is_over() {
        let prompt = format!("Attempt {}/{}", session.attempt(), config.max_attempts);
        let raw = get_user_input(&prompt)?;

        let Some(report) = session.play_turn(&raw) else {
            break;
        };
        print_turn(&report, config.extended_feedback);

        match report.outcome {
            Outcome::Won => print_win(report.attempt),
            Outcome::Lost => print_loss(session.secret(), config.extended_feedback),
            Outcome::InProgress => {}
        }
    }

    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input)
}
