//! Display functions for the console game

use super::formatters::turn_line;
use crate::core::Code;
use crate::game::{GameConfig, TurnReport};
use crate::{CODE_LENGTH, MAX_DIGIT};
use colored::Colorize;

/// Print the welcome banner and the rules
pub fn print_banner(config: GameConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "M A S T E R M I N D".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nI picked a {CODE_LENGTH}-digit code, digits 1 through {MAX_DIGIT}.");
    println!(
        "You have {} attempts to crack it. After each guess:",
        config.max_attempts
    );
    println!(
        "  {} for every digit that is right and in the right place",
        "+".green().bold()
    );
    println!(
        "  {} for every digit that is right but in the wrong place",
        "-".yellow().bold()
    );
    println!("Nothing is printed for digits that miss entirely.\n");
}

/// Print one attempt's feedback line
pub fn print_turn(report: &TurnReport, extended: bool) {
    println!("  {}", turn_line(report, extended));
}

/// Print the win acknowledgment
pub fn print_win(attempt: u32) {
    let noun = if attempt == 1 { "attempt" } else { "attempts" };

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "{}",
        format!("You cracked the code in {attempt} {noun}!")
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());
}

/// Print the loss message, revealing the secret when extended feedback is on
pub fn print_loss(secret: &Code, extended: bool) {
    println!("\n{}", "Out of attempts!".red().bold());

    if extended {
        println!(
            "The code was {}",
            secret.to_string().bright_yellow().bold()
        );
    }
}
