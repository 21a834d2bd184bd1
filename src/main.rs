//! Mastermind - CLI
//!
//! Console code-breaking game: deduce the hidden four-digit combination
//! (digits 1-6) within the attempt budget.

use anyhow::Result;
use clap::Parser;
use mastermind::commands::run_play;
use mastermind::game::GameConfig;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack the hidden four-digit code (digits 1-6) in ten attempts",
    version,
    author
)]
struct Cli {
    /// Attempts allowed before the game is lost
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    attempts: u32,

    /// Markers only: suppress input notices and the loss-time reveal
    #[arg(short, long)]
    brief: bool,

    /// Print the secret at game start (debugging aid)
    #[arg(long, hide = true)]
    reveal: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        max_attempts: cli.attempts,
        extended_feedback: !cli.brief,
    };

    run_play(config, cli.reveal).map_err(|e| anyhow::anyhow!(e))
}
