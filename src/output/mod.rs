//! Terminal output formatting
//!
//! Display utilities for the console game.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_loss, print_turn, print_win};
