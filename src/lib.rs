//! Mastermind
//!
//! A console code-breaking game: a hidden four-digit combination (digits 1-6)
//! must be deduced within ten attempts, with per-attempt `+`/`-` feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Feedback, sanitize};
//!
//! let secret = Code::new([1, 2, 3, 4]).unwrap();
//! let input = sanitize("2 1 3 4");
//!
//! let feedback = Feedback::score(&input.guess, &secret);
//! assert_eq!(feedback.to_string(), "++--");
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

/// Number of digits in the combination
pub const CODE_LENGTH: usize = 4;

/// Largest digit value in play (the smallest is always 1)
pub const MAX_DIGIT: u8 = 6;
