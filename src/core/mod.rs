//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod feedback;
mod guess;
mod sanitize;

pub use code::{Code, CodeError};
pub use feedback::Feedback;
pub use guess::Guess;
pub use sanitize::{InputFlags, SanitizedInput, sanitize};
