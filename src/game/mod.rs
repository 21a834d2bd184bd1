//! Game session state machine
//!
//! A [`Session`] owns the secret, the attempt counter and the outcome for
//! one game. Independent sessions share nothing.

mod config;
mod session;

pub use config::GameConfig;
pub use session::{Outcome, Session, TurnReport};
