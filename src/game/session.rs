//! One game from first guess to win or loss

use super::GameConfig;
use crate::core::{Code, Feedback, Guess, InputFlags, sanitize};
use rand::Rng;

/// Where a session stands
///
/// Transitions are monotonic: `InProgress` moves to `Won` or `Lost` and
/// both of those are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Attempts remain and the code is uncracked
    InProgress,
    /// The code was guessed exactly
    Won,
    /// The attempt budget ran out
    Lost,
}

/// Everything that came out of one attempt
#[derive(Debug, Clone)]
pub struct TurnReport {
    /// 1-based number of the attempt this turn consumed
    pub attempt: u32,
    /// The sanitized guess that was evaluated
    pub guess: Guess,
    pub feedback: Feedback,
    pub flags: InputFlags,
    /// Session outcome after this turn
    pub outcome: Outcome,
}

/// One game: the secret, the attempt counter and the outcome
///
/// Constructing a session starts the game — the secret is drawn and the
/// first attempt is open. Concurrent games just need separate sessions.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    secret: Code,
    attempt: u32,
    outcome: Outcome,
}

impl Session {
    /// Start a game with a freshly drawn secret
    #[must_use]
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        Self::with_secret(config, Code::random(rng))
    }

    /// Start a game against a known secret
    #[must_use]
    pub const fn with_secret(config: GameConfig, secret: Code) -> Self {
        Self {
            config,
            secret,
            attempt: 1,
            outcome: Outcome::InProgress,
        }
    }

    /// Play one attempt from a raw input line
    ///
    /// The line is sanitized, scored against the secret, and the session
    /// transitions: a zero-miss score wins; exhausting the attempt budget
    /// loses; otherwise the next attempt opens. A malformed or short guess
    /// still consumes its attempt.
    ///
    /// Returns `None` once the session is over — a finished game reads no
    /// further input.
    pub fn play_turn(&mut self, raw: &str) -> Option<TurnReport> {
        if self.is_over() {
            return None;
        }

        let input = sanitize(raw);
        let feedback = Feedback::score(&input.guess, &self.secret);
        let attempt = self.attempt;

        if feedback.is_win() {
            self.outcome = Outcome::Won;
        } else if attempt >= self.config.max_attempts {
            self.outcome = Outcome::Lost;
        } else {
            self.attempt += 1;
        }

        Some(TurnReport {
            attempt,
            guess: input.guess,
            feedback,
            flags: input.flags,
            outcome: self.outcome,
        })
    }

    /// Get the session outcome
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Check whether the session reached a terminal state
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.outcome, Outcome::InProgress)
    }

    /// 1-based number of the attempt currently open
    #[inline]
    #[must_use]
    pub const fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Attempts still available, including the open one
    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        match self.outcome {
            Outcome::InProgress => self.config.max_attempts - self.attempt + 1,
            Outcome::Won | Outcome::Lost => 0,
        }
    }

    /// The hidden combination, for the loss-time reveal
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// The configuration this session was started with
    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }
}
