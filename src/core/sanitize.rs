//! Tolerant input parsing
//!
//! Turns one raw line of player input into a guess, flagging anything
//! suspicious without ever rejecting the attempt. Whatever subset of the
//! input conforms to the digit range is played; the rest is noted.

use super::Guess;
use crate::{CODE_LENGTH, MAX_DIGIT};

/// Quality flags for one line of input
///
/// Advisory only, and independent of each other: a flagged guess is still
/// evaluated and still consumes an attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFlags {
    /// Fewer than [`CODE_LENGTH`] valid digits were supplied
    pub too_short: bool,
    /// More than [`CODE_LENGTH`] valid digits; the excess was ignored
    pub too_long: bool,
    /// Something other than whitespace or an in-range digit turned up
    pub improper: bool,
}

impl InputFlags {
    /// Check whether any flag is raised
    #[inline]
    #[must_use]
    pub const fn any(self) -> bool {
        self.too_short || self.too_long || self.improper
    }
}

/// A sanitized line of input: the guess plus what was odd about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedInput {
    pub guess: Guess,
    pub flags: InputFlags,
}

/// Sanitize one raw line of player input
///
/// Scans left to right with a fill cursor:
/// - whitespace is skipped silently;
/// - a valid digit (1..=[`MAX_DIGIT`]) is packed at the cursor — unless the
///   guess is already full, in which case `too_long` is raised and the rest
///   of the line is not inspected;
/// - a zero or out-of-range digit raises `improper` and fills nothing;
/// - any other character raises `improper` and fills nothing.
///
/// Fewer than [`CODE_LENGTH`] valid digits leaves the tail at zero and
/// raises `too_short`; an empty line yields the all-zero guess.
///
/// # Examples
/// ```
/// use mastermind::core::sanitize;
///
/// let input = sanitize("1 2 3 4");
/// assert_eq!(input.guess.digits(), &[1, 2, 3, 4]);
/// assert!(!input.flags.any());
///
/// let input = sanitize("1a34");
/// assert_eq!(input.guess.digits(), &[1, 3, 4, 0]);
/// assert!(input.flags.improper);
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> SanitizedInput {
    let mut digits = [0u8; CODE_LENGTH];
    let mut cursor = 0;
    let mut flags = InputFlags::default();

    for ch in raw.chars() {
        if ch.is_whitespace() {
            continue;
        }

        if let Some(value) = ch.to_digit(10) {
            let value = value as u8;
            if value == 0 || value > MAX_DIGIT {
                flags.improper = true;
                continue;
            }

            if cursor == CODE_LENGTH {
                // A fifth valid digit: the guess is full, stop scanning
                flags.too_long = true;
                break;
            }

            digits[cursor] = value;
            cursor += 1;
        } else {
            flags.improper = true;
        }
    }

    if cursor < CODE_LENGTH {
        flags.too_short = true;
    }

    SanitizedInput {
        guess: Guess::from_digits(digits),
        flags,
    }
}
