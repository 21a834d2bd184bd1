//! The hidden combination
//!
//! A Code stores the four secret digits, each in 1..=6. Zero never appears
//! in a secret, which is what lets unfilled guess slots never match.

use crate::{CODE_LENGTH, MAX_DIGIT};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// The secret combination the player is trying to deduce
///
/// Immutable once constructed; a game session owns exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    digits: [u8; CODE_LENGTH],
}

/// Error type for out-of-range combination digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    DigitOutOfRange { position: usize, value: u8 },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DigitOutOfRange { position, value } => {
                write!(f, "digit {value} at position {position} is out of range")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a Code from explicit digits
    ///
    /// # Errors
    /// Returns `CodeError::DigitOutOfRange` if any digit is 0 or greater
    /// than [`MAX_DIGIT`].
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new([1, 5, 6, 2]).unwrap();
    /// assert_eq!(code.to_string(), "1562");
    ///
    /// assert!(Code::new([0, 1, 2, 3]).is_err());
    /// assert!(Code::new([1, 2, 3, 7]).is_err());
    /// ```
    pub fn new(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        for (position, &value) in digits.iter().enumerate() {
            if !(1..=MAX_DIGIT).contains(&value) {
                return Err(CodeError::DigitOutOfRange { position, value });
            }
        }

        Ok(Self { digits })
    }

    /// Draw a fresh secret, each digit an independent uniform pick in 1..=[`MAX_DIGIT`]
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0u8; CODE_LENGTH];
        for slot in &mut digits {
            *slot = rng.random_range(1..=MAX_DIGIT);
        }

        Self { digits }
    }

    /// Get the digits as an array
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.digits
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= [`CODE_LENGTH`]
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Count of each digit value in the code
    ///
    /// Seeds the availability pool for partial-match scoring.
    #[inline]
    pub(crate) fn digit_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &digit in &self.digits {
            *counts.entry(digit).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
