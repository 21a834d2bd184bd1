//! Guess scoring
//!
//! Compares a guess against the secret and counts exact matches (right
//! digit, right place), partial matches (right digit, wrong place) and
//! misses. Rendered feedback is one `+` per exact match followed by one
//! `-` per partial match, nothing for misses; all `+` markers come first.

use super::{Code, Guess};
use crate::CODE_LENGTH;
use std::fmt;

/// Scored feedback for one attempt
///
/// Invariants: `exact + misses == CODE_LENGTH` and
/// `exact + partial <= CODE_LENGTH`. A miss count of zero is a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    exact: u8,
    partial: u8,
    misses: u8,
}

impl Feedback {
    /// Every digit placed correctly (the winning feedback)
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH as u8,
        partial: 0,
        misses: 0,
    };

    /// Score `guess` against `secret`
    ///
    /// Two passes, so repeated digits earn no more credit than the secret
    /// actually holds:
    ///
    /// 1. Exact pass: positions where guess and secret agree score an exact
    ///    match and claim that secret digit; every other position counts as
    ///    a miss and leaves its secret digit available for pass two.
    /// 2. Partial pass: each non-exact position with a non-zero guess digit
    ///    scores a partial match iff availability for that digit value is
    ///    still positive, consuming one unit.
    ///
    /// Zero guess digits (unfilled slots from malformed input) never match
    /// and never consume availability; secrets never contain zero.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback, Guess};
    ///
    /// let secret = Code::new([1, 1, 2, 3]).unwrap();
    /// let guess = Guess::new([1, 2, 2, 2]).unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// // Exact at positions 0 and 2; the two leftover 2s in the guess earn
    /// // nothing, because the secret's only 2 was claimed exactly
    /// assert_eq!(feedback.exact(), 2);
    /// assert_eq!(feedback.partial(), 0);
    /// ```
    #[must_use]
    pub fn score(guess: &Guess, secret: &Code) -> Self {
        let mut exact = 0u8;
        let mut partial = 0u8;
        let mut misses = 0u8;

        // Availability pool: how many of each secret digit may still earn
        // partial credit. Re-created per call, never shared across turns.
        let mut available = secret.digit_counts();

        // First pass: exact matches claim their digit from the pool
        for i in 0..CODE_LENGTH {
            if guess.digit_at(i) == secret.digit_at(i) {
                exact += 1;

                if let Some(count) = available.get_mut(&secret.digit_at(i)) {
                    *count = count.saturating_sub(1);
                }
            } else {
                misses += 1;
            }
        }

        // Second pass: wrong-position matches, bounded by the pool
        for i in 0..CODE_LENGTH {
            let digit = guess.digit_at(i);
            if digit != 0
                && digit != secret.digit_at(i)
                && let Some(count) = available.get_mut(&digit)
                && *count > 0
            {
                partial += 1;
                *count -= 1;
            }
        }

        Self {
            exact,
            partial,
            misses,
        }
    }

    /// Number of digits correct in both value and position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of digits present in the secret but guessed in the wrong position
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Number of positions where guess and secret disagree
    #[inline]
    #[must_use]
    pub const fn misses(self) -> u8 {
        self.misses
    }

    /// Check whether this feedback wins the game
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.misses == 0
    }

    /// Render the marker string: all `+` markers first, then all `-`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback, Guess};
    ///
    /// let secret = Code::new([1, 2, 3, 4]).unwrap();
    /// let guess = Guess::new([1, 2, 4, 3]).unwrap();
    /// assert_eq!(Feedback::score(&guess, &secret).markers(), "++--");
    /// ```
    #[must_use]
    pub fn markers(self) -> String {
        let mut out = String::with_capacity((self.exact + self.partial) as usize);
        for _ in 0..self.exact {
            out.push('+');
        }
        for _ in 0..self.partial {
            out.push('-');
        }
        out
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.markers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_DIGIT;

    fn score(secret: [u8; CODE_LENGTH], guess: [u8; CODE_LENGTH]) -> Feedback {
        let secret = Code::new(secret).unwrap();
        let guess = Guess::new(guess).unwrap();
        Feedback::score(&guess, &secret)
    }

    #[test]
    fn feedback_perfect_constant() {
        assert_eq!(Feedback::PERFECT.exact(), 4);
        assert_eq!(Feedback::PERFECT.partial(), 0);
        assert_eq!(Feedback::PERFECT.misses(), 0);
        assert!(Feedback::PERFECT.is_win());
    }

    #[test]
    fn feedback_guessing_the_secret_wins() {
        let feedback = score([3, 1, 4, 1], [3, 1, 4, 1]);
        assert_eq!(feedback, Feedback::PERFECT);
        assert!(feedback.is_win());
    }

    #[test]
    fn feedback_no_overlap() {
        let feedback = score([1, 1, 2, 2], [3, 4, 5, 6]);
        assert_eq!(feedback.exact(), 0);
        assert_eq!(feedback.partial(), 0);
        assert_eq!(feedback.misses(), 4);
        assert!(!feedback.is_win());
    }

    #[test]
    fn feedback_swapped_pair() {
        // Two digits exact, the other two swapped into each other's place
        let feedback = score([1, 2, 3, 4], [2, 1, 3, 4]);
        assert_eq!(feedback.exact(), 2);
        assert_eq!(feedback.partial(), 2);
        assert_eq!(feedback.misses(), 2);
    }

    #[test]
    fn feedback_duplicate_credit_is_bounded() {
        // The secret's only 2 is claimed by the exact match at position 2;
        // the two leftover 2s in the guess earn nothing
        let feedback = score([1, 1, 2, 3], [1, 2, 2, 2]);
        assert_eq!(feedback.exact(), 2);
        assert_eq!(feedback.partial(), 0);
        assert_eq!(feedback.misses(), 2);
    }

    #[test]
    fn feedback_repeated_guess_digit_earns_one_partial() {
        // One 1 in the secret, off-position: the three guessed 1s share a
        // single unit of availability
        let feedback = score([2, 3, 1, 4], [1, 1, 6, 1]);
        assert_eq!(feedback.exact(), 0);
        assert_eq!(feedback.partial(), 1);
    }

    #[test]
    fn feedback_duplicates_in_secret() {
        // Both guessed 1s land on wrong positions of a secret with two 1s
        let feedback = score([1, 1, 2, 3], [2, 3, 1, 1]);
        assert_eq!(feedback.exact(), 0);
        assert_eq!(feedback.partial(), 4);
    }

    #[test]
    fn feedback_all_zero_guess_scores_nothing() {
        let feedback = score([1, 2, 3, 4], [0, 0, 0, 0]);
        assert_eq!(feedback.exact(), 0);
        assert_eq!(feedback.partial(), 0);
        assert_eq!(feedback.misses(), 4);
    }

    #[test]
    fn feedback_partial_zero_slots_ignored() {
        // The zeros neither match nor drain availability for the real digits
        let feedback = score([1, 2, 3, 4], [4, 1, 0, 0]);
        assert_eq!(feedback.exact(), 0);
        assert_eq!(feedback.partial(), 2);
        assert_eq!(feedback.misses(), 4);
    }

    #[test]
    fn feedback_exact_plus_misses_is_code_length() {
        // Sweep every secret against a few guess transforms
        for a in 1..=MAX_DIGIT {
            for b in 1..=MAX_DIGIT {
                for c in 1..=MAX_DIGIT {
                    for d in 1..=MAX_DIGIT {
                        let digits = [a, b, c, d];
                        let reversed = [d, c, b, a];
                        let rotated = [b, c, d, a];
                        let zeroed = [a, 0, c, 0];

                        for guess in [digits, reversed, rotated, zeroed] {
                            let feedback = score(digits, guess);
                            assert_eq!(feedback.exact() + feedback.misses(), 4);
                            assert!(feedback.exact() + feedback.partial() <= 4);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn feedback_markers_exact_first() {
        let feedback = score([1, 2, 3, 4], [1, 3, 2, 6]);
        assert_eq!(feedback.exact(), 1);
        assert_eq!(feedback.partial(), 2);
        assert_eq!(feedback.markers(), "+--");
    }

    #[test]
    fn feedback_markers_empty_on_total_miss() {
        let feedback = score([1, 1, 1, 1], [2, 2, 2, 2]);
        assert_eq!(feedback.markers(), "");
    }

    #[test]
    fn feedback_display_matches_markers() {
        let feedback = score([1, 2, 3, 4], [2, 1, 3, 4]);
        assert_eq!(format!("{feedback}"), "++--");
    }
}
