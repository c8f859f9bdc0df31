//! Feedback calculation for Wordle guesses.
//!
//! A guess is scored against a target one position at a time. Each position
//! gets two bits of a packed signal: bit `2i` is the yellow flag and bit
//! `2i + 1` the green flag. Green positions never carry the yellow flag, so
//! only 3^5 = 243 of the 1024 encodable values ever occur.

use std::fmt;

use crate::error::ParseFeedbackError;
use crate::word::Word;
use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word, or all of its occurrences are accounted for (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (`2`/`g` green, `1`/`y` yellow, `0`/`b`/`x` gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }

    /// The two-bit field for this state; doubles as its base-3 digit.
    const fn bits(self) -> u16 {
        match self {
            Feedback::Absent => 0b00,
            Feedback::Present => 0b01,
            Feedback::Correct => 0b10,
        }
    }

    fn from_bits(bits: u16) -> Self {
        if bits & 0b10 != 0 {
            Feedback::Correct
        } else if bits & 0b01 != 0 {
            Feedback::Present
        } else {
            Feedback::Absent
        }
    }
}

/// The packed 10-bit feedback signal for a 5-letter guess.
///
/// This is the key solvers bucket candidates by, and its bit layout is
/// stable: position `i` occupies bits `2i` (yellow) and `2i + 1` (green).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeedbackPattern(u16);

impl FeedbackPattern {
    /// The pattern indicating all correct (winning), `0b10_1010_1010`.
    pub const ALL_CORRECT: Self = Self(0b10_1010_1010);

    /// Number of distinct values the packed signal can hold.
    pub const SIGNAL_SPACE: usize = 1 << (2 * WORD_LENGTH);

    /// Number of reachable patterns (3^5), the size of a compact bucket table.
    pub const NUM_PATTERNS: usize = 243;

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let bits = feedbacks
            .iter()
            .enumerate()
            .fold(0, |acc, (i, fb)| acc | fb.bits() << (2 * i));
        Self(bits)
    }

    /// Wrap a raw signal. Values outside the 10-bit range, or with both flags
    /// set at some position, are rejected.
    pub fn from_bits(bits: u16) -> Option<Self> {
        if bits as usize >= Self::SIGNAL_SPACE {
            return None;
        }
        let valid = (0..WORD_LENGTH).all(|i| (bits >> (2 * i)) & 0b11 != 0b11);
        valid.then_some(Self(bits))
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    /// Calculate the feedback pattern for a guess against a target word.
    ///
    /// Greens are assigned first and consume their letter from the target's
    /// budget; yellows are then handed out left to right while budget for
    /// the letter remains.
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess_bytes = guess.as_bytes();
        let target_bytes = target.as_bytes();

        let mut bits = 0u16;
        let mut remaining = [0u8; 26];
        for i in 0..WORD_LENGTH {
            remaining[target.letter(i)] += 1;
        }

        for i in 0..WORD_LENGTH {
            if guess_bytes[i] == target_bytes[i] {
                bits |= 1 << (2 * i + 1);
                remaining[guess.letter(i)] -= 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if bits & (1 << (2 * i + 1)) != 0 {
                continue;
            }
            let letter = guess.letter(i);
            if remaining[letter] > 0 {
                bits |= 1 << (2 * i);
                remaining[letter] -= 1;
            }
        }

        Self(bits)
    }

    /// The feedback at a single position.
    pub fn at(self, position: usize) -> Feedback {
        Feedback::from_bits(self.0 >> (2 * position))
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        std::array::from_fn(|i| self.at(i))
    }

    /// Position of this pattern in the compact range `0..NUM_PATTERNS`.
    #[inline]
    pub fn index(self) -> usize {
        (0..WORD_LENGTH)
            .rev()
            .fold(0, |acc, i| acc * 3 + self.at(i).bits() as usize)
    }

    /// Check if this pattern represents a win (all correct)
    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Parse a pattern from a string like `"gybbb"` or `"21000"`.
    ///
    /// With digits, each digit's value becomes the position's two-bit field.
    pub fn parse(s: &str) -> Result<Self, ParseFeedbackError> {
        if s.chars().count() != WORD_LENGTH {
            return Err(ParseFeedbackError::WrongLength(s.to_string()));
        }
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for (slot, c) in feedbacks.iter_mut().zip(s.chars()) {
            *slot = Feedback::from_char(c).ok_or_else(|| ParseFeedbackError::UnknownSymbol {
                code: s.to_string(),
                symbol: c,
            })?;
        }
        Ok(Self::new(feedbacks))
    }

    /// The `0`/`1`/`2` digit string accepted by [`FeedbackPattern::parse`].
    pub fn to_code(self) -> String {
        self.to_feedbacks()
            .iter()
            .map(|fb| char::from(b'0' + fb.bits() as u8))
            .collect()
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// Whether `candidate` could be the target, given that `guess` produced
/// `feedback`.
#[inline]
pub fn is_consistent(candidate: &Word, guess: &Word, feedback: FeedbackPattern) -> bool {
    FeedbackPattern::calculate(guess, candidate) == feedback
}
