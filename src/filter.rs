//! Narrowing the candidate set from the guesses made so far.

use crate::error::Error;
use crate::feedback::{is_consistent, FeedbackPattern};
use crate::word::Word;

/// One observed guess and the feedback it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    pub guess: Word,
    pub feedback: FeedbackPattern,
}

impl HistoryEntry {
    pub fn new(guess: Word, feedback: FeedbackPattern) -> Self {
        Self { guess, feedback }
    }

    /// The entry `guess` would produce if `target` were the answer.
    pub fn observe(guess: Word, target: &Word) -> Self {
        Self::new(guess, FeedbackPattern::calculate(&guess, target))
    }

    /// Parse a `(guess, feedback code)` pair such as `("crane", "20100")`.
    pub fn parse(guess: &str, feedback: &str) -> Result<Self, Error> {
        Ok(Self::new(guess.parse()?, FeedbackPattern::parse(feedback)?))
    }

    #[inline]
    pub fn admits(&self, candidate: &Word) -> bool {
        is_consistent(candidate, &self.guess, self.feedback)
    }
}

/// Keep the candidates consistent with every entry of `history`, in input
/// order.
///
/// The result depends only on the full history, so callers may pass either the
/// whole dictionary or last turn's survivors.
pub fn filter_words(candidates: &[Word], history: &[HistoryEntry]) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| history.iter().all(|entry| entry.admits(candidate)))
        .copied()
        .collect()
}
