//! Errors produced by the optimizer.

use std::path::PathBuf;

use thiserror::Error;

use crate::word::Word;

/// A `(guess, feedback)` pair could not be parsed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid word")]
    Word(#[from] ParseWordError),

    #[error("invalid feedback")]
    Feedback(#[from] ParseFeedbackError),
}

/// A string could not be turned into a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWordError {
    #[error("\"{0}\" does not have exactly five letters")]
    WrongLength(String),

    #[error("\"{0}\" contains characters outside a..z")]
    NotAlphabetic(String),
}

/// A feedback code could not be turned into a
/// [`FeedbackPattern`](crate::FeedbackPattern).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFeedbackError {
    #[error("feedback \"{0}\" must have exactly five positions")]
    WrongLength(String),

    #[error("unknown feedback symbol '{symbol}' in \"{code}\" (use 0/1/2 or b/y/g)")]
    UnknownSymbol { code: String, symbol: char },
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("could not read dictionary {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary entry #{position} is not a valid word")]
    InvalidWord {
        position: usize,
        #[source]
        source: ParseWordError,
    },

    #[error("the dictionary contains no words")]
    Empty,
}

/// Failures while playing out a game against a known target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Filtering removed every word, including the target. This can only
    /// happen when the encoder and the filter disagree.
    #[error("no candidates left for target {target} after move {moves}")]
    NoCandidates { target: Word, moves: usize },

    #[error("solver {solver} produced no guess for target {target} after move {moves}")]
    NoRecommendation {
        solver: &'static str,
        target: Word,
        moves: usize,
    },

    #[error("game for target {target} did not finish within {limit} moves")]
    DidNotTerminate { target: Word, limit: usize },
}
