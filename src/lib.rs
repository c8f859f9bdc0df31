//! # Wordle Optimizer
//!
//! Picks the next Wordle guess from a dictionary and the feedback seen so far.
//!
//! Feedback is packed into a 10-bit [`FeedbackPattern`]; [`filter_words`]
//! keeps the words consistent with every observed guess; a [`Solver`] then
//! ranks every dictionary word as the next guess. Four strategies are
//! available: maximum entropy, smallest worst-case bucket, smallest expected
//! next candidate set, and the exact expected number of moves for small
//! candidate sets. [`Simulator`] plays whole games to evaluate a strategy.

pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod simulator;
pub mod solver;
pub mod word;

pub use dictionary::{Dictionary, DEFAULT_DICTIONARY_PATH};
pub use error::{DictionaryError, Error, ParseFeedbackError, ParseWordError, SimulationError};
pub use feedback::{is_consistent, Feedback, FeedbackPattern};
pub use filter::{filter_words, HistoryEntry};
pub use simulator::{GameRecord, Simulator, StartWordReport};
pub use solver::{
    EntropySolver, ExpectedSizeSolver, OptimalSolver, ScoredGuess, Solver, Strategy,
    WorstCaseSolver, MAX_OPTIMAL_CANDIDATES,
};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;
