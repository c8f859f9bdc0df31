//! Maximum-entropy guess selection.
//!
//! The entropy of a guess is the expected information (in bits) its feedback
//! reveals, assuming every candidate is equally likely to be the answer.

use log::debug;

use super::{rank_partitions, Order, Partition, ScoredGuess, Solver};
use crate::dictionary::Dictionary;
use crate::word::Word;

#[derive(Debug, Clone, Copy)]
pub struct EntropySolver<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> EntropySolver<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    /// Entropy of the feedback distribution `guess` induces over `candidates`.
    pub fn entropy(&self, guess: &Word, candidates: &[Word]) -> f64 {
        if candidates.len() <= 1 {
            return 0.0;
        }
        entropy_of(&Partition::new(guess, candidates), candidates.len() as f64)
    }
}

pub(crate) fn entropy_of(partition: &Partition, total: f64) -> f64 {
    partition
        .sizes()
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

impl Solver for EntropySolver<'_> {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn rank(&self, candidates: &[Word]) -> Vec<ScoredGuess> {
        let ranked =
            rank_partitions(self.dictionary, candidates, Order::HigherIsBetter, entropy_of);
        debug!(
            "entropy: ranked {} guesses over {} candidates",
            ranked.len(),
            candidates.len()
        );
        ranked
    }
}
