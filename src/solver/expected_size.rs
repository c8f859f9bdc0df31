//! Guess selection by expected size of the next candidate set.

use log::debug;

use super::{rank_partitions, Order, Partition, ScoredGuess, Solver};
use crate::dictionary::Dictionary;
use crate::word::Word;

/// Ranks guesses by `Σ size² / n`, the expected number of candidates left
/// after the guess when the answer is uniform over the current candidates.
/// Lower is better.
#[derive(Debug, Clone, Copy)]
pub struct ExpectedSizeSolver<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> ExpectedSizeSolver<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }
}

fn expected_size(partition: &Partition, total: f64) -> f64 {
    let squares: u64 = partition.sizes().map(|count| u64::from(count) * u64::from(count)).sum();
    squares as f64 / total
}

impl Solver for ExpectedSizeSolver<'_> {
    fn name(&self) -> &'static str {
        "expected-size"
    }

    fn rank(&self, candidates: &[Word]) -> Vec<ScoredGuess> {
        let ranked =
            rank_partitions(self.dictionary, candidates, Order::LowerIsBetter, expected_size);
        debug!(
            "expected-size: ranked {} guesses over {} candidates",
            ranked.len(),
            candidates.len()
        );
        ranked
    }
}
