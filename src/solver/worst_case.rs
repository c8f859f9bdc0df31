//! Minimax guess selection: keep the largest feedback bucket small.

use log::debug;

use super::{rank_partitions, Order, Partition, ScoredGuess, Solver};
use crate::dictionary::Dictionary;
use crate::word::Word;

/// Ranks guesses by the size of their largest bucket, smallest first, i.e.
/// by how many candidates could survive in the worst case.
#[derive(Debug, Clone, Copy)]
pub struct WorstCaseSolver<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> WorstCaseSolver<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }
}

fn largest_bucket(partition: &Partition, _total: f64) -> f64 {
    partition.sizes().max().unwrap_or(0) as f64
}

impl Solver for WorstCaseSolver<'_> {
    fn name(&self) -> &'static str {
        "worst-case"
    }

    fn rank(&self, candidates: &[Word]) -> Vec<ScoredGuess> {
        let ranked =
            rank_partitions(self.dictionary, candidates, Order::LowerIsBetter, largest_bucket);
        debug!(
            "worst-case: ranked {} guesses over {} candidates",
            ranked.len(),
            candidates.len()
        );
        ranked
    }
}
