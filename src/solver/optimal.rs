//! Exact expected-move minimization by exhaustive search over candidate
//! subsets.
//!
//! Subsets of the candidate list are bitmasks over candidate positions, so a
//! memo table needs `2^n` slots. The search is only run for at most
//! [`MAX_OPTIMAL_CANDIDATES`] candidates; larger sets are handed to the
//! [`EntropySolver`].

use log::debug;
use rayon::prelude::*;

use super::{sort_ranked, EntropySolver, Order, ScoredGuess, Solver};
use crate::dictionary::Dictionary;
use crate::feedback::FeedbackPattern;
use crate::word::Word;

/// Largest candidate set searched exactly.
pub const MAX_OPTIMAL_CANDIDATES: usize = 8;

/// Subset of candidate positions; bit `i` is candidate `i`.
type Mask = u16;

/// Scores guesses by the exact expected number of guesses (this one included)
/// needed to find the answer, under a uniform prior over the candidates.
/// Lower is better.
#[derive(Debug, Clone, Copy)]
pub struct OptimalSolver<'d> {
    dictionary: &'d Dictionary,
    fallback: EntropySolver<'d>,
}

impl<'d> OptimalSolver<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            fallback: EntropySolver::new(dictionary),
        }
    }
}

impl Solver for OptimalSolver<'_> {
    fn name(&self) -> &'static str {
        "optimal"
    }

    fn rank(&self, candidates: &[Word]) -> Vec<ScoredGuess> {
        match candidates.len() {
            0 => Vec::new(),
            1 => vec![ScoredGuess {
                word: candidates[0],
                score: 0.0,
                is_candidate: true,
            }],
            n if n > MAX_OPTIMAL_CANDIDATES => {
                debug!(
                    "optimal: {} candidates exceeds {}, ranking by entropy instead",
                    n, MAX_OPTIMAL_CANDIDATES
                );
                self.fallback.rank(candidates)
            }
            _ => Search::new(self.dictionary.words(), candidates).rank(),
        }
    }
}

/// State of one `rank` call. The memo is only meaningful for this exact
/// candidate ordering and is dropped with the search.
struct Search<'a> {
    guesses: &'a [Word],
    candidates: &'a [Word],
    /// `signals[g * n + c]`: feedback for guess `g` against candidate `c`.
    signals: Vec<FeedbackPattern>,
    memo: Vec<Option<f64>>,
}

impl<'a> Search<'a> {
    fn new(guesses: &'a [Word], candidates: &'a [Word]) -> Self {
        debug_assert!((2..=MAX_OPTIMAL_CANDIDATES).contains(&candidates.len()));
        let signals = guesses
            .par_iter()
            .flat_map_iter(|guess| {
                candidates
                    .iter()
                    .map(move |candidate| FeedbackPattern::calculate(guess, candidate))
            })
            .collect();
        Self {
            guesses,
            candidates,
            signals,
            memo: vec![None; 1 << candidates.len()],
        }
    }

    fn full_mask(&self) -> Mask {
        ((1u32 << self.candidates.len()) - 1) as Mask
    }

    /// Split `mask` by the feedback of guess `g`. Returns `None` when every
    /// member lands in the same bucket, since such a guess learns nothing.
    fn buckets(&self, g: usize, mask: Mask) -> Option<Vec<(FeedbackPattern, Mask)>> {
        let n = self.candidates.len();
        let row = &self.signals[g * n..(g + 1) * n];
        let mut buckets: Vec<(FeedbackPattern, Mask)> = Vec::with_capacity(n);
        for (c, &signal) in row.iter().enumerate() {
            if mask & (1 << c) == 0 {
                continue;
            }
            match buckets.iter_mut().find(|(s, _)| *s == signal) {
                Some((_, bucket)) => *bucket |= 1 << c,
                None => buckets.push((signal, 1 << c)),
            }
        }
        (buckets.len() > 1).then_some(buckets)
    }

    /// Expected moves if guess `g` is played while `mask` remains.
    fn guess_value(&mut self, g: usize, mask: Mask) -> Option<f64> {
        let buckets = self.buckets(g, mask)?;
        let total = f64::from(mask.count_ones());
        let mut value = 1.0;
        for (signal, bucket) in buckets {
            if signal.is_win() {
                continue;
            }
            value += f64::from(bucket.count_ones()) / total * self.expected_moves(bucket);
        }
        Some(value)
    }

    /// Minimum expected moves to finish from `mask`.
    ///
    /// Every recursive call receives a strict subset of `mask`, so the depth
    /// is bounded by the candidate count.
    fn expected_moves(&mut self, mask: Mask) -> f64 {
        if mask.count_ones() == 1 {
            return 1.0;
        }
        if let Some(value) = self.memo[mask as usize] {
            return value;
        }
        let best = (0..self.guesses.len())
            .filter_map(|g| self.guess_value(g, mask))
            .fold(f64::INFINITY, f64::min);
        self.memo[mask as usize] = Some(best);
        best
    }

    fn rank(mut self) -> Vec<ScoredGuess> {
        let full = self.full_mask();
        let guesses = self.guesses;
        let candidates = self.candidates;

        let mut ranked: Vec<ScoredGuess> = guesses
            .iter()
            .enumerate()
            .filter_map(|(g, word)| {
                let score = self.guess_value(g, full)?;
                score.is_finite().then(|| ScoredGuess {
                    word: *word,
                    score,
                    is_candidate: candidates.contains(word),
                })
            })
            .collect();

        sort_ranked(&mut ranked, Order::LowerIsBetter);
        debug!(
            "optimal: ranked {} guesses over {} candidates, {} subsets memoized",
            ranked.len(),
            candidates.len(),
            self.memo.iter().flatten().count()
        );
        ranked
    }
}
