//! Guess ranking.
//!
//! Every solver answers the same question: given the words still consistent
//! with the feedback so far, which dictionary word should be guessed next?
//! Any dictionary word may be proposed, not only the live candidates, since a
//! word that cannot be the answer can still split the candidates well.
//!
//! The three bucket solvers ([`EntropySolver`], [`WorstCaseSolver`],
//! [`ExpectedSizeSolver`]) partition the candidates by feedback signal for each
//! guess and score the bucket sizes. [`OptimalSolver`] searches exhaustively for
//! the exact expected number of moves on small candidate sets.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::feedback::FeedbackPattern;
use crate::word::Word;

pub mod entropy;
pub mod expected_size;
pub mod optimal;
pub mod worst_case;

pub use entropy::EntropySolver;
pub use expected_size::ExpectedSizeSolver;
pub use optimal::{OptimalSolver, MAX_OPTIMAL_CANDIDATES};
pub use worst_case::WorstCaseSolver;

/// A proposed guess and its solver-specific score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    pub score: f64,
    /// Whether the word is itself still a possible answer.
    pub is_candidate: bool,
}

/// A guess-ranking strategy.
pub trait Solver: Sync {
    fn name(&self) -> &'static str;

    /// Rank guesses for `candidates`, best first.
    ///
    /// A single candidate is returned on its own with score 0; an empty slice
    /// yields an empty ranking.
    fn rank(&self, candidates: &[Word]) -> Vec<ScoredGuess>;

    fn best(&self, candidates: &[Word]) -> Option<ScoredGuess> {
        self.rank(candidates).into_iter().next()
    }
}

/// Selects one of the available solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Maximize Shannon entropy of the feedback distribution.
    #[default]
    Entropy,
    /// Minimize the largest bucket.
    WorstCase,
    /// Minimize the expected size of the next candidate set.
    ExpectedSize,
    /// Minimize the exact expected number of moves.
    Optimal,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Entropy,
        Strategy::WorstCase,
        Strategy::ExpectedSize,
        Strategy::Optimal,
    ];

    pub fn solver<'d>(self, dictionary: &'d Dictionary) -> Box<dyn Solver + 'd> {
        match self {
            Strategy::Entropy => Box::new(EntropySolver::new(dictionary)),
            Strategy::WorstCase => Box::new(WorstCaseSolver::new(dictionary)),
            Strategy::ExpectedSize => Box::new(ExpectedSizeSolver::new(dictionary)),
            Strategy::Optimal => Box::new(OptimalSolver::new(dictionary)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Entropy => "entropy",
            Strategy::WorstCase => "worst-case",
            Strategy::ExpectedSize => "expected-size",
            Strategy::Optimal => "optimal",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown strategy \"{}\" (expected one of: entropy, worst-case, expected-size, optimal)",
                    s
                )
            })
    }
}

/// How many candidates land in each feedback bucket for one guess.
#[derive(Debug, Clone)]
pub(crate) struct Partition {
    counts: [u32; FeedbackPattern::NUM_PATTERNS],
}

impl Partition {
    pub(crate) fn new(guess: &Word, candidates: &[Word]) -> Self {
        let mut counts = [0u32; FeedbackPattern::NUM_PATTERNS];
        for candidate in candidates {
            counts[FeedbackPattern::calculate(guess, candidate).index()] += 1;
        }
        Self { counts }
    }

    /// Sizes of the non-empty buckets.
    pub(crate) fn sizes(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts.iter().copied().filter(|&count| count > 0)
    }

    /// A guess is informative when it splits the candidates at all.
    pub(crate) fn is_informative(&self) -> bool {
        self.sizes().nth(1).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Order {
    HigherIsBetter,
    LowerIsBetter,
}

/// Sort best-first by score, preferring live candidates on ties. The sort is
/// stable, so remaining ties keep dictionary order.
pub(crate) fn sort_ranked(ranked: &mut [ScoredGuess], order: Order) {
    ranked.sort_by(|a, b| {
        let by_score = match order {
            Order::HigherIsBetter => b.score.total_cmp(&a.score),
            Order::LowerIsBetter => a.score.total_cmp(&b.score),
        };
        match by_score {
            Ordering::Equal => b.is_candidate.cmp(&a.is_candidate),
            ord => ord,
        }
    });
}

/// Score every informative dictionary word from its partition of
/// `candidates` and rank the results.
///
/// `score` receives the partition and the candidate count.
pub(crate) fn rank_partitions<F>(
    dictionary: &Dictionary,
    candidates: &[Word],
    order: Order,
    score: F,
) -> Vec<ScoredGuess>
where
    F: Fn(&Partition, f64) -> f64 + Sync,
{
    match candidates {
        [] => return Vec::new(),
        [only] => {
            return vec![ScoredGuess {
                word: *only,
                score: 0.0,
                is_candidate: true,
            }]
        }
        _ => {}
    }

    let live: HashSet<Word> = candidates.iter().copied().collect();
    let total = candidates.len() as f64;

    let mut ranked: Vec<ScoredGuess> = dictionary
        .words()
        .par_iter()
        .filter_map(|guess| {
            let partition = Partition::new(guess, candidates);
            partition.is_informative().then(|| ScoredGuess {
                word: *guess,
                score: score(&partition, total),
                is_candidate: live.contains(guess),
            })
        })
        .collect();

    sort_ranked(&mut ranked, order);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| w.parse().unwrap()).collect()
    }

    #[test]
    fn partition_counts_every_candidate() {
        let candidates = words(&["crate", "grate", "irate", "slate"]);
        let guess: Word = "crate".parse().unwrap();
        let partition = Partition::new(&guess, &candidates);
        assert_eq!(partition.sizes().sum::<u32>(), 4);
        assert!(partition.is_informative());
    }

    #[test]
    fn partition_without_split_is_not_informative() {
        let candidates = words(&["crate", "grate"]);
        let guess: Word = "mummy".parse().unwrap();
        let partition = Partition::new(&guess, &candidates);
        assert_eq!(partition.sizes().collect::<Vec<_>>(), vec![2]);
        assert!(!partition.is_informative());
    }

    #[test]
    fn ties_prefer_candidates() {
        let word = |s: &str| s.parse::<Word>().unwrap();
        let mut ranked = vec![
            ScoredGuess {
                word: word("aaaaa"),
                score: 1.0,
                is_candidate: false,
            },
            ScoredGuess {
                word: word("bbbbb"),
                score: 1.0,
                is_candidate: true,
            },
            ScoredGuess {
                word: word("ccccc"),
                score: 2.0,
                is_candidate: false,
            },
        ];
        sort_ranked(&mut ranked, Order::LowerIsBetter);
        assert_eq!(ranked[0].word, "bbbbb");
        assert_eq!(ranked[1].word, "aaaaa");

        sort_ranked(&mut ranked, Order::HigherIsBetter);
        assert_eq!(ranked[0].word, "ccccc");
        assert_eq!(ranked[1].word, "bbbbb");
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert!("fastest".parse::<Strategy>().is_err());
    }
}
