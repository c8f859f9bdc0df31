//! Playing full games against known targets, for offline evaluation of a
//! solver and its opening word.

use log::{info, trace};
use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::error::SimulationError;
use crate::filter::{filter_words, HistoryEntry};
use crate::solver::Solver;
use crate::word::Word;

/// The guesses made in one finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub target: Word,
    /// Every guess with its feedback; the last one is the winning guess.
    pub guesses: Vec<HistoryEntry>,
}

impl GameRecord {
    /// The 1-based move on which the target was guessed.
    pub fn moves(&self) -> usize {
        self.guesses.len()
    }

    pub fn last_guess(&self) -> Option<Word> {
        self.guesses.last().map(|entry| entry.guess)
    }
}

/// How one opening word performs across every target in the dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct StartWordReport {
    pub word: Word,
    pub worst: usize,
    pub average: f64,
    /// `(moves, number of targets)` pairs, ascending by moves.
    pub distribution: Vec<(usize, usize)>,
}

pub struct Simulator<'a> {
    dictionary: &'a Dictionary,
    solver: &'a dyn Solver,
}

impl<'a> Simulator<'a> {
    pub fn new(dictionary: &'a Dictionary, solver: &'a dyn Solver) -> Self {
        Self { dictionary, solver }
    }

    /// Any game against a dictionary word ends within this many moves, as
    /// every uninformative guess is excluded from the rankings.
    pub fn move_limit(&self) -> usize {
        self.dictionary.len() + 1
    }

    /// Play `start`, then the solver's top recommendation each turn, until
    /// `target` is guessed.
    pub fn play(&self, target: &Word, start: Word) -> Result<GameRecord, SimulationError> {
        let mut history = Vec::new();
        let mut remaining = self.dictionary.words().to_vec();
        let mut guess = start;

        for moves in 1..=self.move_limit() {
            let entry = HistoryEntry::observe(guess, target);
            history.push(entry);
            if entry.feedback.is_win() {
                trace!("{}: solved with {} on move {}", target, guess, moves);
                return Ok(GameRecord {
                    target: *target,
                    guesses: history,
                });
            }

            remaining = filter_words(&remaining, &history);
            trace!(
                "{}: {} {} leaves {} candidates",
                target,
                guess,
                entry.feedback.to_code(),
                remaining.len()
            );
            if remaining.is_empty() {
                return Err(SimulationError::NoCandidates {
                    target: *target,
                    moves,
                });
            }

            guess = self
                .solver
                .best(&remaining)
                .ok_or(SimulationError::NoRecommendation {
                    solver: self.solver.name(),
                    target: *target,
                    moves,
                })?
                .word;
        }

        Err(SimulationError::DidNotTerminate {
            target: *target,
            limit: self.move_limit(),
        })
    }

    /// Play `start` against every dictionary word.
    pub fn evaluate_start_word(&self, start: Word) -> Result<StartWordReport, SimulationError> {
        let moves: Vec<usize> = self
            .dictionary
            .words()
            .par_iter()
            .map(|target| self.play(target, start).map(|record| record.moves()))
            .collect::<Result<_, _>>()?;

        let worst = moves.iter().copied().max().unwrap_or(0);
        let average = moves.iter().sum::<usize>() as f64 / moves.len().max(1) as f64;

        let mut counts = vec![0usize; worst + 1];
        for count in moves {
            counts[count] += 1;
        }
        let distribution = counts
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect();

        Ok(StartWordReport {
            word: start,
            worst,
            average,
            distribution,
        })
    }

    /// Evaluate opening words in the order the solver ranks them for the full
    /// dictionary, optionally stopping after `limit` words.
    pub fn evaluate_all_start_words(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<StartWordReport>, SimulationError> {
        let openings = self.solver.rank(self.dictionary.words());
        let take = limit.unwrap_or(openings.len());
        info!(
            "evaluating {} of {} opening words with {}",
            take.min(openings.len()),
            openings.len(),
            self.solver.name()
        );

        openings
            .iter()
            .take(take)
            .map(|opening| {
                let report = self.evaluate_start_word(opening.word)?;
                info!(
                    "{}: worst {} average {:.4}",
                    report.word, report.worst, report.average
                );
                Ok(report)
            })
            .collect()
    }
}
