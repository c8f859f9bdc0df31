use proptest::prelude::*;
use wordle_optimizer::{
    filter_words, Dictionary, EntropySolver, FeedbackPattern, HistoryEntry, Solver, Word,
};

fn word() -> impl Strategy<Value = Word> {
    "[a-z]{5}".prop_map(|s| s.parse::<Word>().unwrap())
}

/// Words over a tiny alphabet, so that sets of them collide often.
fn dense_word() -> impl Strategy<Value = Word> {
    "[a-e]{5}".prop_map(|s| s.parse::<Word>().unwrap())
}

fn history_entry() -> impl Strategy<Value = HistoryEntry> {
    (dense_word(), dense_word()).prop_map(|(guess, target)| HistoryEntry::observe(guess, &target))
}

proptest! {
    #[test]
    fn guessing_the_target_is_all_green(w in word()) {
        prop_assert_eq!(FeedbackPattern::calculate(&w, &w), FeedbackPattern::ALL_CORRECT);
    }

    #[test]
    fn disjoint_words_are_all_gray(
        a in "[a-m]{5}".prop_map(|s| s.parse::<Word>().unwrap()),
        b in "[n-z]{5}".prop_map(|s| s.parse::<Word>().unwrap()),
    ) {
        prop_assert_eq!(FeedbackPattern::calculate(&a, &b).bits(), 0);
        prop_assert_eq!(FeedbackPattern::calculate(&b, &a).bits(), 0);
    }

    #[test]
    fn signals_stay_in_the_reachable_range(guess in dense_word(), target in dense_word()) {
        let pattern = FeedbackPattern::calculate(&guess, &target);
        prop_assert_eq!(FeedbackPattern::from_bits(pattern.bits()), Some(pattern));
        prop_assert!(pattern.index() < FeedbackPattern::NUM_PATTERNS);
        prop_assert_eq!(pattern.is_win(), guess == target);
    }

    #[test]
    fn filtering_accumulates_in_any_split(
        candidates in prop::collection::vec(dense_word(), 0..40),
        h1 in prop::collection::vec(history_entry(), 0..3),
        h2 in prop::collection::vec(history_entry(), 0..3),
    ) {
        let all: Vec<HistoryEntry> = h1.iter().chain(h2.iter()).copied().collect();
        let stepwise = filter_words(&filter_words(&candidates, &h1), &h2);
        prop_assert_eq!(stepwise, filter_words(&candidates, &all));
    }

    #[test]
    fn refiltering_changes_nothing(
        candidates in prop::collection::vec(dense_word(), 0..40),
        history in prop::collection::vec(history_entry(), 0..3),
    ) {
        let once = filter_words(&candidates, &history);
        prop_assert_eq!(filter_words(&once, &history), once.clone());
        prop_assert!(once.len() <= candidates.len());
    }

    #[test]
    fn target_survives_its_own_history(
        candidates in prop::collection::vec(dense_word(), 0..20),
        target in dense_word(),
        guesses in prop::collection::vec(dense_word(), 1..4),
    ) {
        let history: Vec<HistoryEntry> =
            guesses.iter().map(|g| HistoryEntry::observe(*g, &target)).collect();
        let mut pool = candidates;
        pool.push(target);
        prop_assert!(filter_words(&pool, &history).contains(&target));
    }

    #[test]
    fn entropy_is_bounded(
        pool in prop::collection::vec(dense_word(), 1..30),
        guess in dense_word(),
    ) {
        let dictionary = Dictionary::new(vec![guess]).unwrap();
        let solver = EntropySolver::new(&dictionary);
        let entropy = solver.entropy(&guess, &pool);
        let bound = (pool.len() as f64).log2();
        prop_assert!(entropy >= 0.0);
        prop_assert!(entropy <= bound + 1e-9);
        for ranked in solver.rank(&pool) {
            prop_assert!(ranked.score >= 0.0 && ranked.score <= bound + 1e-9);
        }
    }
}
