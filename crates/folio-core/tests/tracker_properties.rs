//! Property-based tests for LoadTracker
//!
//! Uses proptest to verify the readiness invariants under arbitrary signal
//! orderings, duplicates and target switches.

use proptest::prelude::*;
use folio_core::gallery::LoadTracker;

// ============================================================================
// Strategy Generators
// ============================================================================

fn image_list(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("images/{i}.jpg")).collect()
}

/// A gallery size together with a shuffled order of all its indices
fn shuffled_indices() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1..40usize).prop_flat_map(|n| {
        Just((0..n).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(move |order| (n, order))
    })
}

/// A completion signal: success or failure, both count
#[derive(Debug, Clone, Copy)]
enum Signal {
    Loaded(usize),
    Failed(usize),
}

impl Signal {
    fn index(self) -> usize {
        match self {
            Signal::Loaded(i) | Signal::Failed(i) => i,
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Ready exactly when the last outstanding index arrives, in any order
    #[test]
    fn ready_only_after_every_index((n, order) in shuffled_indices()) {
        let images = image_list(n);
        let mut tracker = LoadTracker::new();
        let generation = tracker.reset(Some(images.as_slice()));

        for (step, index) in order.iter().enumerate() {
            prop_assert!(!tracker.is_ready());
            prop_assert!(tracker.mark_complete(generation, *index));
            prop_assert_eq!(tracker.is_ready(), step + 1 == n);
        }
    }

    /// Repeating signals never changes the outcome or the state
    #[test]
    fn duplicates_are_value_stable(
        (n, order) in shuffled_indices(),
        repeats in prop::collection::vec(0..40usize, 0..30),
    ) {
        let images = image_list(n);
        let mut tracker = LoadTracker::new();
        let generation = tracker.reset(Some(images.as_slice()));

        for index in &order[..n / 2] {
            tracker.mark_complete(generation, *index);
        }
        for index in order[..n / 2].iter().chain(repeats.iter().filter(|i| order[..n / 2].contains(*i))) {
            let before = tracker.clone();
            prop_assert!(!tracker.mark_complete(generation, *index));
            prop_assert_eq!(&tracker, &before);
        }
        prop_assert!(!tracker.is_ready());
    }

    /// Errors and loads are indistinguishable for readiness
    #[test]
    fn failures_count_as_completion(
        (n, order) in shuffled_indices(),
        fail_mask in prop::collection::vec(any::<bool>(), 40),
    ) {
        let images = image_list(n);
        let signals: Vec<Signal> = order
            .iter()
            .map(|&i| if fail_mask[i] { Signal::Failed(i) } else { Signal::Loaded(i) })
            .collect();

        let mut tracker = LoadTracker::new();
        let generation = tracker.reset(Some(images.as_slice()));
        for signal in signals {
            tracker.mark_complete(generation, signal.index());
        }
        prop_assert!(tracker.is_ready());
    }

    /// Signals for a replaced target never touch the new one
    #[test]
    fn stale_signals_are_isolated(
        old_len in 1..20usize,
        new_len in 1..20usize,
        stale in prop::collection::vec(0..20usize, 0..40),
    ) {
        let old_images = image_list(old_len);
        let new_images = image_list(new_len);
        let mut tracker = LoadTracker::new();

        let old_gen = tracker.reset(Some(old_images.as_slice()));
        let new_gen = tracker.reset(Some(new_images.as_slice()));

        for index in stale {
            prop_assert!(!tracker.mark_complete(old_gen, index));
        }
        prop_assert_eq!(tracker.completed_count(), 0);
        prop_assert!(!tracker.is_ready());

        for index in 0..new_len {
            tracker.mark_complete(new_gen, index);
        }
        prop_assert!(tracker.is_ready());
    }

    /// No sequence of signals makes an empty gallery ready
    #[test]
    fn empty_gallery_never_ready(signals in prop::collection::vec(0..10usize, 0..20)) {
        let mut tracker = LoadTracker::new();
        let generation = tracker.reset(Some(&[][..]));
        for index in signals {
            tracker.mark_complete(generation, index);
        }
        prop_assert!(!tracker.is_ready());
        prop_assert!(tracker.is_empty());
    }
}
