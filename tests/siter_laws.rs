//! Property-based tests for the lazy iterator.
//!
//! - `has_next` is idempotent and never skips or duplicates elements
//! - Lazy adapters yield what their eager counterparts on `Vec` yield

use indolent::iter::SIter;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_has_next_polling_does_not_change_output(
        values in prop::collection::vec(any::<i32>(), 0..40),
        polls in 1_usize..4,
    ) {
        let mut filtered = SIter::of(values.clone()).filter(|n| n % 2 == 0);
        let mut pulled = Vec::new();
        loop {
            let answers: Vec<bool> = (0..polls).map(|_| filtered.has_next()).collect();
            prop_assert!(answers.iter().all(|answer| *answer == answers[0]));
            if !answers[0] {
                break;
            }
            pulled.push(filtered.pull().unwrap());
        }
        let expected: Vec<i32> = values.into_iter().filter(|n| n % 2 == 0).collect();
        prop_assert_eq!(pulled, expected);
    }

    #[test]
    fn prop_map_matches_eager_map(values in prop::collection::vec(any::<i32>(), 0..40)) {
        let lazy = SIter::of(values.clone()).map(|n| n.wrapping_mul(3)).list().into_vec();
        let eager: Vec<i32> = values.iter().map(|n| n.wrapping_mul(3)).collect();
        prop_assert_eq!(lazy, eager);
    }

    #[test]
    fn prop_flat_matches_eager_flat_map(
        values in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..4), 0..10),
    ) {
        let lazy = SIter::of(values.clone()).flat(|inner| inner).list().into_vec();
        let eager: Vec<u8> = values.into_iter().flatten().collect();
        prop_assert_eq!(lazy, eager);
    }
}
