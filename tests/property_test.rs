// Invariants that hold for every generated trace

use proptest::prelude::*;
use quicktrace::generator::generate;
use std::collections::HashSet;

fn small_arrays() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..=20)
}

fn sorted_copy(values: &[i64]) -> Vec<i64> {
    let mut copy = values.to_vec();
    copy.sort();
    copy
}

proptest! {
    #[test]
    fn last_snapshot_is_sorted(values in small_arrays()) {
        let history = generate(&values);
        let last = history.last().unwrap();
        prop_assert_eq!(last.values_by_column(), sorted_copy(&values));
    }

    #[test]
    fn values_are_a_permutation(values in small_arrays()) {
        let expected = sorted_copy(&values);
        for snapshot in &generate(&values) {
            let got: Vec<i64> = snapshot.elements.iter().map(|el| el.value).collect();
            prop_assert_eq!(sorted_copy(&got), expected.clone());
            // identity order is input order
            prop_assert_eq!(got, values.clone());
        }
    }

    #[test]
    fn columns_are_unique_and_dense(values in small_arrays()) {
        for snapshot in &generate(&values) {
            let columns: HashSet<usize> = snapshot.elements.iter().map(|el| el.column).collect();
            prop_assert_eq!(columns.len(), values.len());
            prop_assert!(columns.iter().all(|&c| c < values.len()));
        }
    }

    #[test]
    fn sorted_regions_only_grow(values in small_arrays()) {
        let history = generate(&values);
        for pair in history.as_slice().windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            prop_assert!(next.sorted_regions.len() >= prev.sorted_regions.len());
            prop_assert_eq!(
                &next.sorted_regions[..prev.sorted_regions.len()],
                &prev.sorted_regions[..]
            );
        }
    }

    #[test]
    fn max_depth_never_decreases(values in small_arrays()) {
        let history = generate(&values);
        for pair in history.as_slice().windows(2) {
            prop_assert!(pair[1].max_depth_reached >= pair[0].max_depth_reached);
        }
    }

    #[test]
    fn generation_is_deterministic(values in small_arrays()) {
        prop_assert_eq!(generate(&values), generate(&values));
    }

    #[test]
    fn at_most_one_pivot(values in small_arrays()) {
        for snapshot in &generate(&values) {
            let pivots = snapshot
                .elements
                .iter()
                .filter(|el| el.state == quicktrace::snapshot::VisualState::Pivot)
                .count();
            prop_assert!(pivots <= 1);
        }
    }

    #[test]
    fn no_section_ever_sorts_without_a_partner(values in small_arrays()) {
        // every partitioned range leaves something beside its pivot
        for snapshot in &generate(&values) {
            prop_assert_ne!(snapshot.description.as_str(), "Section fully sorted");
        }
    }
}
