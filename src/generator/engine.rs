// Snapshot generation for the QuickSort trace

use super::store::ElementStore;
use crate::snapshot::{ElementId, Snapshot, SnapshotHistory, SortedRegion, VisualState};
use tracing::{debug, info};

/// Produce the full snapshot history for `input`.
///
/// Total for every input: an empty slice yields a single "Initial array"
/// snapshot, a single value yields that plus its "sorted" step.
pub fn generate(input: &[i64]) -> SnapshotHistory {
    let mut generator = SnapshotGenerator::new(input);
    generator.run();
    let history = generator.finish();

    info!(
        elements = input.len(),
        snapshots = history.len(),
        max_depth = history.last().map_or(0, |s| s.max_depth_reached),
        "generated quicksort trace"
    );

    history
}

/// Working state of one run: live elements, regions and emitted history
struct SnapshotGenerator {
    store: ElementStore,
    history: SnapshotHistory,
    sorted_regions: Vec<SortedRegion>,
    max_depth_reached: usize,
}

impl SnapshotGenerator {
    fn new(input: &[i64]) -> Self {
        SnapshotGenerator {
            store: ElementStore::new(input),
            history: SnapshotHistory::new(),
            sorted_regions: Vec::new(),
            max_depth_reached: 0,
        }
    }

    fn run(&mut self) {
        self.take_snapshot("Initial array".to_string());

        if self.store.is_empty() {
            return;
        }

        let last = self.store.len() - 1;
        self.partition(0, last, 0);

        // Single values are already reported by their own "sorted" step
        if self.store.len() > 1 {
            self.store.settle_all();
            self.sorted_regions.push(SortedRegion::new(0, last, 0));
            self.take_snapshot("Sorting complete!".to_string());
        }
    }

    fn finish(self) -> SnapshotHistory {
        self.history
    }

    /// Record the current state as a new snapshot
    fn take_snapshot(&mut self, description: String) {
        debug!(
            step = self.history.len(),
            regions = self.sorted_regions.len(),
            max_depth = self.max_depth_reached,
            "{}",
            description
        );

        self.history.push(Snapshot {
            elements: self.store.freeze(),
            sorted_regions: self.sorted_regions.clone(),
            description,
            max_depth_reached: self.max_depth_reached,
        });
    }

    fn mark_sorted(&mut self, id: ElementId, depth: usize) {
        self.store.set_state(id, VisualState::Sorted);
        let column = self.store.get(id).column;
        self.sorted_regions.push(SortedRegion::single(column, depth));
    }

    /// Partition columns `start..=end` at recursion level `depth`
    fn partition(&mut self, start: usize, end: usize, depth: usize) {
        if start > end {
            return;
        }
        if start == end {
            if let Some(id) = self.store.at_column(start) {
                self.mark_sorted(id, depth);
                let value = self.store.get(id).value;
                self.take_snapshot(format!("Element {} is sorted", value));
            }
            return;
        }

        let range = self.store.range(start, end);
        if range.iter().all(|&id| self.store.get(id).is_sorted()) {
            return;
        }

        // Positional midpoint, not the median value
        let pivot = range[range.len() / 2];
        let pivot_value = self.store.get(pivot).value;
        self.store.set_state(pivot, VisualState::Pivot);
        self.take_snapshot(format!("Select pivot: {} (depth {})", pivot_value, depth));

        let next_depth = depth + 1;
        for &id in &range {
            if id != pivot && self.store.get(id).depth <= depth {
                self.store.set_depth(id, next_depth);
                self.max_depth_reached = self.max_depth_reached.max(next_depth);
            }
        }
        self.take_snapshot(format!("Move non-pivot elements to depth {}", next_depth));

        let range = self.store.range(start, end);
        for &id in &range {
            let el = self.store.get(id);
            if id == pivot || el.is_sorted() {
                continue;
            }
            // Equal values go right
            let state = if el.value < pivot_value {
                VisualState::Lower
            } else {
                VisualState::Higher
            };
            self.store.set_state(id, state);
        }
        self.take_snapshot(format!(
            "Color elements: lower < {}, higher >= {}",
            pivot_value, pivot_value
        ));

        let lower: Vec<ElementId> = range
            .iter()
            .copied()
            .filter(|&id| self.store.get(id).state == VisualState::Lower)
            .collect();
        let higher: Vec<ElementId> = range
            .iter()
            .copied()
            .filter(|&id| self.store.get(id).state == VisualState::Higher)
            .collect();

        let pivot_column = start + lower.len();
        let placements: Vec<(ElementId, usize)> = lower
            .iter()
            .copied()
            .chain(std::iter::once(pivot))
            .chain(higher.iter().copied())
            .zip(start..)
            .collect();
        self.store.relabel(&placements);
        self.take_snapshot(format!(
            "Rearrange: lower left, pivot at column {}, higher right",
            pivot_column
        ));

        self.mark_sorted(pivot, depth);

        // Never taken: partition only gets ranges of two or more, so at least
        // one element always sits beside the pivot.
        if lower.is_empty() && higher.is_empty() {
            self.sorted_regions
                .push(SortedRegion::new(start, end, next_depth));
            self.take_snapshot("Section fully sorted".to_string());
        }

        if lower.len() <= 1 && higher.len() <= 1 {
            for id in lower.iter().chain(higher.iter()).copied() {
                self.mark_sorted(id, next_depth);
            }
            self.take_snapshot("Partition complete".to_string());
            return;
        }

        // At least one side still needs work; a singleton on the other side
        // settles through the terminal check of its own call.
        if !lower.is_empty() {
            self.partition(start, pivot_column - 1, next_depth);
        }
        if !higher.is_empty() {
            self.partition(pivot_column + 1, end, next_depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(history: &SnapshotHistory) -> Vec<&str> {
        history.iter().map(|s| s.description.as_str()).collect()
    }

    #[test]
    fn test_pair_descends_once() {
        let history = generate(&[2, 1]);

        assert_eq!(
            descriptions(&history),
            vec![
                "Initial array",
                "Select pivot: 1 (depth 0)",
                "Move non-pivot elements to depth 1",
                "Color elements: lower < 1, higher >= 1",
                "Rearrange: lower left, pivot at column 0, higher right",
                "Partition complete",
                "Sorting complete!",
            ]
        );

        let complete = history.get(5).unwrap();
        assert_eq!(
            complete.sorted_regions,
            vec![SortedRegion::single(0, 0), SortedRegion::single(1, 1)]
        );
        assert_eq!(complete.max_depth_reached, 1);
    }

    #[test]
    fn test_rearrange_snapshot_keeps_pivot_color() {
        let history = generate(&[4, 8, 1]);
        let rearranged = history
            .iter()
            .find(|s| s.description.starts_with("Rearrange"))
            .unwrap();

        let pivot = rearranged.pivot().unwrap();
        assert_eq!(pivot.value, 8);
        assert_eq!(pivot.column, 2);
        assert!(rearranged.sorted_regions.is_empty());
    }

    #[test]
    fn test_mixed_case_settles_singleton_first() {
        // pivot 3: lower [1], higher [7, 5]
        let history = generate(&[7, 1, 3, 5]);
        let steps = descriptions(&history);

        let lower_sorted = steps
            .iter()
            .position(|d| *d == "Element 1 is sorted")
            .unwrap();
        let next_pivot = steps
            .iter()
            .position(|d| *d == "Select pivot: 5 (depth 1)")
            .unwrap();
        assert!(lower_sorted < next_pivot);
        let settled = history.get(lower_sorted).unwrap().element_at(0).unwrap();
        assert_eq!((settled.value, settled.depth), (1, 1));
        assert!(settled.is_sorted());

        let last = history.last().unwrap();
        assert_eq!(last.values_by_column(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_depth_only_increases_for_shallow_elements() {
        let history = generate(&[6, 5, 4, 3, 2, 1]);
        let mut prev_max = 0;
        for snapshot in &history {
            assert!(snapshot.max_depth_reached >= prev_max);
            prev_max = snapshot.max_depth_reached;
            for el in &snapshot.elements {
                assert!(el.depth <= snapshot.max_depth_reached);
            }
        }
    }
}
