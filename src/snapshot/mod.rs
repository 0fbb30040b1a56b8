// Frozen states of a sort run, in the order they were reached

pub mod element;

pub use element::{Element, ElementId, VisualState};

/// A column range known to be in final sorted order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortedRegion {
    pub start_column: usize,
    pub end_column: usize,
    pub depth: usize,
}

impl SortedRegion {
    pub fn new(start_column: usize, end_column: usize, depth: usize) -> Self {
        SortedRegion {
            start_column,
            end_column,
            depth,
        }
    }

    pub fn single(column: usize, depth: usize) -> Self {
        Self::new(column, column, depth)
    }

    pub fn width(&self) -> usize {
        self.end_column - self.start_column + 1
    }

    pub fn contains(&self, column: usize) -> bool {
        (self.start_column..=self.end_column).contains(&column)
    }
}

/// Snapshot of every element at one step of the sort
///
/// Owns its data outright; nothing here points back into the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Elements in identity order (the order of the input)
    pub elements: Vec<Element>,
    pub sorted_regions: Vec<SortedRegion>,
    pub description: String,
    pub max_depth_reached: usize,
}

impl Snapshot {
    /// Element currently occupying `column`
    pub fn element_at(&self, column: usize) -> Option<&Element> {
        self.elements.iter().find(|el| el.column == column)
    }

    /// Elements whose column lies in `start..=end`, ordered by column
    pub fn range(&self, start: usize, end: usize) -> Vec<&Element> {
        let mut found: Vec<&Element> = self
            .elements
            .iter()
            .filter(|el| el.column >= start && el.column <= end)
            .collect();
        found.sort_by_key(|el| el.column);
        found
    }

    /// Values read left to right
    pub fn values_by_column(&self) -> Vec<i64> {
        let mut ordered: Vec<&Element> = self.elements.iter().collect();
        ordered.sort_by_key(|el| el.column);
        ordered.into_iter().map(|el| el.value).collect()
    }

    pub fn column_count(&self) -> usize {
        self.elements.len()
    }

    /// Rows needed to draw every depth seen so far
    pub fn row_count(&self) -> usize {
        self.max_depth_reached + 1
    }

    pub fn pivot(&self) -> Option<&Element> {
        self.elements
            .iter()
            .find(|el| el.state == VisualState::Pivot)
    }
}

/// Ordered history of snapshots for one run
///
/// Only the generator appends; everyone else reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotHistory {
    snapshots: Vec<Snapshot>,
}

impl SnapshotHistory {
    pub(crate) fn new() -> Self {
        SnapshotHistory {
            snapshots: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn first(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    pub fn as_slice(&self) -> &[Snapshot] {
        &self.snapshots
    }
}

impl<'a> IntoIterator for &'a SnapshotHistory {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
