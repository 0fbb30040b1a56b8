// Working arena of elements for a single generator run

use crate::snapshot::{Element, ElementId, VisualState};
use rustc_hash::FxHashMap;

/// Live, mutable element state
///
/// Elements live in a dense arena indexed by [`ElementId`]. A column index
/// maps each occupied column back to its element and is updated whenever a
/// column changes, so range queries come out in column order for free.
#[derive(Debug)]
pub struct ElementStore {
    elements: Vec<Element>,
    columns: FxHashMap<usize, ElementId>,
}

impl ElementStore {
    /// One element per input position, column = index
    pub fn new(values: &[i64]) -> Self {
        let mut elements = Vec::with_capacity(values.len());
        let mut columns = FxHashMap::default();

        for (column, &value) in values.iter().enumerate() {
            let id = ElementId(column);
            elements.push(Element::new(id, value, column));
            columns.insert(column, id);
        }

        ElementStore { elements, columns }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    pub fn at_column(&self, column: usize) -> Option<ElementId> {
        self.columns.get(&column).copied()
    }

    /// Ids of the elements in `start..=end`, ordered by column
    pub fn range(&self, start: usize, end: usize) -> Vec<ElementId> {
        if start > end {
            return Vec::new();
        }
        (start..=end)
            .filter_map(|column| self.at_column(column))
            .collect()
    }

    pub fn set_state(&mut self, id: ElementId, state: VisualState) {
        self.elements[id.index()].state = state;
    }

    pub fn set_depth(&mut self, id: ElementId, depth: usize) {
        self.elements[id.index()].depth = depth;
    }

    /// Move a group of elements to new columns in one go.
    ///
    /// The new columns must be exactly the columns the group occupied before,
    /// which keeps the column index a bijection.
    pub fn relabel(&mut self, placements: &[(ElementId, usize)]) {
        for &(id, column) in placements {
            self.elements[id.index()].column = column;
        }
        for &(id, column) in placements {
            self.columns.insert(column, id);
        }
        debug_assert_eq!(self.columns.len(), self.elements.len());
    }

    /// Reset every element to the top row, marked sorted
    pub fn settle_all(&mut self) {
        for el in &mut self.elements {
            el.depth = 0;
            el.state = VisualState::Sorted;
        }
    }

    /// Owned copy of every element, in identity order
    pub fn freeze(&self) -> Vec<Element> {
        self.elements.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_columns_by_position() {
        let store = ElementStore::new(&[9, 4, 9]);

        assert_eq!(store.len(), 3);
        for column in 0..3 {
            let id = store.at_column(column).unwrap();
            assert_eq!(id.index(), column);
            assert_eq!(store.get(id).depth, 0);
            assert_eq!(store.get(id).state, VisualState::Normal);
        }
        assert_eq!(store.get(ElementId(2)).value, 9);
    }

    #[test]
    fn test_range_is_column_ordered() {
        let mut store = ElementStore::new(&[10, 20, 30, 40]);
        // reverse the middle pair
        store.relabel(&[(ElementId(1), 2), (ElementId(2), 1)]);

        let values: Vec<i64> = store
            .range(0, 3)
            .into_iter()
            .map(|id| store.get(id).value)
            .collect();
        assert_eq!(values, vec![10, 30, 20, 40]);
        assert!(store.range(3, 2).is_empty());
    }

    #[test]
    fn test_freeze_is_independent_copy() {
        let mut store = ElementStore::new(&[1, 2]);
        let frozen = store.freeze();
        store.set_state(ElementId(0), VisualState::Pivot);
        store.set_depth(ElementId(1), 3);

        assert_eq!(frozen[0].state, VisualState::Normal);
        assert_eq!(frozen[1].depth, 0);
    }

    #[test]
    fn test_settle_all() {
        let mut store = ElementStore::new(&[5, 6]);
        store.set_depth(ElementId(0), 2);
        store.set_state(ElementId(1), VisualState::Higher);
        store.settle_all();

        assert!(store.freeze().iter().all(|el| el.is_sorted() && el.depth == 0));
    }
}
