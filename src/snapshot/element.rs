// Element representation for the sort trace

/// Stable identity of one input value for the whole run.
///
/// Identities are indices into the generator's working arena, handed out in
/// input order and never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Display state of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    #[default]
    Normal,
    Pivot,
    /// Value strictly below the current pivot
    Lower,
    /// Value at or above the current pivot (ties land here)
    Higher,
    Sorted,
}

impl VisualState {
    pub fn label(self) -> &'static str {
        match self {
            VisualState::Normal => "normal",
            VisualState::Pivot => "pivot",
            VisualState::Lower => "lower",
            VisualState::Higher => "higher",
            VisualState::Sorted => "sorted",
        }
    }
}

/// One input value and where it currently sits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub value: i64,
    pub column: usize,
    /// Recursion depth, drawn as the row
    pub depth: usize,
    pub state: VisualState,
}

impl Element {
    pub fn new(id: ElementId, value: i64, column: usize) -> Self {
        Element {
            id,
            value,
            column,
            depth: 0,
            state: VisualState::Normal,
        }
    }

    pub fn row(&self) -> usize {
        self.depth
    }

    pub fn is_sorted(&self) -> bool {
        self.state == VisualState::Sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_index_is_lossless() {
        let wide = 1usize << 40;
        assert_eq!(ElementId(wide).index(), wide);
        assert!(ElementId(3) < ElementId(wide));
    }

    #[test]
    fn test_new_element_starts_on_row_zero() {
        let element = Element::new(ElementId(4), -7, 4);
        assert_eq!(element.row(), 0);
        assert_eq!(element.state, VisualState::Normal);
        assert!(!element.is_sorted());
    }
}
