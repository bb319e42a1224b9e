// src/state/expansion.rs

/// Tracks the single expanded company row, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionController {
    expanded: Option<usize>,
}

impl ExpansionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapses `index` if it is open, otherwise opens it in place of any other row.
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn clear(&mut self) {
        self.expanded = None;
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// The expanded index, only if it still points at one of `len` rows.
    pub fn expanded_within(&self, len: usize) -> Option<usize> {
        self.expanded.filter(|&i| i < len)
    }
}
