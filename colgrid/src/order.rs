//! Left-to-right display order of columns.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::column::ColumnId;

/// Ordered sequence of column ids, one per visible column, no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnOrder(Vec<ColumnId>);

impl ColumnOrder {
    pub fn new(ids: Vec<ColumnId>) -> Self {
        Self(ids)
    }

    pub fn ids(&self) -> &[ColumnId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, id: &ColumnId) -> Option<usize> {
        self.0.iter().position(|c| c == id)
    }

    pub fn contains(&self, id: &ColumnId) -> bool {
        self.position(id).is_some()
    }

    /// True when `other` holds exactly the same ids, in any order.
    pub fn is_permutation_of(&self, other: &ColumnOrder) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        let ours: HashSet<&ColumnId> = self.0.iter().collect();
        let theirs: HashSet<&ColumnId> = other.0.iter().collect();
        ours.len() == self.0.len() && ours == theirs
    }

    /// Order produced by dragging `active` onto `target`.
    ///
    /// `active` is removed and reinserted next to `target`: before it when
    /// `active` started to the right of `target`, after it otherwise, so the
    /// column lands on the side it approached from.
    ///
    /// Returns `None` when the ids are equal or either is missing.
    pub fn move_column(&self, active: &ColumnId, target: &ColumnId) -> Option<ColumnOrder> {
        if active == target {
            return None;
        }

        let mut ids = self.0.clone();
        let current_index = ids.iter().position(|c| c == active)?;
        let moved = ids.remove(current_index);
        let drop_index = ids.iter().position(|c| c == target)?;

        if current_index > drop_index {
            ids.insert(drop_index, moved);
        } else {
            ids.insert(drop_index + 1, moved);
        }

        Some(ColumnOrder(ids))
    }
}

impl From<Vec<ColumnId>> for ColumnOrder {
    fn from(ids: Vec<ColumnId>) -> Self {
        Self(ids)
    }
}

impl<'a> IntoIterator for &'a ColumnOrder {
    type Item = &'a ColumnId;
    type IntoIter = std::slice::Iter<'a, ColumnId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
