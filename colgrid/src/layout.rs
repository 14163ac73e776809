//! The seam between the reorder controller, the table provider and the
//! renderer.

use crate::column::ColumnId;
use crate::error::TableError;
use crate::order::ColumnOrder;

/// A header cell as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: ColumnId,
    pub label: String,
    /// Displayed width in terminal cells
    pub width: u16,
    /// Whether this column's border is being dragged
    pub resizing: bool,
}

/// Provider of a renderable grid with a mutable column order.
///
/// [`ReorderController`](crate::ReorderController) only uses
/// `column_order` and `set_column_order`; renderers use the rest.
pub trait TableLayout {
    /// Current order of the visible columns.
    fn column_order(&self) -> &ColumnOrder;

    /// Replace the column order. Must be a permutation of the current one.
    fn set_column_order(&mut self, order: ColumnOrder) -> Result<(), TableError>;

    /// Header cells in display order.
    fn headers(&self) -> Vec<HeaderCell>;

    fn row_count(&self) -> usize;

    /// Display strings for one row, in display order.
    fn row_cells(&self, index: usize) -> Option<Vec<String>>;
}
