//! Drag-to-reorder for column headers.
//!
//! The controller follows a live-preview model: the order changes as soon as
//! the dragged header enters another header, and dropping only ends the
//! session.

use log::{debug, trace, warn};

use crate::column::ColumnId;
use crate::layout::TableLayout;

/// Which column, if any, is being dragged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    active: Option<ColumnId>,
}

impl DragSession {
    pub fn active(&self) -> Option<&ColumnId> {
        self.active.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }
}

/// Tracks the dragged column and commits new orders to a [`TableLayout`].
///
/// # Examples
///
/// ```
/// use colgrid::{ColumnSpec, ReorderController, Table, TableLayout};
/// # use colgrid::{CellValue, Record};
/// # struct Row;
/// # impl Record for Row {
/// #     fn cell(&self, _: &str) -> Option<CellValue> { None }
/// # }
///
/// let columns = ["a", "b", "c", "d"].map(|id| ColumnSpec::new(id, id)).to_vec();
/// let mut table = Table::<Row>::new(columns, Vec::new()).unwrap();
/// let mut controller = ReorderController::new();
///
/// controller.begin_drag("a".into());
/// controller.drag_enter(&"c".into(), &mut table);
/// controller.drop(&"c".into());
///
/// let order: Vec<&str> = table.column_order().ids().iter().map(|c| c.as_str()).collect();
/// assert_eq!(order, ["b", "c", "a", "d"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReorderController {
    session: DragSession,
}

impl ReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn active(&self) -> Option<&ColumnId> {
        self.session.active()
    }

    /// Start dragging `column`, replacing any stale session.
    pub fn begin_drag(&mut self, column: ColumnId) {
        if let Some(stale) = self.session.active.as_ref() {
            trace!("Replacing stale drag of {}", stale);
        }
        debug!("Drag started on column {}", column);
        self.session.active = Some(column);
    }

    /// The dragged header entered `target`'s header region.
    ///
    /// Returns `true` when a new order was committed to `layout`.
    pub fn drag_enter(&mut self, target: &ColumnId, layout: &mut impl TableLayout) -> bool {
        let Some(active) = self.session.active.as_ref() else {
            trace!("Drag enter on {} without an active column", target);
            return false;
        };

        if active == target {
            return false;
        }

        let Some(order) = layout.column_order().move_column(active, target) else {
            warn!(
                "Cannot move column {} onto {}: not in the current order",
                active, target
            );
            return false;
        };

        debug!("Moving column {} next to {}", active, target);
        match layout.set_column_order(order) {
            Ok(()) => true,
            Err(e) => {
                warn!("Column order rejected: {}", e);
                false
            }
        }
    }

    /// The drag gesture ended, wherever the pointer was.
    pub fn end_drag(&mut self) {
        if let Some(column) = self.session.active.take() {
            debug!("Drag of column {} ended", column);
        }
    }

    /// The dragged header was dropped on `column`'s header.
    pub fn drop(&mut self, column: &ColumnId) {
        if let Some(active) = self.session.active.take() {
            debug!("Column {} dropped on {}", active, column);
        }
    }
}
