//! The table provider: columns, rows, order and widths.

use std::collections::HashSet;

use log::{debug, trace};

use crate::column::{ColumnDefaults, ColumnId, ColumnSpec, ResolvedWidths};
use crate::error::TableError;
use crate::layout::{HeaderCell, TableLayout};
use crate::order::ColumnOrder;
use crate::record::Record;
use crate::resize::ColumnResizing;
use crate::state::TableState;

#[derive(Debug, Clone)]
struct Column {
    id: ColumnId,
    spec: ColumnSpec,
    widths: ResolvedWidths,
}

/// A table of records with reorderable, resizable columns.
#[derive(Debug, Clone)]
pub struct Table<R: Record> {
    columns: Vec<Column>,
    rows: Vec<R>,
    order: ColumnOrder,
    resizing: ColumnResizing,
}

impl<R: Record> Table<R> {
    /// Create a table using [`ColumnDefaults::default`].
    pub fn new(columns: Vec<ColumnSpec>, rows: Vec<R>) -> Result<Self, TableError> {
        Self::with_defaults(columns, rows, ColumnDefaults::default())
    }

    pub fn with_defaults(
        specs: Vec<ColumnSpec>,
        rows: Vec<R>,
        defaults: ColumnDefaults,
    ) -> Result<Self, TableError> {
        if specs.is_empty() {
            return Err(TableError::NoColumns);
        }

        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(specs.len());
        for spec in specs {
            let id = spec.id();
            if !seen.insert(id.clone()) {
                return Err(TableError::DuplicateColumn(id));
            }
            let widths = spec.resolve(&defaults);
            if widths.min > widths.max {
                return Err(TableError::InvalidWidthBounds {
                    id,
                    min: widths.min,
                    max: widths.max,
                });
            }
            columns.push(Column { id, spec, widths });
        }

        let order = ColumnOrder::new(columns.iter().map(|c| c.id.clone()).collect());
        debug!("Table created with {} columns, {} rows", columns.len(), rows.len());

        Ok(Self {
            columns,
            rows,
            order,
            resizing: ColumnResizing::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Column specs in display order.
    pub fn visible_columns(&self) -> Vec<&ColumnSpec> {
        self.order
            .ids()
            .iter()
            .filter_map(|id| self.column(id).map(|c| &c.spec))
            .collect()
    }

    /// Displayed width of a column.
    pub fn column_width(&self, id: &ColumnId) -> Option<u16> {
        let column = self.column(id)?;
        let raw = self
            .resizing
            .column_widths
            .get(id)
            .copied()
            .unwrap_or(column.widths.width);
        Some(column.widths.clamp(raw))
    }

    /// Sum of displayed widths.
    pub fn total_width(&self) -> u16 {
        self.order
            .ids()
            .iter()
            .filter_map(|id| self.column_width(id))
            .fold(0u16, u16::saturating_add)
    }

    // -------------------------------------------------------------------------
    // Resizing
    // -------------------------------------------------------------------------

    pub fn resizing(&self) -> &ColumnResizing {
        &self.resizing
    }

    /// Start dragging the right border of `id` from pointer position `x`.
    pub fn begin_resize(&mut self, id: &ColumnId, x: u16) -> Result<(), TableError> {
        let width = self
            .column_width(id)
            .ok_or_else(|| TableError::UnknownColumn(id.clone()))?;
        debug!("Resize of {} started at x={} (width {})", id, x, width);
        self.resizing.begin(id.clone(), x, width);
        Ok(())
    }

    /// Move the dragged border to pointer position `x`.
    ///
    /// Returns the new displayed width, or `None` when no resize is active.
    pub fn resize_to(&mut self, x: u16) -> Option<u16> {
        let (id, raw) = self.resizing.update(x)?;
        let width = self.column_width(&id);
        trace!("Resizing {}: raw width {}, displayed {:?}", id, raw, width);
        width
    }

    pub fn end_resize(&mut self) {
        if let Some(id) = self.resizing.is_resizing_column.as_ref() {
            debug!("Resize of {} ended", id);
        }
        self.resizing.end();
    }

    /// Restore every column to its default width.
    pub fn reset_resizing(&mut self) {
        debug!("Resetting {} column widths", self.resizing.column_widths.len());
        self.resizing.reset();
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn state(&self) -> TableState {
        TableState {
            column_order: self.order.clone(),
            column_resizing: self.resizing.clone(),
        }
    }
}

impl<R: Record> TableLayout for Table<R> {
    fn column_order(&self) -> &ColumnOrder {
        &self.order
    }

    fn set_column_order(&mut self, order: ColumnOrder) -> Result<(), TableError> {
        if !self.order.is_permutation_of(&order) {
            return Err(TableError::NotAPermutation);
        }
        trace!("Column order: {:?}", order);
        self.order = order;
        Ok(())
    }

    fn headers(&self) -> Vec<HeaderCell> {
        let resizing = self.resizing.is_resizing_column.as_ref();
        self.order
            .ids()
            .iter()
            .filter_map(|id| {
                let column = self.column(id)?;
                Some(HeaderCell {
                    id: id.clone(),
                    label: column.spec.header.clone(),
                    width: self.column_width(id)?,
                    resizing: resizing == Some(id),
                })
            })
            .collect()
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_cells(&self, index: usize) -> Option<Vec<String>> {
        let row = self.rows.get(index)?;
        let cells = self
            .order
            .ids()
            .iter()
            .filter_map(|id| self.column(id))
            .map(|column| {
                row.cell(&column.spec.accessor)
                    .map(|v| v.to_string())
                    .unwrap_or_default()
            })
            .collect();
        Some(cells)
    }
}
