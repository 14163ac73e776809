//! Error types for table construction and mutation.

use thiserror::Error;

use crate::column::ColumnId;

/// Errors raised by the table provider.
///
/// The reorder controller never produces these; it only issues orders that
/// are permutations of the current one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("table has no columns")]
    NoColumns,
    #[error("duplicate column id: {0}")]
    DuplicateColumn(ColumnId),
    #[error("column {id}: min width {min} exceeds max width {max}")]
    InvalidWidthBounds { id: ColumnId, min: u16, max: u16 },
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnId),
    #[error("column order is not a permutation of the visible columns")]
    NotAPermutation,
}
