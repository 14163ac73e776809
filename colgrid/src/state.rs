use serde::Serialize;

use crate::order::ColumnOrder;
use crate::resize::ColumnResizing;

/// Snapshot of a table's user-driven state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    pub column_order: ColumnOrder,
    pub column_resizing: ColumnResizing,
}

impl TableState {
    /// Indented JSON, as shown under the demo table.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
