pub mod column;
pub mod data;
pub mod error;
pub mod layout;
pub mod order;
pub mod record;
pub mod reorder;
pub mod resize;
pub mod state;
pub mod table;

pub use column::{ColumnDefaults, ColumnId, ColumnSpec, ResolvedWidths};
pub use data::{Person, Status, make_data, person_columns};
pub use error::TableError;
pub use layout::{HeaderCell, TableLayout};
pub use order::ColumnOrder;
pub use record::{CellValue, Record};
pub use reorder::{DragSession, ReorderController};
pub use resize::ColumnResizing;
pub use state::TableState;
pub use table::Table;
