//! Column identifiers and column specifications.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, unique name of a column.
///
/// Built from the column's accessor. Ordering between ids carries no meaning;
/// display order lives in [`ColumnOrder`](crate::ColumnOrder).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Width defaults applied to columns that leave a bound unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefaults {
    pub min_width: u16,
    pub width: u16,
    pub max_width: u16,
}

impl Default for ColumnDefaults {
    fn default() -> Self {
        Self {
            min_width: 15,
            width: 15,
            max_width: 40,
        }
    }
}

/// Column configuration.
///
/// # Examples
///
/// ```
/// use colgrid::ColumnSpec;
///
/// let columns = vec![
///     ColumnSpec::new("First Name", "firstName"),
///     ColumnSpec::new("Age", "age").width(5),
///     ColumnSpec::new("Notes", "notes").min_width(10).max_width(60),
/// ];
/// assert_eq!(columns[1].id().as_str(), "age");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Header text
    pub header: String,
    /// Record field this column displays; also the column id
    pub accessor: String,
    pub width: Option<u16>,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
}

impl ColumnSpec {
    pub fn new(header: impl Into<String>, accessor: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor: accessor.into(),
            width: None,
            min_width: None,
            max_width: None,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn max_width(mut self, max_width: u16) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn id(&self) -> ColumnId {
        ColumnId::new(self.accessor.clone())
    }

    /// Resolve unset widths against the table defaults.
    pub fn resolve(&self, defaults: &ColumnDefaults) -> ResolvedWidths {
        ResolvedWidths {
            width: self.width.unwrap_or(defaults.width),
            min: self.min_width.unwrap_or(defaults.min_width),
            max: self.max_width.unwrap_or(defaults.max_width),
        }
    }
}

/// Column widths after defaults have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWidths {
    pub width: u16,
    pub min: u16,
    pub max: u16,
}

impl ResolvedWidths {
    /// Width actually displayed for a raw (spec or resized) width.
    ///
    /// Requires `min <= max`, which table construction enforces.
    pub fn clamp(&self, raw: u16) -> u16 {
        raw.clamp(self.min, self.max)
    }
}
