//! Column resize state.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::column::ColumnId;

/// Resize state, serialized the way the state panel shows it.
///
/// `column_widths` holds raw widths set by the user; the table clamps them
/// to each column's bounds when displaying. `start_x` and
/// `is_resizing_column` only exist while a border is being dragged; the
/// width captured at the last press stays until the next reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnResizing {
    pub start_x: Option<u16>,
    pub column_width: Option<u16>,
    pub header_id_widths: Option<Vec<(ColumnId, u16)>>,
    pub column_widths: BTreeMap<ColumnId, u16>,
    pub is_resizing_column: Option<ColumnId>,
}

impl ColumnResizing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_resizing(&self) -> bool {
        self.is_resizing_column.is_some()
    }

    pub fn begin(&mut self, column: ColumnId, x: u16, current_width: u16) {
        self.start_x = Some(x);
        self.column_width = Some(current_width);
        self.header_id_widths = Some(vec![(column.clone(), current_width)]);
        self.is_resizing_column = Some(column);
    }

    /// Apply the pointer's horizontal travel since [`begin`](Self::begin).
    ///
    /// Returns the column and its new raw width, or `None` when no resize is
    /// in progress.
    pub fn update(&mut self, x: u16) -> Option<(ColumnId, u16)> {
        let start_x = self.start_x?;
        let column_width = self.column_width?;
        let widths = self.header_id_widths.as_ref()?;

        let delta = i32::from(x) - i32::from(start_x);
        let mut last = None;
        for (id, width) in widths {
            let width = resized_width(*width, column_width, delta);
            self.column_widths.insert(id.clone(), width);
            last = Some((id.clone(), width));
        }
        last
    }

    pub fn end(&mut self) {
        self.start_x = None;
        self.is_resizing_column = None;
    }

    /// Drop every user-set width and any in-progress resize.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Spread `delta` over a header proportionally to its share of the
/// dragged width. For a single header the share is 1.
fn resized_width(header_width: u16, column_width: u16, delta: i32) -> u16 {
    if column_width == 0 {
        return header_width.saturating_add_signed(delta.clamp(i16::MIN.into(), i16::MAX.into()) as i16);
    }
    let share = f64::from(header_width) / f64::from(column_width);
    let width = f64::from(header_width) + f64::from(delta) * share;
    width.round().clamp(0.0, f64::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resized_width() {
        assert_eq!(resized_width(15, 15, 5), 20);
        assert_eq!(resized_width(15, 15, -20), 0);
        assert_eq!(resized_width(10, 20, 10), 15);
        assert_eq!(resized_width(0, 0, 4), 4);
    }

    #[test]
    fn test_end_keeps_captured_width() {
        let mut resizing = ColumnResizing::new();
        resizing.begin("age".into(), 10, 15);
        resizing.update(14);
        resizing.end();

        assert!(!resizing.is_resizing());
        assert_eq!(resizing.start_x, None);
        assert_eq!(resizing.column_width, Some(15));
        assert_eq!(
            resizing.header_id_widths,
            Some(vec![(ColumnId::from("age"), 15)])
        );
        assert_eq!(resizing.update(20), None);

        resizing.reset();
        assert_eq!(resizing, ColumnResizing::default());
    }
}
