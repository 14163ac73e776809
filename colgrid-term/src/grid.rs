//! Draws a [`TableLayout`] as a bordered grid.
//!
//! ```text
//! ┌──────────┬─────┐
//! │ First    │ Age ┃   <- header row; each right border is that column's resizer
//! ├──────────┼─────┤
//! │ ember    │ 21  │
//! └──────────┴─────┘
//! ```

use colgrid::{ColumnId, TableLayout};

use crate::buffer::Buffer;
use crate::color::{Rgb, TextStyle};
use crate::hit::HitMap;
use crate::rect::Rect;
use crate::text::truncate_to_width;
use crate::theme::Theme;

/// Rows above the first body row: top border, header, separator.
const HEADER_ROWS: u16 = 3;

/// What a point inside the grid refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridTarget {
    Header(ColumnId),
    Resizer(ColumnId),
}

/// Per-frame decoration of the headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlight<'a> {
    pub dragging: Option<&'a ColumnId>,
    pub drop_target: Option<&'a ColumnId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSlot {
    pub id: ColumnId,
    /// Header label area
    pub header: Rect,
    /// Right border from the top edge down to the header separator
    pub resizer: Rect,
}

/// Where the grid and its headers ended up on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    pub bounds: Rect,
    pub columns: Vec<ColumnSlot>,
}

impl GridLayout {
    /// Compute positions without drawing.
    pub fn compute(table: &impl TableLayout, x: u16, y: u16) -> Self {
        let mut columns = Vec::new();
        let mut cx = x.saturating_add(1);
        for header in table.headers() {
            columns.push(ColumnSlot {
                id: header.id,
                header: Rect::new(cx, y.saturating_add(1), header.width, 1),
                resizer: Rect::new(cx.saturating_add(header.width), y, 1, HEADER_ROWS),
            });
            cx = cx.saturating_add(header.width).saturating_add(1);
        }

        let rows = u16::try_from(table.row_count()).unwrap_or(u16::MAX);
        let bounds = Rect::new(
            x,
            y,
            cx.saturating_sub(x),
            rows.saturating_add(HEADER_ROWS + 1),
        );
        Self { bounds, columns }
    }

    pub fn hit_map(&self) -> HitMap<GridTarget> {
        let mut hits = HitMap::new();
        for slot in &self.columns {
            hits.push(slot.header, GridTarget::Header(slot.id.clone()));
        }
        for slot in &self.columns {
            hits.push(slot.resizer, GridTarget::Resizer(slot.id.clone()));
        }
        hits
    }
}

/// Draw `table` with its top-left corner at `(x, y)`.
pub fn render_grid(
    table: &impl TableLayout,
    x: u16,
    y: u16,
    highlight: Highlight<'_>,
    theme: &Theme,
    buf: &mut Buffer,
) -> GridLayout {
    let layout = GridLayout::compute(table, x, y);
    if layout.columns.is_empty() {
        return layout;
    }

    let border = theme.border.to_rgb();
    let fg = theme.foreground.to_rgb();
    let bounds = layout.bounds;
    let header_y = y.saturating_add(1);
    let body_top = y.saturating_add(HEADER_ROWS);
    let bottom = bounds.bottom().saturating_sub(1);

    buf.fill(bounds, theme.background.to_rgb());

    // Horizontal rules
    draw_rule(buf, &layout, y, ('┌', '┬', '┐'), border);
    draw_rule(buf, &layout, y.saturating_add(2), ('├', '┼', '┤'), border);
    draw_rule(buf, &layout, bottom, ('└', '┴', '┘'), border);

    // Vertical borders for header and body rows
    let verticals: Vec<u16> = std::iter::once(x)
        .chain(layout.columns.iter().map(|c| c.resizer.x))
        .collect();
    for row_y in std::iter::once(header_y).chain(body_top..bottom) {
        for &vx in &verticals {
            buf.set_char(vx, row_y, '│', border);
        }
    }

    // Headers
    let headers = table.headers();
    for (slot, header) in layout.columns.iter().zip(&headers) {
        let bg = if highlight.dragging == Some(&slot.id) {
            theme.dragging.to_rgb()
        } else if highlight.drop_target == Some(&slot.id) {
            theme.drop_target.to_rgb()
        } else {
            theme.header.to_rgb()
        };
        buf.fill(slot.header, bg);
        draw_cell_text(buf, slot.header, &header.label, fg, TextStyle::new().bold());

        let resizer = if header.resizing {
            theme.resizer_active.to_rgb()
        } else {
            theme.resizer.to_rgb()
        };
        buf.set_char(slot.resizer.x, header_y, '┃', resizer);
    }

    // Body
    for row in 0..table.row_count() {
        let Ok(offset) = u16::try_from(row) else {
            break;
        };
        let row_y = body_top.saturating_add(offset);
        if row_y >= buf.height() {
            break;
        }
        let Some(cells) = table.row_cells(row) else {
            continue;
        };
        for (slot, text) in layout.columns.iter().zip(&cells) {
            let area = Rect::new(slot.header.x, row_y, slot.header.width, 1);
            draw_cell_text(buf, area, text, fg, TextStyle::new());
        }
    }

    layout
}

fn draw_rule(buf: &mut Buffer, layout: &GridLayout, y: u16, glyphs: (char, char, char), fg: Rgb) {
    let (left, junction, right) = glyphs;
    let x = layout.bounds.x;
    let end = layout.bounds.right().saturating_sub(1);
    for cx in x..=end {
        let ch = if cx == x {
            left
        } else if cx == end {
            right
        } else if layout.columns.iter().any(|c| c.resizer.x == cx) {
            junction
        } else {
            '─'
        };
        buf.set_char(cx, y, ch, fg);
    }
}

/// One cell of padding on the left, ellipsis when the text does not fit.
fn draw_cell_text(buf: &mut Buffer, area: Rect, text: &str, fg: Rgb, style: TextStyle) {
    if area.width < 2 {
        return;
    }
    let text = truncate_to_width(text, (area.width - 1) as usize);
    buf.set_str(area.x.saturating_add(1), area.y, &text, area.right(), fg, style);
}
