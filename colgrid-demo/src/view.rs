//! Screen composition: reset button, grid and state panel.

use colgrid_term::{Buffer, Highlight, HitMap, Rect, TextStyle, Theme, render_grid};
use log::warn;

use crate::app::{App, Target};

pub const BUTTON_X: u16 = 2;
pub const BUTTON_Y: u16 = 1;
pub const GRID_X: u16 = 2;
pub const GRID_Y: u16 = 3;

const BUTTON_LABEL: &str = "[ Reset Resizing ]";
const HINT: &str = "drag a header to reorder · drag ┃ to resize · r reset · q quit";

pub fn render(app: &App, width: u16, height: u16) -> (Buffer, HitMap<Target>) {
    let theme = Theme::new();
    let mut buf = Buffer::new(width, height);
    let mut hits = HitMap::new();

    buf.clear(theme.background.to_rgb());

    // Reset button
    let button_width = BUTTON_LABEL.chars().count() as u16;
    let button = Rect::new(BUTTON_X, BUTTON_Y, button_width, 1);
    buf.fill(button, theme.button.to_rgb());
    let end = buf.set_str(
        BUTTON_X,
        BUTTON_Y,
        BUTTON_LABEL,
        width,
        theme.foreground.to_rgb(),
        TextStyle::new().bold(),
    );
    hits.push(button, Target::ResetButton);

    buf.set_str(
        end + 2,
        BUTTON_Y,
        HINT,
        width,
        theme.muted.to_rgb(),
        TextStyle::new().dim(),
    );

    // Grid
    let highlight = Highlight {
        dragging: app.dragging(),
        drop_target: app.drop_target(),
    };
    let layout = render_grid(app.table(), GRID_X, GRID_Y, highlight, &theme, &mut buf);
    hits.extend(layout.hit_map().map(Target::Grid));

    // State panel
    let json = match app.table().state().to_pretty_json() {
        Ok(json) => json,
        Err(e) => {
            warn!("Cannot serialize table state: {}", e);
            String::new()
        }
    };
    let top = layout.bounds.bottom().saturating_add(1);
    for (line, y) in json.lines().zip(top..height) {
        buf.set_str(
            GRID_X,
            y,
            line,
            width,
            theme.muted.to_rgb(),
            TextStyle::new(),
        );
    }

    (buf, hits)
}

#[cfg(test)]
mod tests {
    use colgrid::{Table, person_columns};

    use super::*;

    fn text(buf: &Buffer) -> Vec<String> {
        (0..buf.height()).map(|y| buf.row_text(y)).collect()
    }

    #[test]
    fn test_frame_contents() {
        let app = App::new(Table::new(person_columns(), Vec::new()).unwrap());
        let (buf, hits) = render(&app, 110, 30);
        let lines = text(&buf);

        assert!(lines[BUTTON_Y as usize].contains(BUTTON_LABEL));
        assert!(lines[GRID_Y as usize + 1].contains("First Name"));
        assert!(lines.iter().any(|l| l.contains("\"columnOrder\": [")));
        assert_eq!(hits.at(BUTTON_X, BUTTON_Y), Some(&Target::ResetButton));
    }

    #[test]
    fn test_state_panel_clipped_to_height() {
        let app = App::new(Table::new(person_columns(), Vec::new()).unwrap());
        // An empty grid covers GRID_Y..GRID_Y + 4, the panel starts one row below
        let (buf, _) = render(&app, 110, GRID_Y + 6);
        assert_eq!(buf.row_text(GRID_Y + 5).trim(), "{");
    }
}
