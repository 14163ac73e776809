use crate::color::Color;

/// Colors used to draw the grid and its surroundings.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub header: Color,
    /// Header being dragged
    pub dragging: Color,
    /// Header the dragged column last entered
    pub drop_target: Color,
    pub resizer: Color,
    pub resizer_active: Color,
    pub button: Color,
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            background: Color::oklch(0.18, 0.01, 250.0),
            foreground: Color::oklch(0.95, 0.0, 0.0),
            muted: Color::oklch(0.65, 0.02, 250.0),
            border: Color::oklch(0.45, 0.02, 250.0),
            header: Color::oklch(0.26, 0.03, 250.0),
            dragging: Color::oklch(0.55, 0.15, 300.0),
            drop_target: Color::oklch(0.38, 0.08, 300.0),
            resizer: Color::oklch(0.55, 0.2, 265.0),
            resizer_active: Color::oklch(0.6, 0.22, 29.0),
            button: Color::oklch(0.32, 0.05, 250.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
