use super::Cell;
use crate::color::{Rgb, TextStyle};
use crate::rect::Rect;
use crate::text::char_width;

#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Set a glyph, keeping the background already there.
    pub fn set_char(&mut self, x: u16, y: u16, ch: char, fg: Rgb) {
        if let Some(cell) = self.get_mut(x, y) {
            *cell = Cell::new(ch).with_fg(fg).with_bg(cell.bg);
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        let rect = rect.intersect(self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    *cell = Cell::new(' ').with_bg(bg).with_fg(cell.fg);
                }
            }
        }
    }

    /// Write `text` from `(x, y)`, stopping before column `max_x`.
    ///
    /// Keeps the background already in the buffer. Returns the column after
    /// the last written character.
    pub fn set_str(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        max_x: u16,
        fg: Rgb,
        style: TextStyle,
    ) -> u16 {
        let max_x = max_x.min(self.width);
        let mut cx = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if cx + w > max_x {
                break;
            }
            let bg = self.get(cx, y).map(|c| c.bg).unwrap_or_default();
            self.set(cx, y, Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style));
            if w == 2 {
                let mut cont = Cell::new(' ').with_bg(bg);
                cont.wide_continuation = true;
                self.set(cx + 1, y, cont);
            }
            cx += w;
        }
        cx
    }

    /// Text of one row, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|c| !c.wide_continuation)
            .map(|c| c.char)
            .collect()
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self, bg: Rgb) {
        for cell in &mut self.cells {
            *cell = Cell::default().with_bg(bg);
        }
    }
}
