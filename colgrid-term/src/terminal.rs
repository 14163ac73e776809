//! Terminal setup, teardown and diffed drawing.

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;

use crate::buffer::Buffer;
use crate::color::{Rgb, TextStyle};
use crate::text::char_width;

/// Owns the terminal while the grid is on screen.
///
/// Raw mode, the alternate screen, mouse capture and focus reporting are
/// enabled on creation and restored on drop or panic.
pub struct Terminal {
    stdout: io::Stdout,
    previous: Buffer,
    /// Next draw must repaint every cell
    force_full: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture,
            EnableFocusChange
        )?;

        let (width, height) = terminal::size()?;
        debug!("Terminal initialized at {}x{}", width, height);

        Ok(Self {
            stdout,
            previous: Buffer::new(width, height),
            force_full: true,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.previous.width(), self.previous.height())
    }

    /// Adopt a new size; the next draw repaints everything.
    pub fn resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        debug!("Terminal resized to {}x{}", width, height);
        self.previous = Buffer::new(width, height);
        self.force_full = true;
        execute!(self.stdout, Clear(ClearType::All))
    }

    /// Write the cells of `buf` that changed since the last draw.
    pub fn draw(&mut self, buf: &Buffer) -> io::Result<()> {
        if buf.width() != self.previous.width() || buf.height() != self.previous.height() {
            self.resize(buf.width(), buf.height())?;
        }

        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        let changed: Vec<_> = if self.force_full {
            (0..buf.height())
                .flat_map(|y| (0..buf.width()).map(move |x| (x, y)))
                .filter_map(|(x, y)| buf.get(x, y).map(|c| (x, y, c)))
                .collect()
        } else {
            buf.diff(&self.previous).collect()
        };

        for (x, y, cell) in changed {
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(ct_color(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(ct_color(cell.bg)))?;
                last_bg = Some(cell.bg);
            }

            if cell.style != last_style {
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                queue!(
                    self.stdout,
                    SetForegroundColor(ct_color(cell.fg)),
                    SetBackgroundColor(ct_color(cell.bg))
                )?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        self.previous = buf.clone();
        self.force_full = false;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn ct_color(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn restore_terminal() -> io::Result<()> {
    execute!(
        io::stdout(),
        DisableFocusChange,
        DisableMouseCapture,
        cursor::Show,
        LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()
}
