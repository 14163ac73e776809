pub mod buffer;
pub mod color;
pub mod event;
pub mod grid;
pub mod hit;
pub mod rect;
pub mod terminal;
pub mod text;
pub mod theme;

pub use buffer::{Buffer, Cell};
pub use color::{Color, Rgb, TextStyle};
pub use event::{Event, Key, Modifiers, MouseButton, convert_event};
pub use grid::{ColumnSlot, GridLayout, GridTarget, Highlight, render_grid};
pub use hit::HitMap;
pub use rect::Rect;
pub use terminal::Terminal;
pub use theme::Theme;
