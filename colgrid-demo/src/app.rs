//! Demo state and the mapping from pointer gestures to the drag lifecycle.

use colgrid::{ColumnId, Person, ReorderController, Table, make_data, person_columns};
use colgrid_term::{Buffer, Event, GridTarget, HitMap, Key, MouseButton};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::view;

/// Something on screen the pointer can act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Grid(GridTarget),
    ResetButton,
}

/// Where the current mouse gesture is.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Gesture {
    Idle,
    /// Pressed on a header; turns into a drag on the first motion
    Armed(ColumnId),
    /// Dragging a header; `over` is the header last entered
    Dragging { over: Option<ColumnId> },
    Resizing,
}

pub struct App {
    table: Table<Person>,
    reorder: ReorderController,
    gesture: Gesture,
    hits: HitMap<Target>,
    quit: bool,
}

impl App {
    pub fn new(table: Table<Person>) -> Self {
        Self {
            table,
            reorder: ReorderController::new(),
            gesture: Gesture::Idle,
            hits: HitMap::new(),
            quit: false,
        }
    }

    pub fn from_config(config: &DemoConfig) -> Result<Self, DemoError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let rows = make_data(config.rows, &mut rng);
        info!("Generated {} rows", rows.len());
        Ok(Self::new(Table::new(person_columns(), rows)?))
    }

    pub fn table(&self) -> &Table<Person> {
        &self.table
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Column being dragged, once the drag has started.
    pub fn dragging(&self) -> Option<&ColumnId> {
        self.reorder.active()
    }

    /// Header the dragged column last entered.
    pub fn drop_target(&self) -> Option<&ColumnId> {
        match &self.gesture {
            Gesture::Dragging { over } => over.as_ref(),
            _ => None,
        }
    }

    /// Render a frame and remember its hit regions for the next events.
    pub fn frame(&mut self, width: u16, height: u16) -> Buffer {
        let (buf, hits) = view::render(self, width, height);
        self.hits = hits;
        buf
    }

    /// Handle one input event. Returns whether the screen needs a redraw.
    pub fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::Press {
                x,
                y,
                button: MouseButton::Left,
            } => self.on_press(x, y),
            Event::Drag {
                x,
                y,
                button: MouseButton::Left,
            } => self.on_drag(x, y),
            Event::Release {
                x,
                y,
                button: MouseButton::Left,
            } => self.on_release(x, y),
            Event::Key { key, modifiers } => match key {
                Key::Char('q') => {
                    self.quit = true;
                    false
                }
                Key::Char('c') if modifiers.ctrl => {
                    self.quit = true;
                    false
                }
                Key::Char('r') => {
                    self.table.reset_resizing();
                    true
                }
                Key::Escape => self.cancel(),
                _ => false,
            },
            Event::FocusLost => self.cancel(),
            Event::Resize { .. } => true,
            _ => false,
        }
    }

    fn on_press(&mut self, x: u16, y: u16) -> bool {
        // A press while another gesture is live means we missed its release
        if self.gesture != Gesture::Idle {
            self.cancel();
        }

        match self.hits.at(x, y).cloned() {
            Some(Target::Grid(GridTarget::Header(id))) => {
                self.gesture = Gesture::Armed(id);
                false
            }
            Some(Target::Grid(GridTarget::Resizer(id))) => {
                match self.table.begin_resize(&id, x) {
                    Ok(()) => self.gesture = Gesture::Resizing,
                    Err(e) => warn!("Cannot resize: {}", e),
                }
                true
            }
            Some(Target::ResetButton) => {
                self.table.reset_resizing();
                true
            }
            None => false,
        }
    }

    fn on_drag(&mut self, x: u16, y: u16) -> bool {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle => false,
            Gesture::Armed(id) => {
                self.reorder.begin_drag(id);
                self.gesture = Gesture::Dragging { over: None };
                self.enter_header_at(x, y);
                true
            }
            Gesture::Dragging { over } => {
                self.gesture = Gesture::Dragging { over };
                self.enter_header_at(x, y)
            }
            Gesture::Resizing => {
                self.gesture = Gesture::Resizing;
                self.table.resize_to(x);
                true
            }
        }
    }

    fn on_release(&mut self, x: u16, y: u16) -> bool {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle | Gesture::Armed(_) => false,
            Gesture::Dragging { .. } => {
                match self.header_at(x, y) {
                    Some(id) => self.reorder.drop(&id),
                    None => self.reorder.end_drag(),
                }
                true
            }
            Gesture::Resizing => {
                self.table.end_resize();
                true
            }
        }
    }

    /// Abandon any drag or resize in progress.
    fn cancel(&mut self) -> bool {
        if self.gesture == Gesture::Idle {
            return false;
        }
        debug!("Cancelling {:?}", self.gesture);
        self.reorder.end_drag();
        self.table.end_resize();
        self.gesture = Gesture::Idle;
        true
    }

    /// Column whose header region contains the point. The resizer belongs to
    /// its column's header.
    fn header_at(&self, x: u16, y: u16) -> Option<ColumnId> {
        match self.hits.at(x, y)? {
            Target::Grid(GridTarget::Header(id)) | Target::Grid(GridTarget::Resizer(id)) => {
                Some(id.clone())
            }
            Target::ResetButton => None,
        }
    }

    /// Fire a drag-enter when the pointer crosses into a header. Leaving the
    /// header row forgets the last one, so coming back to it fires again.
    fn enter_header_at(&mut self, x: u16, y: u16) -> bool {
        let target = self.header_at(x, y);
        let Gesture::Dragging { over } = &mut self.gesture else {
            return false;
        };
        if *over == target {
            return false;
        }
        *over = target.clone();
        if let Some(target) = target {
            self.reorder.drag_enter(&target, &mut self.table);
        }
        true
    }
}
