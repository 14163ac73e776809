//! Terminal input reduced to what the grid cares about.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use log::trace;

/// Input events, in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Mouse button pressed
    Press { x: u16, y: u16, button: MouseButton },
    /// Mouse moved with a button held
    Drag { x: u16, y: u16, button: MouseButton },
    /// Mouse button released
    Release { x: u16, y: u16, button: MouseButton },
    /// Mouse moved with no button held
    Move { x: u16, y: u16 },
    Key { key: Key, modifiers: Modifiers },
    /// The terminal window lost focus
    FocusLost,
    Resize { width: u16, height: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

fn convert_key_event(event: KeyEvent) -> Option<Event> {
    // Release/repeat reports only arrive with the kitty protocol enabled
    if event.kind != KeyEventKind::Press {
        return None;
    }
    Some(Event::Key {
        key: convert_key(event.code)?,
        modifiers: event.modifiers.into(),
    })
}

fn convert_mouse_event(event: MouseEvent) -> Option<Event> {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(button) => Some(Event::Press {
            x,
            y,
            button: button.into(),
        }),
        MouseEventKind::Drag(button) => Some(Event::Drag {
            x,
            y,
            button: button.into(),
        }),
        MouseEventKind::Up(button) => Some(Event::Release {
            x,
            y,
            button: button.into(),
        }),
        MouseEventKind::Moved => Some(Event::Move { x, y }),
        _ => None,
    }
}

/// Convert a crossterm event, dropping the kinds the grid ignores.
pub fn convert_event(event: CrosstermEvent) -> Option<Event> {
    let converted = match event {
        CrosstermEvent::Key(key) => convert_key_event(key),
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse),
        CrosstermEvent::FocusLost => Some(Event::FocusLost),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    };
    if converted.is_none() {
        trace!("Dropped terminal event");
    }
    converted
}
