use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtButton,
    MouseEvent, MouseEventKind,
};

use colgrid_term::{Event, HitMap, Key, Modifiers, MouseButton, Rect, convert_event};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_mouse_lifecycle() {
    assert_eq!(
        convert_event(mouse(MouseEventKind::Down(CtButton::Left), 4, 2)),
        Some(Event::Press {
            x: 4,
            y: 2,
            button: MouseButton::Left
        })
    );
    assert_eq!(
        convert_event(mouse(MouseEventKind::Drag(CtButton::Left), 9, 2)),
        Some(Event::Drag {
            x: 9,
            y: 2,
            button: MouseButton::Left
        })
    );
    assert_eq!(
        convert_event(mouse(MouseEventKind::Up(CtButton::Left), 9, 3)),
        Some(Event::Release {
            x: 9,
            y: 3,
            button: MouseButton::Left
        })
    );
    assert_eq!(
        convert_event(mouse(MouseEventKind::Moved, 1, 1)),
        Some(Event::Move { x: 1, y: 1 })
    );
    assert_eq!(convert_event(mouse(MouseEventKind::ScrollDown, 1, 1)), None);
}

#[test]
fn test_key_press_only() {
    let press = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
    assert_eq!(
        convert_event(CtEvent::Key(press)),
        Some(Event::Key {
            key: Key::Char('r'),
            modifiers: Modifiers::default()
        })
    );

    let release = KeyEvent::new_with_kind(
        KeyCode::Char('r'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    );
    assert_eq!(convert_event(CtEvent::Key(release)), None);

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    match convert_event(CtEvent::Key(ctrl_c)) {
        Some(Event::Key { key, modifiers }) => {
            assert_eq!(key, Key::Char('c'));
            assert!(modifiers.ctrl);
            assert!(!modifiers.shift && !modifiers.alt);
        }
        other => panic!("unexpected {other:?}"),
    }

    for code in [KeyCode::F(1), KeyCode::Enter, KeyCode::Tab, KeyCode::Backspace] {
        assert_eq!(
            convert_event(CtEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
            None
        );
    }
}

#[test]
fn test_focus_and_resize() {
    assert_eq!(convert_event(CtEvent::FocusLost), Some(Event::FocusLost));
    assert_eq!(convert_event(CtEvent::FocusGained), None);
    assert_eq!(
        convert_event(CtEvent::Resize(80, 24)),
        Some(Event::Resize {
            width: 80,
            height: 24
        })
    );
}

// ============================================================================
// Hit map
// ============================================================================

#[test]
fn test_later_regions_win() {
    let mut hits = HitMap::new();
    hits.push(Rect::new(0, 0, 10, 10), "bottom");
    hits.push(Rect::new(5, 5, 10, 10), "top");
    hits.push(Rect::new(0, 0, 0, 0), "empty");

    assert_eq!(hits.len(), 2);
    assert_eq!(hits.at(6, 6), Some(&"top"));
    assert_eq!(hits.at(1, 1), Some(&"bottom"));
    assert_eq!(hits.at(20, 20), None);
}

#[test]
fn test_map_and_extend() {
    let mut hits = HitMap::new();
    hits.push(Rect::new(0, 0, 2, 1), 1);
    let mut mapped = hits.map(|n| n * 10);
    let mut other = HitMap::new();
    other.push(Rect::new(0, 0, 1, 1), 99);
    mapped.extend(other);

    assert_eq!(mapped.at(1, 0), Some(&10));
    assert_eq!(mapped.at(0, 0), Some(&99));
}
