use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton as CtButton};

use carousel::input::{intent_for, key_intent};
use carousel::{CarouselEvent, Intent, Key, Modifiers, MouseButton};

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_arrows_map_to_steps() {
    assert_eq!(
        key_intent(Key::Left, Modifiers::new(), 3),
        Some(Intent::Advance(-1))
    );
    assert_eq!(
        key_intent(Key::Right, Modifiers::new(), 3),
        Some(Intent::Advance(1))
    );
}

#[test]
fn test_other_keys_do_nothing() {
    for key in [Key::Up, Key::Down, Key::Enter, Key::Char('l'), Key::Home] {
        assert_eq!(key_intent(key, Modifiers::new(), 3), None, "{:?}", key);
    }
}

#[test]
fn test_modified_arrows_are_ignored() {
    assert_eq!(key_intent(Key::Left, Modifiers::ctrl(), 3), None);
    assert_eq!(key_intent(Key::Right, Modifiers::alt(), 3), None);
}

#[test]
fn test_keyboard_inactive_for_single_item() {
    assert_eq!(key_intent(Key::Right, Modifiers::new(), 1), None);
    assert_eq!(key_intent(Key::Left, Modifiers::new(), 0), None);
}

// ============================================================================
// Controls
// ============================================================================

#[test]
fn test_buttons_and_dots() {
    assert_eq!(intent_for(&CarouselEvent::Prev, 4), Some(Intent::Advance(-1)));
    assert_eq!(intent_for(&CarouselEvent::Next, 4), Some(Intent::Advance(1)));
    assert_eq!(intent_for(&CarouselEvent::Dot(2), 4), Some(Intent::GoTo(2)));
}

#[test]
fn test_controls_hidden_for_single_item() {
    assert_eq!(intent_for(&CarouselEvent::Next, 1), None);
    assert_eq!(intent_for(&CarouselEvent::Dot(0), 1), None);
}

#[test]
fn test_gesture_events_produce_no_direct_intent() {
    let events = [
        CarouselEvent::GestureStart {
            x: 0.0,
            container_width_px: 100.0,
        },
        CarouselEvent::GestureMove { x: -90.0 },
        CarouselEvent::GestureEnd { x: -90.0 },
        CarouselEvent::GestureCancel,
    ];
    for event in events {
        assert_eq!(intent_for(&event, 4), None, "{:?}", event);
    }
}

// ============================================================================
// Crossterm conversion
// ============================================================================

#[test]
fn test_key_code_conversion() {
    assert_eq!(Key::from(KeyCode::Left), Key::Left);
    assert_eq!(Key::from(KeyCode::Right), Key::Right);
    assert_eq!(Key::from(KeyCode::Esc), Key::Escape);
    assert_eq!(Key::from(KeyCode::Char('q')), Key::Char('q'));
    assert_eq!(Key::from(KeyCode::F(5)), Key::Other);
}

#[test]
fn test_modifier_conversion() {
    let mods = Modifiers::from(KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    assert!(mods.ctrl);
    assert!(mods.shift);
    assert!(!mods.alt);
    assert!(Modifiers::from(KeyModifiers::NONE).none());
}

#[test]
fn test_key_event_conversion() {
    let event = CarouselEvent::from(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
    assert_eq!(
        event,
        CarouselEvent::Key {
            key: Key::Right,
            modifiers: Modifiers::new(),
        }
    );
    assert_eq!(intent_for(&event, 2), Some(Intent::Advance(1)));
}

#[test]
fn test_mouse_button_conversion() {
    assert_eq!(MouseButton::from(CtButton::Left), MouseButton::Left);
    assert_eq!(MouseButton::from(CtButton::Right), MouseButton::Right);
    assert_eq!(MouseButton::from(CtButton::Middle), MouseButton::Middle);
}
