//! Normalizes keyboard and control inputs into navigation intents.

use crate::event::{CarouselEvent, Key, Modifiers};

/// A request to move the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Step relative to the current item.
    Advance(i64),
    /// Jump to an absolute position.
    GoTo(usize),
}

/// Map a key press to an intent.
///
/// Only bare left/right arrows navigate, and only when there is more than
/// one item.
pub fn key_intent(key: Key, modifiers: Modifiers, total: usize) -> Option<Intent> {
    if total <= 1 || modifiers.ctrl || modifiers.alt {
        return None;
    }
    match key {
        Key::Left => Some(Intent::Advance(-1)),
        Key::Right => Some(Intent::Advance(1)),
        _ => None,
    }
}

/// Map a discrete (non-gesture) event to an intent.
///
/// Gesture events return `None`; their commits come from the gesture tracker.
pub fn intent_for(event: &CarouselEvent, total: usize) -> Option<Intent> {
    if total <= 1 {
        return None;
    }
    match *event {
        CarouselEvent::Key { key, modifiers } => key_intent(key, modifiers, total),
        CarouselEvent::Prev => Some(Intent::Advance(-1)),
        CarouselEvent::Next => Some(Intent::Advance(1)),
        CarouselEvent::Dot(n) => Some(Intent::GoTo(n)),
        CarouselEvent::GestureStart { .. }
        | CarouselEvent::GestureMove { .. }
        | CarouselEvent::GestureEnd { .. }
        | CarouselEvent::GestureCancel => None,
    }
}
