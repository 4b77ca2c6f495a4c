//! Maps carousel state to the strip's horizontal translation.

use crate::config::CarouselConfig;
use crate::state::CarouselState;
use crate::transitions::TransitionConfig;

/// Translation of the item strip, as a percentage.
///
/// `-index * 100` places item `index` in the viewport; an in-progress drag
/// adds `(offset / width) * 100 * total`. A width that is not a positive
/// finite number contributes no drag term.
pub fn translate_fraction(
    index: usize,
    total: usize,
    drag_offset_px: f32,
    container_width_px: f32,
) -> f32 {
    let base = -(index as f32) * 100.0;
    if drag_offset_px == 0.0 || !container_width_px.is_finite() || container_width_px <= 0.0 {
        return base;
    }
    let drag = (drag_offset_px / container_width_px) * 100.0 * total as f32;
    if drag.is_finite() { base + drag } else { base }
}

/// How the presentation layer should move to a new translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Follow immediately (pointer is held).
    Instant,
    /// Ease toward the target.
    Animated(TransitionConfig),
}

/// Everything the presentation layer needs to position the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub translate_percent: f32,
    pub dragging: bool,
    pub transition: Transition,
}

impl Projection {
    pub fn of(state: &CarouselState, config: &CarouselConfig) -> Self {
        let translate_percent = translate_fraction(
            state.index(),
            state.total(),
            state.drag_offset_px(),
            state.container_width_px().unwrap_or(0.0),
        );
        let dragging = state.dragging();
        let transition = if dragging {
            Transition::Instant
        } else {
            Transition::Animated(config.transition)
        };
        Self {
            translate_percent,
            dragging,
            transition,
        }
    }

    /// The translation converted to a distance for a viewport `viewport_width` wide.
    pub fn offset_in(&self, viewport_width: f32) -> f32 {
        self.translate_percent / 100.0 * viewport_width
    }
}
