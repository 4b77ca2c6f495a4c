//! Carousel state and its transition function.

use crate::config::CarouselConfig;
use crate::event::CarouselEvent;
use crate::gesture::{GestureOutcome, GestureTracker};
use crate::input::{intent_for, Intent};
use crate::navigator;

/// Snapshot of one carousel instance.
///
/// Values are immutable; every transition returns a new state. `index` only
/// changes through [`CarouselState::navigate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselState {
    index: usize,
    total: usize,
    gesture: GestureTracker,
}

impl CarouselState {
    /// Fresh state positioned at the first item.
    pub fn new(total: usize) -> Self {
        Self {
            index: 0,
            total,
            gesture: GestureTracker::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn drag_offset_px(&self) -> f32 {
        self.gesture.offset_px()
    }

    /// Width sampled at the start of the open gesture.
    pub fn container_width_px(&self) -> Option<f32> {
        self.gesture.container_width_px()
    }

    /// Whether navigation controls and the drag surface are active.
    pub fn has_controls(&self) -> bool {
        self.total > 1
    }

    /// Apply a navigation intent through the index navigator.
    pub fn navigate(self, intent: Intent) -> Self {
        let result = match intent {
            Intent::Advance(delta) => navigator::advance(self.index, self.total, delta),
            Intent::GoTo(target) => navigator::go_to_index(target, self.total),
        };
        match result {
            Ok(index) => Self { index, ..self },
            Err(err) => {
                log::warn!("[carousel] {:?} dropped: {}", intent, err);
                self
            }
        }
    }

    /// React to one input event.
    pub fn apply(self, event: CarouselEvent, config: &CarouselConfig) -> Self {
        if !self.has_controls() {
            return self;
        }

        let mut next = self;
        match event {
            CarouselEvent::GestureStart {
                x,
                container_width_px,
            } => {
                next.gesture.start(x, container_width_px);
                next
            }
            CarouselEvent::GestureMove { x } => {
                next.gesture.update(x);
                next
            }
            CarouselEvent::GestureEnd { x } => {
                let outcome = next.gesture.end(x, next.total, config);
                next.settle(outcome)
            }
            CarouselEvent::GestureCancel => {
                let outcome = next.gesture.release(next.total, config);
                next.settle(outcome)
            }
            other => match intent_for(&other, next.total) {
                Some(intent) => next.navigate(intent),
                None => next,
            },
        }
    }

    fn settle(self, outcome: GestureOutcome) -> Self {
        match outcome.intent() {
            Some(intent) => self.navigate(intent),
            None => self,
        }
    }
}

/// Pure `(state, event) -> state` transition.
pub fn transition(
    state: CarouselState,
    event: CarouselEvent,
    config: &CarouselConfig,
) -> CarouselState {
    state.apply(event, config)
}
