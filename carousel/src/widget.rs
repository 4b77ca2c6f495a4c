//! Owned carousel instance for a presentation layer to drive.

use crate::config::CarouselConfig;
use crate::event::CarouselEvent;
use crate::label;
use crate::projection::Projection;
use crate::slides::Slides;
use crate::state::CarouselState;

/// A mounted carousel.
///
/// Holds the title and item count read from the caller's list, the active
/// config, and the current [`CarouselState`]. Dropping it discards all
/// position state.
///
/// # Example
///
/// ```
/// use carousel::{Carousel, CarouselEvent};
///
/// let mut carousel = Carousel::new("Tiles", 3).unwrap();
/// carousel.dispatch(CarouselEvent::Next);
/// assert_eq!(carousel.index(), 1);
/// assert_eq!(carousel.label(), "Screenshot 2 of 3");
/// ```
#[derive(Debug, Clone)]
pub struct Carousel {
    title: String,
    config: CarouselConfig,
    state: CarouselState,
}

impl Carousel {
    /// Mount a carousel over `total` items.
    /// Returns `None` for an empty list, which disables the carousel.
    pub fn new(title: impl Into<String>, total: usize) -> Option<Self> {
        Self::with_config(title, total, CarouselConfig::default())
    }

    pub fn with_config(
        title: impl Into<String>,
        total: usize,
        config: CarouselConfig,
    ) -> Option<Self> {
        if total == 0 {
            return None;
        }
        Some(Self {
            title: title.into(),
            config,
            state: CarouselState::new(total),
        })
    }

    /// Mount a carousel over a slide deck. The deck stays with the caller.
    pub fn for_slides<T>(slides: &Slides<T>) -> Option<Self> {
        Self::new(slides.title(), slides.len())
    }

    /// Apply an event.
    /// Returns true if anything observable changed.
    pub fn dispatch(&mut self, event: CarouselEvent) -> bool {
        let next = self.state.apply(event, &self.config);
        let changed = next != self.state;
        if next.index() != self.state.index() {
            log::debug!(
                "[carousel] {} moved {} -> {}",
                self.title,
                self.state.index(),
                next.index()
            );
        }
        self.state = next;
        changed
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn index(&self) -> usize {
        self.state.index()
    }

    pub fn total(&self) -> usize {
        self.state.total()
    }

    pub fn dragging(&self) -> bool {
        self.state.dragging()
    }

    /// Whether prev/next buttons, dots and the drag surface should be shown.
    pub fn has_controls(&self) -> bool {
        self.state.has_controls()
    }

    /// Whether the dot at `index` marks the current item.
    pub fn is_active(&self, index: usize) -> bool {
        self.state.index() == index
    }

    pub fn projection(&self) -> Projection {
        Projection::of(&self.state, &self.config)
    }

    /// Region label for the current position.
    pub fn label(&self) -> String {
        label::region_label(self.state.index(), self.state.total())
    }

    pub fn item_label(&self, index: usize) -> String {
        label::item_label(&self.title, index)
    }

    pub fn position_indicator(&self) -> String {
        label::position_indicator(self.state.index(), self.state.total())
    }
}
