//! Carousel configuration

use std::time::Duration;

use crate::transitions::{Easing, TransitionConfig};

/// Tunable constants for gesture commits and slide easing.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use carousel::{CarouselConfig, Easing};
///
/// let config = CarouselConfig::default()
///     .with_min_commit_px(24.0)
///     .with_transition(Duration::from_millis(200), Easing::EaseOut);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Smallest drag, in pixels, that can commit a slide change.
    ///
    /// Default: 40
    pub min_commit_px: f32,

    /// Fraction of one item's share of the container width that a drag must
    /// exceed when that is larger than `min_commit_px`.
    ///
    /// Default: 0.08
    pub commit_ratio: f32,

    /// Transition used when the strip settles after a gesture or jump.
    ///
    /// Default: 360ms, cubic-bezier(.22, .61, .36, 1)
    pub transition: TransitionConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            min_commit_px: 40.0,
            commit_ratio: 0.08,
            transition: TransitionConfig::new(
                Duration::from_millis(360),
                Easing::CubicBezier(0.22, 0.61, 0.36, 1.0),
            ),
        }
    }
}

impl CarouselConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum commit distance.
    pub fn with_min_commit_px(mut self, px: f32) -> Self {
        self.min_commit_px = px;
        self
    }

    /// Sets the width-relative commit ratio.
    pub fn with_commit_ratio(mut self, ratio: f32) -> Self {
        self.commit_ratio = ratio;
        self
    }

    /// Sets the settle transition.
    pub fn with_transition(mut self, duration: Duration, easing: Easing) -> Self {
        self.transition = TransitionConfig::new(duration, easing);
        self
    }
}
