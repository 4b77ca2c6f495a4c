use std::time::Instant;

use carousel::{Projection, Transition, TransitionConfig};

/// Eases the displayed strip translation toward the projected one.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    config: Option<TransitionConfig>,
}

impl Tween {
    pub fn at(percent: f32) -> Self {
        Self {
            from: percent,
            to: percent,
            start: Instant::now(),
            config: None,
        }
    }

    pub fn value(&self, now: Instant) -> f32 {
        match self.config {
            Some(config) => {
                let t = config.progress(now.saturating_duration_since(self.start));
                self.from + (self.to - self.from) * t
            }
            None => self.to,
        }
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.config
            .is_some_and(|config| now.saturating_duration_since(self.start) < config.duration)
    }

    /// Follow a new projection, jumping or easing as it asks.
    pub fn retarget(&mut self, projection: Projection, now: Instant) {
        let target = projection.translate_percent;
        match projection.transition {
            Transition::Instant => *self = Self::at(target),
            Transition::Animated(config) => {
                if target == self.to {
                    return;
                }
                self.from = self.value(now);
                self.to = target;
                self.start = now;
                self.config = Some(config);
            }
        }
    }
}
