//! Drag gesture tracking for the slide strip.

use crate::config::CarouselConfig;
use crate::input::Intent;

/// Where the tracker is in a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    Dragging {
        start_x: f32,
        container_width_px: f32,
        offset_px: f32,
    },
}

/// Result of ending a drag session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// The drag crossed the commit threshold; step by `delta` items.
    Commit { delta: i64 },
    /// The drag was too short and reverts.
    Cancelled,
    /// There was no open session to end.
    Ignored,
}

impl GestureOutcome {
    /// The navigation intent this outcome feeds, if any.
    pub fn intent(self) -> Option<Intent> {
        match self {
            GestureOutcome::Commit { delta } => Some(Intent::Advance(delta)),
            GestureOutcome::Cancelled | GestureOutcome::Ignored => None,
        }
    }
}

/// Minimum drag magnitude that commits a slide change.
///
/// The larger of `config.min_commit_px` and `config.commit_ratio` of one
/// item's share of the container.
pub fn commit_threshold(container_width_px: f32, total: usize, config: &CarouselConfig) -> f32 {
    let per_item = container_width_px / total.max(1) as f32;
    config.min_commit_px.max(per_item * config.commit_ratio)
}

/// Idle/Dragging state machine for one drag surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureTracker {
    phase: Phase,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Signed displacement of the open session, `0.0` when idle.
    pub fn offset_px(&self) -> f32 {
        match self.phase {
            Phase::Dragging { offset_px, .. } => offset_px,
            Phase::Idle => 0.0,
        }
    }

    /// Container width captured when the open session began.
    pub fn container_width_px(&self) -> Option<f32> {
        match self.phase {
            Phase::Dragging {
                container_width_px, ..
            } => Some(container_width_px),
            Phase::Idle => None,
        }
    }

    /// Open a session at `x`.
    /// Returns false (and leaves the open session untouched) if already dragging.
    pub fn start(&mut self, x: f32, container_width_px: f32) -> bool {
        if self.is_dragging() {
            log::debug!("[gesture] start at {} ignored, session already open", x);
            return false;
        }
        self.phase = Phase::Dragging {
            start_x: x,
            container_width_px,
            offset_px: 0.0,
        };
        true
    }

    /// Follow the pointer to `x`.
    /// Returns true if the offset changed.
    pub fn update(&mut self, x: f32) -> bool {
        let Phase::Dragging {
            start_x, offset_px, ..
        } = &mut self.phase
        else {
            return false;
        };
        let next = x - *start_x;
        log::trace!("[gesture] offset {} -> {}", offset_px, next);
        if *offset_px == next {
            return false;
        }
        *offset_px = next;
        true
    }

    /// Close the session after a final move to `x`.
    pub fn end(&mut self, x: f32, total: usize, config: &CarouselConfig) -> GestureOutcome {
        if !self.is_dragging() {
            log::debug!("[gesture] end without start ignored");
            return GestureOutcome::Ignored;
        }
        self.update(x);
        self.release(total, config)
    }

    /// Close the session using the last recorded offset.
    pub fn release(&mut self, total: usize, config: &CarouselConfig) -> GestureOutcome {
        let Phase::Dragging {
            container_width_px,
            offset_px,
            ..
        } = std::mem::take(&mut self.phase)
        else {
            return GestureOutcome::Ignored;
        };

        let threshold = commit_threshold(container_width_px, total, config);
        if offset_px.abs() > threshold {
            // Content moved right reveals the previous item
            let delta = if offset_px > 0.0 { -1 } else { 1 };
            log::debug!(
                "[gesture] commit {:+} (offset {}, threshold {})",
                delta,
                offset_px,
                threshold
            );
            GestureOutcome::Commit { delta }
        } else {
            log::debug!(
                "[gesture] cancelled (offset {}, threshold {})",
                offset_px,
                threshold
            );
            GestureOutcome::Cancelled
        }
    }
}
