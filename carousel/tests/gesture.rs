use carousel::{
    commit_threshold, transition, CarouselConfig, CarouselEvent, CarouselState, GestureOutcome,
    GestureTracker, Intent,
};

fn drag(state: CarouselState, from: f32, to: f32, width: f32) -> CarouselState {
    let config = CarouselConfig::default();
    let state = transition(
        state,
        CarouselEvent::GestureStart {
            x: from,
            container_width_px: width,
        },
        &config,
    );
    let state = transition(state, CarouselEvent::GestureMove { x: to }, &config);
    transition(state, CarouselEvent::GestureEnd { x: to }, &config)
}

// ============================================================================
// Threshold
// ============================================================================

#[test]
fn test_threshold_has_floor() {
    let config = CarouselConfig::default();
    assert_eq!(commit_threshold(1000.0, 5, &config), 40.0);
    assert_eq!(commit_threshold(0.0, 3, &config), 40.0);
}

#[test]
fn test_threshold_scales_with_wide_containers() {
    let config = CarouselConfig::default();
    // 10000 / 2 * 0.08 = 400
    assert!((commit_threshold(10000.0, 2, &config) - 400.0).abs() < 0.01);
}

#[test]
fn test_threshold_follows_config() {
    let config = CarouselConfig::default().with_min_commit_px(10.0);
    assert_eq!(commit_threshold(100.0, 4, &config), 10.0);
}

// ============================================================================
// Tracker
// ============================================================================

#[test]
fn test_tracker_offset_follows_pointer() {
    let mut tracker = GestureTracker::new();
    assert!(tracker.start(200.0, 800.0));
    assert!(tracker.is_dragging());
    assert_eq!(tracker.offset_px(), 0.0);
    assert_eq!(tracker.container_width_px(), Some(800.0));

    assert!(tracker.update(260.0));
    assert_eq!(tracker.offset_px(), 60.0);

    // Same position again is not a change
    assert!(!tracker.update(260.0));

    assert!(tracker.update(150.0));
    assert_eq!(tracker.offset_px(), -50.0);
}

#[test]
fn test_tracker_second_start_keeps_session() {
    let mut tracker = GestureTracker::new();
    tracker.start(100.0, 500.0);
    tracker.update(130.0);

    assert!(!tracker.start(400.0, 900.0));
    assert_eq!(tracker.offset_px(), 30.0);
    assert_eq!(tracker.container_width_px(), Some(500.0));
}

#[test]
fn test_tracker_end_without_start_is_ignored() {
    let config = CarouselConfig::default();
    let mut tracker = GestureTracker::new();
    assert_eq!(tracker.end(50.0, 4, &config), GestureOutcome::Ignored);
    assert_eq!(tracker.release(4, &config), GestureOutcome::Ignored);
    assert!(!tracker.update(10.0));
    assert!(!tracker.is_dragging());
}

#[test]
fn test_tracker_release_resets() {
    let config = CarouselConfig::default();
    let mut tracker = GestureTracker::new();
    tracker.start(0.0, 1000.0);
    tracker.update(90.0);

    assert_eq!(tracker.release(5, &config), GestureOutcome::Commit { delta: -1 });
    assert!(!tracker.is_dragging());
    assert_eq!(tracker.offset_px(), 0.0);
    assert_eq!(tracker.container_width_px(), None);
}

#[test]
fn test_outcome_intents() {
    assert_eq!(
        GestureOutcome::Commit { delta: 1 }.intent(),
        Some(Intent::Advance(1))
    );
    assert_eq!(GestureOutcome::Cancelled.intent(), None);
    assert_eq!(GestureOutcome::Ignored.intent(), None);
}

// ============================================================================
// Commit vs cancel through the state
// ============================================================================

#[test]
fn test_leftward_drag_past_threshold_commits_next() {
    let state = drag(CarouselState::new(5), 500.0, 450.0, 1000.0);
    assert_eq!(state.index(), 1);
    assert!(!state.dragging());
    assert_eq!(state.drag_offset_px(), 0.0);
}

#[test]
fn test_short_drag_is_cancelled() {
    let state = drag(CarouselState::new(5), 500.0, 470.0, 1000.0);
    assert_eq!(state.index(), 0);
    assert!(!state.dragging());
    assert_eq!(state.drag_offset_px(), 0.0);
}

#[test]
fn test_rightward_drag_reveals_previous() {
    let state = drag(CarouselState::new(4), 100.0, 200.0, 800.0);
    assert_eq!(state.index(), 3);
}

#[test]
fn test_drag_exactly_at_threshold_is_cancelled() {
    let state = drag(CarouselState::new(5), 500.0, 460.0, 1000.0);
    assert_eq!(state.index(), 0);
}

#[test]
fn test_dragging_flag_between_start_and_end() {
    let config = CarouselConfig::default();
    let state = transition(
        CarouselState::new(3),
        CarouselEvent::GestureStart {
            x: 10.0,
            container_width_px: 300.0,
        },
        &config,
    );
    assert!(state.dragging());
    assert_eq!(state.container_width_px(), Some(300.0));

    let state = transition(state, CarouselEvent::GestureMove { x: -35.0 }, &config);
    assert!(state.dragging());
    assert_eq!(state.drag_offset_px(), -45.0);
    assert_eq!(state.index(), 0);
}

#[test]
fn test_cancel_event_uses_last_offset() {
    let config = CarouselConfig::default();
    let state = CarouselState::new(3);
    let state = transition(
        state,
        CarouselEvent::GestureStart {
            x: 300.0,
            container_width_px: 600.0,
        },
        &config,
    );
    let state = transition(state, CarouselEvent::GestureMove { x: 200.0 }, &config);
    let state = transition(state, CarouselEvent::GestureCancel, &config);

    assert_eq!(state.index(), 1);
    assert!(!state.dragging());
    assert_eq!(state.drag_offset_px(), 0.0);
}

#[test]
fn test_end_without_start_leaves_state() {
    let config = CarouselConfig::default();
    let state = CarouselState::new(3);
    assert_eq!(
        transition(state, CarouselEvent::GestureEnd { x: 999.0 }, &config),
        state
    );
    assert_eq!(transition(state, CarouselEvent::GestureCancel, &config), state);
}

#[test]
fn test_single_item_has_no_drag_surface() {
    let config = CarouselConfig::default();
    let state = CarouselState::new(1);
    let state = transition(
        state,
        CarouselEvent::GestureStart {
            x: 0.0,
            container_width_px: 500.0,
        },
        &config,
    );
    assert!(!state.dragging());

    let state = drag(state, 0.0, -300.0, 500.0);
    assert_eq!(state.index(), 0);
}
