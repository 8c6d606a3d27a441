//! Deferred size negotiation and top-down geometry.

mod common;

use common::Harness;
use splitterm::config::Config;
use splitterm::{LayoutError, Orientation, SizeConstraints, SizeHints};

#[test]
fn test_new_window_requests_initial_size_once() {
    let mut h = Harness::new();
    assert!(h.window.has_pending_size_job());

    assert!(h.window.run_size_job());
    assert!(!h.window.run_size_job());

    let log = h.log.lock();
    assert_eq!(log.resizes(), vec![(800, 480)]);
    assert_eq!(
        log.constraints(),
        vec![SizeConstraints {
            min_w: 100,
            min_h: 50,
            step_x: 10,
            step_y: 20,
        }]
    );
}

#[test]
fn test_horizontal_split_aggregates_hints() {
    let mut h = Harness::new();
    h.window.run_size_job();
    h.set_next_hints(SizeHints::new(80, 60, 10, 20, 640, 480));
    h.window.split(1, Orientation::Horizontal, None).unwrap();
    h.clear_log();

    assert!(h.window.run_size_job());

    let log = h.log.lock();
    assert_eq!(
        log.constraints(),
        vec![SizeConstraints {
            min_w: 180,
            min_h: 60,
            step_x: 10,
            step_y: 20,
        }]
    );
    // Later sessions never ask for their own size
    assert!(log.resizes().is_empty());
}

#[test]
fn test_vertical_split_stacks_heights() {
    let mut h = Harness::new();
    h.window.run_size_job();
    h.set_next_hints(SizeHints::new(80, 60, 10, 20, 640, 480));
    h.window.split(1, Orientation::Vertical, None).unwrap();

    let info = h.window.sizing_handle();

    assert_eq!((info.min_w, info.min_h), (100, 110));
    assert!(!info.pending);
}

#[test]
fn test_burst_of_hint_changes_runs_one_job() {
    let mut h = Harness::new();
    h.window.run_size_job();
    h.clear_log();

    for _ in 0..5 {
        h.content(1).lock().hints = SizeHints::new(120, 60, 8, 16, 800, 480);
        h.window.on_size_hints_changed(1).unwrap();
    }
    assert!(h.window.run_size_job());
    assert!(!h.window.run_size_job());

    let log = h.log.lock();
    assert_eq!(log.constraints().len(), 1);
    assert_eq!(log.constraints()[0].step_x, 8);
}

#[test]
fn test_recompute_is_idempotent() {
    let mut h = Harness::new();
    h.window.split(1, Orientation::Horizontal, None).unwrap();
    let first = h.window.sizing_handle();
    let second = h.window.sizing_handle();

    assert_eq!((first.min_w, first.min_h), (second.min_w, second.min_h));
    assert!(first.pending);
    assert!(!second.pending);
    assert_eq!(h.log.lock().resizes().len(), 1);
}

#[test]
fn test_sizing_handle_cancels_pending_job() {
    let mut h = Harness::new();
    assert!(h.window.has_pending_size_job());
    h.window.sizing_handle();
    assert!(!h.window.has_pending_size_job());
}

#[test]
fn test_new_config_reapplies_requested_size() {
    let mut h = Harness::new();
    h.window.run_size_job();
    h.clear_log();

    h.window.set_config(Config::default().with_size(100, 30));
    assert!(h.window.run_size_job());

    assert_eq!(h.log.lock().resizes(), vec![(800, 480)]);
}

#[test]
fn test_hint_change_for_unknown_session_fails() {
    let mut h = Harness::new();
    h.window.run_size_job();
    assert_eq!(
        h.window.on_size_hints_changed(4),
        Err(LayoutError::SessionNotFound(4))
    );
    assert!(!h.window.has_pending_size_job());
}

#[test]
fn test_resize_lays_out_panes_in_cells() {
    let mut h = Harness::new();
    h.window.split(1, Orientation::Horizontal, None).unwrap();

    h.window.on_window_resized(801, 600);

    // 801 px minus a 1 px divider, halved; 10x20 px cells
    assert_eq!(h.content(1).lock().size, (40, 30));
    assert_eq!(h.content(2).lock().size, (40, 30));
    assert_eq!(h.window.session_at(100.0, 10.0), Some(1));
    assert_eq!(h.window.session_at(500.0, 10.0), Some(2));

    let dividers = h.window.dividers();
    assert_eq!(dividers.len(), 1);
    assert_eq!(dividers[0].x, 400.0);
}

#[test]
fn test_resize_skips_unchanged_grids() {
    let mut h = Harness::new();
    // Content starts at the configured 80x24
    h.window.on_window_resized(800, 480);
    h.window.on_window_resized(600, 400);
    h.window.on_window_resized(605, 410);

    assert_eq!(h.content(1).lock().resizes, vec![(60, 20)]);
}

#[test]
fn test_resize_split_moves_divider() {
    let mut h = Harness::new();
    h.window.split(1, Orientation::Horizontal, None).unwrap();
    h.window.on_window_resized(801, 600);

    let ratio = h.window.resize_split(2, Orientation::Horizontal, 0.25).unwrap();

    assert_eq!(ratio, 0.75);
    assert_eq!(h.content(1).lock().size, (60, 30));
    assert_eq!(h.content(2).lock().size, (20, 30));
    assert_eq!(
        h.window.resize_split(2, Orientation::Vertical, 0.1),
        Err(LayoutError::NoEnclosingSplit(2))
    );
}

#[test]
fn test_no_geometry_before_first_resize() {
    let h = Harness::new();
    assert_eq!(h.window.size(), None);
    assert_eq!(h.window.session_at(1.0, 1.0), None);
    assert!(h.window.dividers().is_empty());
}
