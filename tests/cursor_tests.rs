// Host-side tests for the custom cursor follower.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod timing {
        include!("../src/core/timing.rs");
    }
    pub mod cursor {
        include!("../src/core/cursor.rs");
    }
}

use crate::site::cursor::*;
use glam::Vec2;

#[test]
fn enabled_only_for_fine_hover_pointers_on_wide_screens() {
    assert!(cursor_enabled(false, false, 1280.0));
    assert!(cursor_enabled(false, false, 768.0));
    assert!(!cursor_enabled(false, false, 767.0));
    assert!(!cursor_enabled(true, false, 1280.0));
    assert!(!cursor_enabled(false, true, 1280.0));
}

#[test]
fn interactive_selector_joins_list() {
    let sel = interactive_selector();
    assert!(sel.starts_with("a, button"));
    assert_eq!(sel.split(", ").count(), INTERACTIVE_SELECTORS.len());
}

#[test]
fn outline_eases_toward_pointer() {
    let mut f = CursorFollower::new();
    assert!(!f.tick(0.0), "suspended follower must not move");

    assert!(f.pointer_moved(Vec2::new(100.0, 0.0), 0.0));
    assert!(f.resume());
    assert!(f.tick(0.0));
    assert!((f.outline.x - 15.0).abs() < 1e-4);

    // Within the same 60 fps frame budget nothing changes.
    assert!(!f.tick(5.0));
    assert!((f.outline.x - 15.0).abs() < 1e-4);

    assert!(f.tick(20.0));
    assert!((f.outline.x - 27.75).abs() < 1e-4);
    assert_eq!(f.outline.y, 0.0);
}

#[test]
fn pointer_samples_are_throttled() {
    let mut f = CursorFollower::new();
    assert!(f.pointer_moved(Vec2::new(1.0, 1.0), 0.0));
    assert!(!f.pointer_moved(Vec2::new(2.0, 2.0), 4.0));
    assert_eq!(f.mouse, Vec2::new(1.0, 1.0));
    assert!(f.pointer_moved(Vec2::new(3.0, 3.0), 8.0));
    assert_eq!(f.mouse, Vec2::new(3.0, 3.0));
}

#[test]
fn suspend_and_resume_report_transitions() {
    let mut f = CursorFollower::default();
    assert!(!f.suspend());
    assert!(f.resume());
    assert!(!f.resume());
    assert!(f.is_running());
    assert!(f.suspend());
    assert!(!f.is_running());
}

#[test]
fn hover_changes_are_reported_once() {
    let mut f = CursorFollower::new();
    assert!(f.set_hovering(true));
    assert!(!f.set_hovering(true));
    assert!(f.set_hovering(false));
}

#[test]
fn lerp_and_transform() {
    let p = lerp_toward(Vec2::ZERO, Vec2::new(10.0, -10.0), 0.5);
    assert_eq!(p, Vec2::new(5.0, -5.0));
    assert_eq!(
        centered_transform(Vec2::new(12.0, 3.5)),
        "translate(12.0px, 3.5px) translate(-50%, -50%)"
    );
}
