// Host-side tests for scroll reveal geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

const VH: f32 = 800.0;

#[test]
fn visible_fraction_geometry() {
    assert_eq!(visible_fraction(0.0, 200.0, VH), 1.0);
    assert_eq!(visible_fraction(900.0, 200.0, VH), 0.0);
    assert_eq!(visible_fraction(-300.0, 200.0, VH), 0.0);
    assert_eq!(visible_fraction(700.0, 200.0, VH), 0.5);
    assert_eq!(visible_fraction(-50.0, 200.0, VH), 0.75);
    // Taller than the viewport
    assert_eq!(visible_fraction(-100.0, 1600.0, VH), 0.5);
}

#[test]
fn degenerate_geometry_is_hidden() {
    assert_eq!(visible_fraction(10.0, 0.0, VH), 0.0);
    assert_eq!(visible_fraction(10.0, 100.0, 0.0), 0.0);
    assert_eq!(visible_fraction(10.0, f32::NAN, VH), 0.0);
}

#[test]
fn reveals_once_past_threshold() {
    let mut t = RevealTracker::default();
    assert_eq!(t.threshold(), 0.15);
    // 10% visible: below threshold
    assert_eq!(t.update(780.0, 200.0, VH), None);
    assert!(!t.is_revealed());
    // 50% visible
    assert_eq!(t.update(700.0, 200.0, VH), Some(true));
    assert!(t.is_revealed());
    // Scrolling away does not hide it again
    assert_eq!(t.update(2000.0, 200.0, VH), None);
    assert!(t.is_revealed());
}

#[test]
fn repeatable_tracker_toggles() {
    let mut t = RevealTracker::new(0.5, false);
    assert_eq!(t.update(0.0, 200.0, VH), Some(true));
    assert_eq!(t.update(0.0, 200.0, VH), None);
    assert_eq!(t.update(750.0, 200.0, VH), Some(false));
    assert_eq!(t.update(700.0, 200.0, VH), Some(true));
}

#[test]
fn threshold_is_sanitised() {
    assert_eq!(RevealTracker::new(3.0, true).threshold(), 1.0);
    assert_eq!(RevealTracker::new(-1.0, true).threshold(), 0.0);
    assert_eq!(RevealTracker::new(f32::NAN, true).threshold(), 0.15);
    // Zero threshold still needs some part on screen
    let mut t = RevealTracker::new(0.0, true);
    assert_eq!(t.update(900.0, 200.0, VH), None);
    assert_eq!(t.update(799.0, 200.0, VH), Some(true));
}

#[test]
fn once_tracker_settles_after_reveal() {
    let mut once = RevealTracker::new(0.15, true);
    assert!(!once.is_settled());
    once.update(0.0, 200.0, VH);
    assert!(once.is_settled());

    let mut repeat = RevealTracker::new(0.15, false);
    repeat.update(0.0, 200.0, VH);
    assert!(repeat.is_revealed());
    assert!(!repeat.is_settled());
}
