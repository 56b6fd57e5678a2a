// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn shader_constants_are_within_reasonable_bounds() {
    assert!(SPEED_SCALE > 0.0 && SPEED_SCALE < 1.0);
    assert!(PINGPONG_RATE > 0.0);
    assert!(POINTER_WARP > 0.0 && POINTER_WARP < 1e-2);
    assert!(RAYMARCH_STEPS > 1);
    assert!(TONEMAP_DIVISOR > 0.0);
    assert!(RAY_ORIGIN_Z > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drawable_sizing_limits() {
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(MIN_DRAWABLE_PX >= 1);
    // wgpu default max_texture_dimension_2d
    assert!(MAX_DRAWABLE_PX > MIN_DRAWABLE_PX && MAX_DRAWABLE_PX <= 8192);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_constants_have_logical_relationships() {
    // Tilt should stay subtle
    assert!(MAX_TILT_DEG > 0.0 && MAX_TILT_DEG < 45.0);
    assert!(TILT_HOVER_SCALE >= 1.0);
    assert!(TILT_PERSPECTIVE_PX > 0.0);
    assert!(MASK_RADIUS_PX > 0.0);
    assert!(SCRAMBLE_LEN > 0);
    assert!(SCRAMBLE_CHARSET.iter().all(|c| c.is_ascii_alphanumeric()));
    assert!(POINTER_X_VAR.starts_with("--") && POINTER_Y_VAR.starts_with("--"));
}

#[test]
fn text_timings_are_ordered() {
    // Pause between phrases outlasts a single keystroke
    assert!(DEFAULT_PHRASE_PAUSE > DEFAULT_CHAR_DELAY);
    assert!(INTRO_WELCOME > INTRO_HOLD);
    assert!(INTRO_HOLD > INTRO_GLITCH);
    assert!(INTRO_CHAR_DELAY < DEFAULT_CHAR_DELAY);
    assert!(!INTRO_LINE.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_threshold_is_a_fraction() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
}

#[test]
fn dom_names_are_distinct() {
    let classes = [HOVERED_CLASS, ZOOM_CLASS, REVEALED_CLASS];
    for (i, a) in classes.iter().enumerate() {
        assert!(!a.contains(' '));
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(SCRAMBLE_ATTR.starts_with("data-"));
    assert!(CANVAS_STYLE.contains("pointer-events:none"));
}
