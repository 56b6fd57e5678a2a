// Host-side tests for hover card state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod hover {
    include!("../src/core/hover.rs");
}

use glam::Vec2;
use hover::*;

const CARD: Rect = Rect {
    left: 100.0,
    top: 100.0,
    width: 200.0,
    height: 100.0,
};

#[test]
fn leave_resets_tilt_and_pointer() {
    let mut card = HoverCard::with_seed(HoverEffect::Tilt, 1);
    card.on_enter();
    assert!(card.on_move(Vec2::new(300.0, 200.0), CARD));
    assert_eq!(card.pointer_local(), Some(Vec2::new(200.0, 100.0)));
    assert!(!card.tilt().is_neutral());

    card.on_leave();
    assert!(!card.is_hovered());
    assert_eq!(card.pointer_local(), None);
    assert_eq!(card.tilt(), Tilt::NEUTRAL);
}

#[test]
fn tilt_leans_toward_pointer() {
    // Bottom-right corner: top edge tips away, right edge tips away.
    let corner = Tilt::toward(Vec2::new(200.0, 100.0), 200.0, 100.0);
    assert!((corner.rotate_x_deg + 8.0).abs() < 1e-5);
    assert!((corner.rotate_y_deg - 8.0).abs() < 1e-5);
    assert!((corner.scale - 1.05).abs() < 1e-6);

    let centre = Tilt::toward(Vec2::new(100.0, 50.0), 200.0, 100.0);
    assert_eq!(centre.rotate_x_deg, 0.0);
    assert_eq!(centre.rotate_y_deg, 0.0);
    assert!(!centre.is_neutral(), "hovered card stays scaled up");

    let top_left = Tilt::toward(Vec2::ZERO, 200.0, 100.0);
    assert!((top_left.rotate_x_deg - 8.0).abs() < 1e-5);
    assert!((top_left.rotate_y_deg + 8.0).abs() < 1e-5);
}

#[test]
fn zero_sized_card_never_tilts() {
    assert_eq!(Tilt::toward(Vec2::new(5.0, 5.0), 0.0, 100.0), Tilt::NEUTRAL);
    assert_eq!(Tilt::toward(Vec2::new(5.0, 5.0), 10.0, f32::NAN), Tilt::NEUTRAL);
}

#[test]
fn moves_before_enter_are_ignored() {
    let mut card = HoverCard::with_seed(HoverEffect::Tilt, 2);
    assert!(!card.on_move(Vec2::new(150.0, 150.0), CARD));
    assert_eq!(card.tilt(), Tilt::NEUTRAL);
    assert_eq!(card.pointer_local(), None);
}

#[test]
fn non_finite_pointer_is_ignored() {
    let mut card = HoverCard::with_seed(HoverEffect::Tilt, 3);
    card.on_enter();
    assert!(!card.on_move(Vec2::new(f32::NAN, 120.0), CARD));
    assert_eq!(card.tilt(), Tilt::NEUTRAL);
}

#[test]
fn zoom_does_not_track_pointer() {
    let mut card = HoverCard::with_seed(HoverEffect::Zoom, 4);
    card.on_enter();
    assert!(!card.on_move(Vec2::new(150.0, 150.0), CARD));
    assert_eq!(card.pointer_local(), Some(Vec2::ZERO));
    assert_eq!(card.mask_image(), None);
    assert!(card.scramble().is_empty());
}

#[test]
fn evervault_mask_follows_pointer() {
    let mut card = HoverCard::with_seed(HoverEffect::Evervault, 5);
    card.on_enter();
    card.on_move(Vec2::new(112.5, 140.0), CARD);
    assert_eq!(
        card.mask_image().as_deref(),
        Some("radial-gradient(250px at 12.5px 40.0px, white, transparent)")
    );
    assert_eq!(card.tilt(), Tilt::NEUTRAL);
}

#[test]
fn scramble_is_seeded_and_regenerates_on_move() {
    let a = HoverCard::with_seed(HoverEffect::Evervault, 42);
    let b = HoverCard::with_seed(HoverEffect::Evervault, 42);
    assert_eq!(a.scramble(), b.scramble());
    assert_eq!(a.scramble().len(), 1500);
    assert!(a.scramble().chars().all(|c| c.is_ascii_alphanumeric()));

    let mut c = HoverCard::with_seed(HoverEffect::Evervault, 42);
    let before = c.scramble().to_string();
    c.on_enter();
    c.on_move(Vec2::new(150.0, 150.0), CARD);
    assert_ne!(c.scramble(), before);
    assert_eq!(c.scramble().len(), 1500);
}

#[test]
fn cards_are_independent() {
    let mut a = HoverCard::with_seed(HoverEffect::Tilt, 6);
    let b = HoverCard::with_seed(HoverEffect::Tilt, 6);
    a.on_enter();
    a.on_move(Vec2::new(110.0, 110.0), CARD);
    assert!(!b.is_hovered());
    assert_eq!(b.tilt(), Tilt::NEUTRAL);
}

#[test]
fn tilt_css() {
    assert_eq!(
        Tilt::NEUTRAL.to_css(),
        "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) scale3d(1, 1, 1)"
    );
    let t = Tilt {
        rotate_x_deg: -4.0,
        rotate_y_deg: 2.5,
        scale: 1.05,
    };
    assert_eq!(
        t.to_css(),
        "perspective(1000px) rotateX(-4.00deg) rotateY(2.50deg) scale3d(1.05, 1.05, 1.05)"
    );
}

#[test]
fn effect_parsing() {
    assert_eq!(HoverEffect::parse("Evervault"), Some(HoverEffect::Evervault));
    assert_eq!(HoverEffect::parse("zoom"), Some(HoverEffect::Zoom));
    assert_eq!(HoverEffect::parse(" tilt "), Some(HoverEffect::Tilt));
    assert_eq!(HoverEffect::parse("spin"), None);
    assert_eq!(HoverEffect::default(), HoverEffect::Evervault);
}

#[test]
fn evervault_mask_targets_only_the_overlay() {
    let mut card = HoverCard::with_seed(HoverEffect::Evervault, 7);
    // Unhovered card: nothing masks the card element.
    let writes = card.style_writes();
    assert!(writes
        .iter()
        .all(|(target, prop, _)| *target == StyleTarget::Overlay || !prop.contains("mask")));

    card.on_enter();
    card.on_move(Vec2::new(130.0, 120.0), CARD);
    let writes = card.style_writes();
    let masks: Vec<_> = writes
        .iter()
        .filter(|(_, prop, _)| prop.contains("mask-image"))
        .collect();
    assert_eq!(masks.len(), 2);
    for (target, _, value) in masks {
        assert_eq!(*target, StyleTarget::Overlay);
        assert!(value.contains("at 30.0px 20.0px"));
    }
}

#[test]
fn pointer_is_published_as_custom_properties() {
    let mut card = HoverCard::with_seed(HoverEffect::Tilt, 8);
    card.on_enter();
    card.on_move(Vec2::new(150.0, 175.0), CARD);
    let writes = card.style_writes();
    assert!(writes.contains(&(StyleTarget::Card, "--pointer-x", "50.0px".to_string())));
    assert!(writes.contains(&(StyleTarget::Card, "--pointer-y", "75.0px".to_string())));
    assert!(writes
        .iter()
        .any(|(target, prop, _)| *target == StyleTarget::Card && *prop == "transform"));

    let zoom = HoverCard::with_seed(HoverEffect::Zoom, 9);
    assert!(zoom.style_writes().is_empty());
}
