pub mod config;
pub mod constants;
pub mod hover;
pub mod intro;
pub mod lifecycle;
pub mod plasma;
pub mod reveal;
pub mod typewriter;

pub use config::*;
pub use hover::{HoverCard, HoverEffect, Rect, StyleTarget, Tilt};
pub use intro::{IntroSequence, IntroStage};
pub use lifecycle::Lifecycle;
pub use plasma::{PlasmaUniforms, SurfaceState};
pub use reveal::RevealTracker;
pub use typewriter::Typewriter;

// Shaders bundled as string constants
pub static PLASMA_WGSL: &str = include_str!("../../shaders/plasma.wgsl");
