use std::time::Duration;

// Shared tuning constants for the background, text and card behaviours.

// Plasma shader
pub const SPEED_SCALE: f32 = 0.4; // configured speed -> shader time multiplier
pub const PINGPONG_RATE: f32 = 0.5; // angular rate of the pingpong direction oscillation
pub const POINTER_WARP: f32 = 2.0e-4; // pointer displacement -> sample offset per px from centre
pub const RAYMARCH_STEPS: u32 = 60; // loop bound; body runs for i in 1..RAYMARCH_STEPS
pub const TONEMAP_DIVISOR: f32 = 1.0e4;
pub const RAY_ORIGIN_Z: f32 = 4.0;

// Drawable sizing
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
pub const MIN_DRAWABLE_PX: u32 = 1;
pub const MAX_DRAWABLE_PX: u32 = 8192; // max_texture_dimension_2d of default device limits

// Hover card
pub const MAX_TILT_DEG: f32 = 8.0;
pub const TILT_HOVER_SCALE: f32 = 1.05;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const MASK_RADIUS_PX: f32 = 250.0;
pub const SCRAMBLE_LEN: usize = 1500;
pub const POINTER_X_VAR: &str = "--pointer-x";
pub const POINTER_Y_VAR: &str = "--pointer-y";
pub const SCRAMBLE_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

// Typewriter defaults
pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_PHRASE_PAUSE: Duration = Duration::from_millis(1500);

// Intro sequence
pub const INTRO_WELCOME: Duration = Duration::from_millis(2000);
pub const INTRO_CHAR_DELAY: Duration = Duration::from_millis(50);
pub const INTRO_HOLD: Duration = Duration::from_millis(1000);
pub const INTRO_GLITCH: Duration = Duration::from_millis(800);
pub const INTRO_LINE: &str = "> Initializing UI... Done.";

// Scroll reveal
pub const REVEAL_THRESHOLD: f32 = 0.15;
