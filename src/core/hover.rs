use super::constants::{
    MASK_RADIUS_PX, MAX_TILT_DEG, POINTER_X_VAR, POINTER_Y_VAR, SCRAMBLE_CHARSET, SCRAMBLE_LEN,
    TILT_HOVER_SCALE, TILT_PERSPECTIVE_PX,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Visual treatment applied by a hover card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverEffect {
    /// Radial gradient mask follows the pointer, scrambled text overlay.
    #[default]
    Evervault,
    /// Plain zoom on hover; the pointer position is not tracked.
    Zoom,
    /// 3D tilt towards the pointer.
    Tilt,
}

impl HoverEffect {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "evervault" => Some(HoverEffect::Evervault),
            "zoom" => Some(HoverEffect::Zoom),
            "tilt" => Some(HoverEffect::Tilt),
            _ => None,
        }
    }

    #[inline]
    pub fn tracks_pointer(self) -> bool {
        !matches!(self, HoverEffect::Zoom)
    }
}

/// Element a style property is written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleTarget {
    /// The element receiving pointer events.
    Card,
    /// The gradient layer inside the card. Never the card itself.
    Overlay,
}

/// Element bounding box in client (viewport) CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
    };

    /// Tilt for a pointer at `local` inside a `width` x `height` box.
    pub fn toward(local: Vec2, width: f32, height: f32) -> Tilt {
        if !(width > 0.0 && height > 0.0) {
            return Tilt::NEUTRAL;
        }
        Tilt {
            rotate_x_deg: -(local.y / height - 0.5) * 2.0 * MAX_TILT_DEG,
            rotate_y_deg: (local.x / width - 0.5) * 2.0 * MAX_TILT_DEG,
            scale: TILT_HOVER_SCALE,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Tilt::NEUTRAL
    }

    pub fn to_css(&self) -> String {
        format!(
            "perspective({TILT_PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s})",
            self.rotate_x_deg,
            self.rotate_y_deg,
            s = self.scale
        )
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Tilt::NEUTRAL
    }
}

/// Hover state for one card. Each card owns its own instance.
#[derive(Debug)]
pub struct HoverCard {
    effect: HoverEffect,
    hovered: bool,
    pointer_local: Vec2,
    tilt: Tilt,
    scramble: String,
    rng: StdRng,
}

impl HoverCard {
    pub fn new(effect: HoverEffect) -> Self {
        Self::with_rng(effect, StdRng::from_entropy())
    }

    /// Deterministic scramble text, for tests and reproducible demos.
    pub fn with_seed(effect: HoverEffect, seed: u64) -> Self {
        Self::with_rng(effect, StdRng::seed_from_u64(seed))
    }

    fn with_rng(effect: HoverEffect, rng: StdRng) -> Self {
        let mut card = Self {
            effect,
            hovered: false,
            pointer_local: Vec2::ZERO,
            tilt: Tilt::NEUTRAL,
            scramble: String::new(),
            rng,
        };
        if effect == HoverEffect::Evervault {
            card.regenerate_scramble();
        }
        card
    }

    pub fn on_enter(&mut self) {
        self.hovered = true;
    }

    /// Record a pointer sample. Returns `false` if the sample was ignored
    /// (not hovered, or the effect does not track the pointer).
    pub fn on_move(&mut self, client: Vec2, rect: Rect) -> bool {
        if !self.hovered || !self.effect.tracks_pointer() {
            return false;
        }
        if !(client.x.is_finite() && client.y.is_finite()) {
            return false;
        }
        self.pointer_local = client - Vec2::new(rect.left, rect.top);
        match self.effect {
            HoverEffect::Tilt => {
                self.tilt = Tilt::toward(self.pointer_local, rect.width, rect.height);
            }
            HoverEffect::Evervault => self.regenerate_scramble(),
            HoverEffect::Zoom => {}
        }
        true
    }

    pub fn on_leave(&mut self) {
        self.hovered = false;
        self.pointer_local = Vec2::ZERO;
        self.tilt = Tilt::NEUTRAL;
    }

    fn regenerate_scramble(&mut self) {
        let rng = &mut self.rng;
        self.scramble = (0..SCRAMBLE_LEN)
            .map(|_| SCRAMBLE_CHARSET[rng.gen_range(0..SCRAMBLE_CHARSET.len())] as char)
            .collect();
    }

    #[inline]
    pub fn effect(&self) -> HoverEffect {
        self.effect
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Element-local pointer; `None` while not hovered.
    pub fn pointer_local(&self) -> Option<Vec2> {
        self.hovered.then_some(self.pointer_local)
    }

    #[inline]
    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    #[inline]
    pub fn scramble(&self) -> &str {
        &self.scramble
    }

    /// CSS `mask-image` for the evervault gradient, centred on the pointer.
    pub fn mask_image(&self) -> Option<String> {
        if self.effect != HoverEffect::Evervault {
            return None;
        }
        Some(format!(
            "radial-gradient({MASK_RADIUS_PX}px at {:.1}px {:.1}px, white, transparent)",
            self.pointer_local.x, self.pointer_local.y
        ))
    }

    /// Inline style properties for the current state and where each goes.
    ///
    /// Pointer-tracking effects publish the local pointer as CSS custom
    /// properties on the card; the evervault mask only targets the overlay.
    pub fn style_writes(&self) -> Vec<(StyleTarget, &'static str, String)> {
        let mut out = Vec::new();
        if self.effect.tracks_pointer() {
            let p = self.pointer_local;
            out.push((StyleTarget::Card, POINTER_X_VAR, format!("{:.1}px", p.x)));
            out.push((StyleTarget::Card, POINTER_Y_VAR, format!("{:.1}px", p.y)));
        }
        match self.effect {
            HoverEffect::Evervault => {
                if let Some(mask) = self.mask_image() {
                    out.push((StyleTarget::Overlay, "-webkit-mask-image", mask.clone()));
                    out.push((StyleTarget::Overlay, "mask-image", mask));
                }
            }
            HoverEffect::Tilt => out.push((StyleTarget::Card, "transform", self.tilt.to_css())),
            HoverEffect::Zoom => {}
        }
        out
    }
}
