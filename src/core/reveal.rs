use super::constants::REVEAL_THRESHOLD;

/// Fraction of an element's height currently inside the viewport, in [0, 1].
pub fn visible_fraction(top: f32, height: f32, viewport_height: f32) -> f32 {
    if !(height > 0.0) || !(viewport_height > 0.0) {
        return 0.0;
    }
    let bottom = top + height;
    let shown = bottom.min(viewport_height) - top.max(0.0);
    (shown / height).clamp(0.0, 1.0)
}

/// Scroll-linked reveal trigger for a single element.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    threshold: f32,
    once: bool,
    revealed: bool,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD, true)
    }
}

impl RevealTracker {
    pub fn new(threshold: f32, once: bool) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            REVEAL_THRESHOLD
        };
        Self {
            threshold,
            once,
            revealed: false,
        }
    }

    /// Feed the element's current geometry. Returns `Some(revealed)` when the
    /// reveal state flips.
    pub fn update(&mut self, top: f32, height: f32, viewport_height: f32) -> Option<bool> {
        let fraction = visible_fraction(top, height, viewport_height);
        let visible = fraction > 0.0 && fraction >= self.threshold;
        if visible == self.revealed || (self.once && self.revealed) {
            return None;
        }
        self.revealed = visible;
        Some(visible)
    }

    /// A `once` tracker that has revealed never changes again.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.once && self.revealed
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}
