use super::config::{Direction, RenderConfig, WHITE};
use super::constants::{
    MAX_DEVICE_PIXEL_RATIO, MAX_DRAWABLE_PX, MIN_DRAWABLE_PX, PINGPONG_RATE, POINTER_WARP,
    RAYMARCH_STEPS, RAY_ORIGIN_Z, TONEMAP_DIVISOR,
};
use glam::{Vec2, Vec3, Vec4};

/// Uniform block shared with `shaders/plasma.wgsl`.
///
/// Field order and padding follow WGSL uniform layout rules: `custom_color`
/// is a `vec3<f32>` and must start on a 16-byte boundary, and the struct size
/// rounds up to 64 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlasmaUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub speed: f32,
    pub custom_color: [f32; 3],
    pub use_custom_color: f32,
    pub direction: f32,
    pub scale: f32,
    pub mouse: [f32; 2],
    pub opacity: f32,
    pub mouse_interactive: f32,
    pub _pad: [f32; 2],
}

/// Device pixel ratio clamped to `(0, MAX_DEVICE_PIXEL_RATIO]`; bogus values read as 1.
#[inline]
pub fn effective_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Backing-store size for a container of `css_w` x `css_h` CSS pixels,
/// clamped per axis to `[MIN_DRAWABLE_PX, MAX_DRAWABLE_PX]`.
#[inline]
pub fn drawable_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = effective_dpr(dpr);
    let clamp = |css: f64| ((css * dpr) as u32).clamp(MIN_DRAWABLE_PX, MAX_DRAWABLE_PX);
    (clamp(css_w), clamp(css_h))
}

/// Direction uniform at `elapsed` seconds.
///
/// PingPong is a continuous sine oscillation of the base multiplier, not a
/// bounce between endpoints.
#[inline]
pub fn direction_at(direction: Direction, elapsed: f32) -> f32 {
    match direction {
        Direction::PingPong => (elapsed * PINGPONG_RATE).sin() * direction.multiplier(),
        _ => direction.multiplier(),
    }
}

/// Per-renderer mutable state: drawable size, clock and last pointer sample.
///
/// `pointer` is in container CSS pixels with a top-left origin;
/// `pixel_scale` maps it onto drawable pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceState {
    pub drawable_width: u32,
    pub drawable_height: u32,
    pub elapsed_seconds: f32,
    pub pointer: [f32; 2],
    pub pixel_scale: [f32; 2],
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            drawable_width: MIN_DRAWABLE_PX,
            drawable_height: MIN_DRAWABLE_PX,
            elapsed_seconds: 0.0,
            pointer: [0.0, 0.0],
            pixel_scale: [1.0, 1.0],
        }
    }
}

impl SurfaceState {
    pub fn new(css_w: f64, css_h: f64, dpr: f64) -> Self {
        let mut state = Self::default();
        state.resize(css_w, css_h, dpr);
        state
    }

    /// Recompute the drawable size. Returns `true` when it changed.
    pub fn resize(&mut self, css_w: f64, css_h: f64, dpr: f64) -> bool {
        let (w, h) = drawable_size(css_w, css_h, dpr);
        // Drawable pixels per CSS pixel; differs from the DPR once clamped.
        let fallback = effective_dpr(dpr) as f32;
        let scale = |px: u32, css: f64| {
            if css.is_finite() && css > 0.0 {
                (px as f64 / css) as f32
            } else {
                fallback
            }
        };
        self.pixel_scale = [scale(w, css_w), scale(h, css_h)];
        if (w, h) == (self.drawable_width, self.drawable_height) {
            return false;
        }
        self.drawable_width = w;
        self.drawable_height = h;
        true
    }

    /// Record a pointer sample in container-local CSS pixels. Last sample wins.
    #[inline]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pointer = [x, y];
        }
    }

    #[inline]
    pub fn advance(&mut self, elapsed_seconds: f32) {
        self.elapsed_seconds = elapsed_seconds.max(0.0);
    }

    /// Pointer in drawable pixels with a bottom-left origin, the frame the
    /// shader's `centre = resolution * 0.5` lives in.
    pub fn pointer_drawable(&self) -> [f32; 2] {
        let [x, y] = self.pointer;
        let [sx, sy] = self.pixel_scale;
        [x * sx, self.drawable_height as f32 - y * sy]
    }

    /// Build the uniform block for the next draw.
    pub fn uniforms(&self, config: &RenderConfig) -> PlasmaUniforms {
        let (mouse, mouse_interactive) = if config.pointer_reactive {
            (self.pointer_drawable(), 1.0)
        } else {
            ([0.0, 0.0], 0.0)
        };
        PlasmaUniforms {
            resolution: [self.drawable_width as f32, self.drawable_height as f32],
            time: self.elapsed_seconds,
            speed: config.shader_speed(),
            custom_color: config.accent_color.unwrap_or(WHITE),
            use_custom_color: if config.accent_color.is_some() { 1.0 } else { 0.0 },
            direction: direction_at(config.direction, self.elapsed_seconds),
            scale: config.spatial_scale,
            mouse,
            opacity: config.opacity,
            mouse_interactive,
            _pad: [0.0, 0.0],
        }
    }
}

#[inline]
fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// Offset added to the sample position for pointer interactivity.
///
/// Grows with the pointer's displacement from centre and with the sample's own
/// distance from centre; zero when `interactive < 0.5`.
#[inline]
pub fn pointer_warp(sample: Vec2, center: Vec2, mouse: Vec2, interactive: f32) -> Vec2 {
    (mouse - center) * POINTER_WARP * (sample - center).length() * step(0.5, interactive)
}

/// Replace every non-finite channel with zero.
#[inline]
pub fn sanitize(c: Vec3) -> Vec3 {
    let f = |x: f32| if x.is_finite() { x } else { 0.0 };
    Vec3::new(f(c.x), f(c.y), f(c.z))
}

/// Tint and alpha stage applied to the tone-mapped plasma colour.
pub fn compose(raw: Vec3, u: &PlasmaUniforms) -> Vec4 {
    let rgb = sanitize(raw);
    let intensity = (rgb.x + rgb.y + rgb.z) / 3.0;
    let tinted = Vec3::from(u.custom_color) * intensity;
    let color = rgb.lerp(tinted, step(0.5, u.use_custom_color));
    let alpha = rgb.length().min(1.0) * u.opacity;
    color.extend(alpha)
}

/// Tone-mapped plasma colour at `frag` (bottom-left origin, drawable pixels).
pub fn march(u: &PlasmaUniforms, frag: Vec2) -> Vec3 {
    let res = Vec2::from(u.resolution);
    let center = res * 0.5;
    let mut c = (frag - center) / u.scale + center;
    c += pointer_warp(c, center, Vec2::from(u.mouse), u.mouse_interactive);

    let t = u.time * u.speed * u.direction;
    let ray = Vec3::new(c.x - center.x, c.y - center.y, res.y).normalize();
    let mut acc = Vec3::ZERO;
    let mut z = 0.0_f32;
    for _ in 1..RAYMARCH_STEPS {
        let mut p = z * ray;
        p.z -= RAY_ORIGIN_Z;
        let s = p;
        let d = p.y - t;
        p.x += 0.4 * (1.0 + p.y) * (d + p.x * 0.1).sin() * (0.34 * d + p.x * 0.05).cos();

        // p.xz *= mat2(cos(p.y + vec4(0, 11, 33, 0) - t))
        let m = Vec4::new(p.y - t, p.y + 11.0 - t, p.y + 33.0 - t, p.y - t);
        let (m0, m1, m2, m3) = (m.x.cos(), m.y.cos(), m.z.cos(), m.w.cos());
        let q = Vec2::new(p.x * m0 + p.z * m1, p.x * m2 + p.z * m3);
        p.x = q.x;
        p.z = q.y;

        let d = ((q * q).length().sqrt() - 0.25 * (5.0 + s.y)).abs() / 3.0 + 8.0e-4;
        z += d;
        let phase = s.y + p.z * 0.5 + s.z - (s - p).length();
        let o = Vec4::new(
            (phase + 2.0).sin(),
            (phase + 1.0).sin(),
            phase.sin(),
            (phase + 8.0).sin(),
        ) + Vec4::ONE;
        acc += o.w / d * o.truncate();
    }
    let mapped = acc / TONEMAP_DIVISOR;
    Vec3::new(mapped.x.tanh(), mapped.y.tanh(), mapped.z.tanh())
}

/// CPU evaluation of the fragment shader; mirrors `fs_plasma`.
pub fn shade(u: &PlasmaUniforms, frag: Vec2) -> Vec4 {
    compose(march(u, frag), u)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_match_wgsl_block_size() {
        assert_eq!(std::mem::size_of::<PlasmaUniforms>(), 64);
        assert_eq!(std::mem::offset_of!(PlasmaUniforms, custom_color), 16);
        assert_eq!(std::mem::offset_of!(PlasmaUniforms, mouse), 40);
    }

    #[test]
    fn dpr_is_capped() {
        assert_eq!(drawable_size(100.0, 50.0, 3.0), (200, 100));
        assert_eq!(drawable_size(100.0, 50.0, f64::NAN), (100, 50));
        assert_eq!(drawable_size(5000.0, 100.0, 2.0), (MAX_DRAWABLE_PX, 200));
    }
}
