use std::str::FromStr;

/// Time direction of the plasma animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
    PingPong,
}

impl Direction {
    /// Base sign applied to shader time.
    #[inline]
    pub fn multiplier(self) -> f32 {
        match self {
            Direction::Reverse => -1.0,
            Direction::Forward | Direction::PingPong => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
            Direction::PingPong => "pingpong",
        }
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "reverse" => Ok(Direction::Reverse),
            "pingpong" | "ping-pong" => Ok(Direction::PingPong),
            _ => Err(ConfigError::Direction(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unrecognised colour `{0}`")]
    Color(String),
    #[error("unknown direction `{0}` (expected forward, reverse or pingpong)")]
    Direction(String),
    #[error("`{field}` must be a finite number greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("`opacity` must be a finite number, got {0}")]
    Opacity(f64),
}

pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Parse a CSS colour into linear 0..1 RGB.
///
/// An empty (or whitespace) string means "no accent": the plasma keeps its
/// natural hue.
pub fn parse_accent(input: &str) -> Result<Option<[f32; 3]>, ConfigError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let color: csscolorparser::Color = trimmed
        .parse()
        .map_err(|_| ConfigError::Color(input.to_string()))?;
    let [r, g, b, _] = color.to_rgba8();
    Ok(Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]))
}

fn positive(field: &'static str, value: f64) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value as f32)
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Raw options as supplied by the host page. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    pub accent_color: Option<String>,
    pub speed: Option<f64>,
    pub direction: Option<String>,
    pub scale: Option<f64>,
    pub opacity: Option<f64>,
    pub pointer_reactive: Option<bool>,
}

/// Resolved, validated renderer configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub accent_color: Option<[f32; 3]>,
    pub speed_scale: f32,
    pub direction: Direction,
    pub spatial_scale: f32,
    pub opacity: f32,
    pub pointer_reactive: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            accent_color: Some(WHITE),
            speed_scale: 1.0,
            direction: Direction::Forward,
            spatial_scale: 1.0,
            opacity: 1.0,
            pointer_reactive: true,
        }
    }
}

impl RenderConfig {
    /// Resolve host options, replacing anything malformed with its default.
    pub fn from_options(options: &RenderOptions) -> Self {
        let defaults = Self::default();
        let mut config = defaults.clone();

        if let Some(raw) = &options.accent_color {
            config.accent_color = parse_accent(raw).unwrap_or_else(|e| {
                log::warn!("[config] {e}; using white");
                defaults.accent_color
            });
        }
        if let Some(speed) = options.speed {
            config.speed_scale = positive("speed", speed).unwrap_or_else(|e| {
                log::warn!("[config] {e}; using {}", defaults.speed_scale);
                defaults.speed_scale
            });
        }
        if let Some(raw) = &options.direction {
            config.direction = raw.parse().unwrap_or_else(|e: ConfigError| {
                log::warn!("[config] {e}; using forward");
                defaults.direction
            });
        }
        if let Some(scale) = options.scale {
            config.spatial_scale = positive("scale", scale).unwrap_or_else(|e| {
                log::warn!("[config] {e}; using {}", defaults.spatial_scale);
                defaults.spatial_scale
            });
        }
        if let Some(opacity) = options.opacity {
            config.opacity = if opacity.is_finite() {
                opacity.clamp(0.0, 1.0) as f32
            } else {
                log::warn!("[config] {}; using 1", ConfigError::Opacity(opacity));
                defaults.opacity
            };
        }
        if let Some(reactive) = options.pointer_reactive {
            config.pointer_reactive = reactive;
        }
        config
    }

    /// Shader speed uniform: configured speed times the fixed internal factor.
    #[inline]
    pub fn shader_speed(&self) -> f32 {
        self.speed_scale * super::constants::SPEED_SCALE
    }
}
