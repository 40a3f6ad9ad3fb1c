//! RGBA colors with CSS-style 0-255 channels and 0.0-1.0 alpha.

/// A color with 8-bit channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity, 0.0 (transparent) to 1.0 (opaque).
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GOLD: Self = Self::rgb(255, 215, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// The same color at a different opacity.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Alpha clamped into the displayable range.
    pub fn opacity(self) -> f32 {
        self.a.clamp(0.0, 1.0)
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Interpolate two colors in premultiplied space, as canvas gradients do.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let (a0, a1) = (self.opacity(), other.opacity());
        let a = a0 + (a1 - a0) * t;
        if a <= 0.0 {
            return Self::TRANSPARENT;
        }
        let channel = |c0: u8, c1: u8| {
            let premultiplied = c0 as f32 * a0 + (c1 as f32 * a1 - c0 as f32 * a0) * t;
            (premultiplied / a).round().clamp(0.0, 255.0) as u8
        };
        Self::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
            a,
        )
    }
}
