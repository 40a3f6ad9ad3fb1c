//! Viewport and shape primitives in logical pixels.

pub use glam::Vec2;

/// Current size of the drawing area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the scene can be laid out in this viewport.
    ///
    /// Hosts report a zero size before their first layout pass.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// The whole viewport as a rectangle anchored at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A rotated ellipse, as traced by a canvas `ellipse()` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    pub radius_x: f32,
    pub radius_y: f32,
    /// Clockwise rotation in radians (y grows downward).
    pub rotation: f32,
}

impl Ellipse {
    /// Point on the outline at parameter `t` (radians).
    pub fn point_at(&self, t: f32) -> Vec2 {
        let local = Vec2::new(self.radius_x * t.cos(), self.radius_y * t.sin());
        self.center + Vec2::from_angle(self.rotation).rotate(local)
    }

    /// Ramanujan's approximation of the outline length.
    pub fn perimeter(&self) -> f32 {
        let (a, b) = (self.radius_x.abs(), self.radius_y.abs());
        std::f32::consts::PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
    }
}
