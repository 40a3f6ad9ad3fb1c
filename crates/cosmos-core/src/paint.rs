//! Fill and stroke styles: solid colors and canvas-style gradients.

use std::fmt;

use crate::color::Rgba;
use crate::geometry::Vec2;

/// A gradient color stop. `offset` is in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Gradient along the line from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    pub fn with_stop(mut self, offset: f32, color: Rgba) -> Self {
        insert_stop(&mut self.stops, offset, color);
        self
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at `point`. A zero-length gradient paints nothing.
    pub fn color_at(&self, point: Vec2) -> Rgba {
        let axis = self.end - self.start;
        let length_sq = axis.length_squared();
        if length_sq <= f32::EPSILON {
            return Rgba::TRANSPARENT;
        }
        let t = (point - self.start).dot(axis) / length_sq;
        sample_stops(&self.stops, t)
    }
}

/// Two-circle radial gradient with the semantics of a 2D canvas
/// `createRadialGradient(x0, y0, r0, x1, y1, r1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub inner_center: Vec2,
    pub inner_radius: f32,
    pub outer_center: Vec2,
    pub outer_radius: f32,
    stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(
        inner_center: Vec2,
        inner_radius: f32,
        outer_center: Vec2,
        outer_radius: f32,
    ) -> Self {
        Self {
            inner_center,
            inner_radius,
            outer_center,
            outer_radius,
            stops: Vec::new(),
        }
    }

    pub fn with_stop(mut self, offset: f32, color: Rgba) -> Self {
        insert_stop(&mut self.stops, offset, color);
        self
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn color_at(&self, point: Vec2) -> Rgba {
        match self.parameter_at(point) {
            Some(t) => sample_stops(&self.stops, t),
            None => Rgba::TRANSPARENT,
        }
    }

    /// Largest `t` whose interpolated circle passes through `point`.
    ///
    /// Solves `|p - c(t)| = r(t)` with `r(t) >= 0`.
    fn parameter_at(&self, point: Vec2) -> Option<f32> {
        let cd = self.outer_center - self.inner_center;
        let dr = self.outer_radius - self.inner_radius;
        let pd = point - self.inner_center;
        let r0 = self.inner_radius;

        let a = cd.dot(cd) - dr * dr;
        let b = pd.dot(cd) + r0 * dr;
        let c = pd.dot(pd) - r0 * r0;
        let valid = |t: f32| r0 + t * dr >= 0.0;

        if a.abs() <= f32::EPSILON {
            if b.abs() <= f32::EPSILON {
                return None;
            }
            let t = c / (2.0 * b);
            return valid(t).then_some(t);
        }

        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let (t1, t2) = ((b + root) / a, (b - root) / a);
        let (high, low) = if t1 >= t2 { (t1, t2) } else { (t2, t1) };
        if valid(high) {
            Some(high)
        } else if valid(low) {
            Some(low)
        } else {
            None
        }
    }
}

/// Fill or stroke style.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    /// Color this paint produces at `point`.
    pub fn color_at(&self, point: Vec2) -> Rgba {
        match self {
            Paint::Solid(color) => *color,
            Paint::Linear(gradient) => gradient.color_at(point),
            Paint::Radial(gradient) => gradient.color_at(point),
        }
    }
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Paint::Linear(gradient)
    }
}

impl From<RadialGradient> for Paint {
    fn from(gradient: RadialGradient) -> Self {
        Paint::Radial(gradient)
    }
}

/// Font request for text drawing. Surfaces without font support ignore it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font<'a> {
    /// Size in logical pixels.
    pub size: f32,
    pub family: &'a str,
}

impl fmt::Display for Font<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size, self.family)
    }
}

fn insert_stop(stops: &mut Vec<ColorStop>, offset: f32, color: Rgba) {
    let offset = offset.clamp(0.0, 1.0);
    // Equal offsets keep insertion order, so later stops win past the seam.
    let index = stops.partition_point(|stop| stop.offset <= offset);
    stops.insert(index, ColorStop { offset, color });
}

fn sample_stops(stops: &[ColorStop], t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgba::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    stops
        .windows(2)
        .find(|pair| t >= pair[0].offset && t <= pair[1].offset)
        .map(|pair| {
            let span = pair[1].offset - pair[0].offset;
            if span <= f32::EPSILON {
                pair[1].color
            } else {
                pair[0].color.lerp(pair[1].color, (t - pair[0].offset) / span)
            }
        })
        .unwrap_or(last.color)
}
