//! The occasional shooting star.

use std::f32::consts::FRAC_PI_4;

use cosmos_core::{LinearGradient, Paint, Rgba, Surface, Vec2, Viewport};
use rand::Rng;

use crate::random;

/// A single reusable streak. Idle until triggered, then flies down and to
/// the right at a fixed 45° until it leaves the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    /// Head of the streak.
    pub pos: Vec2,
    /// Trail length in logical pixels.
    pub length: f32,
    /// Travel per frame.
    pub speed: f32,
    /// Stroke width of the trail.
    pub width: f32,
    /// Travel direction in radians.
    pub angle: f32,
    active: bool,
}

impl ShootingStar {
    /// A fresh, idle shooting star.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(
                random::range(rng, 0.0, viewport.width),
                random::range(rng, 0.0, viewport.height * 0.5),
            ),
            length: random::range(rng, 10.0, 90.0),
            speed: random::range(rng, 6.0, 16.0),
            width: random::range(rng, 0.1, 1.1),
            angle: FRAC_PI_4,
            active: false,
        }
    }

    /// Re-roll the streak and return it to idle.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) {
        *self = Self::new(rng, viewport);
    }

    /// Whether a flight is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Launch from a random spot along the top edge.
    ///
    /// Returns `false` without touching the streak if it is already flying.
    pub fn trigger<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.pos = Vec2::new(random::range(rng, 0.0, viewport.width * 0.8), 0.0);
        true
    }

    fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    /// Advance one frame. Going past the right or bottom edge ends the flight.
    pub fn update(&mut self, viewport: Viewport) {
        if !self.active {
            return;
        }
        self.pos += self.direction() * self.speed;
        if self.pos.x > viewport.width || self.pos.y > viewport.height {
            self.active = false;
        }
    }

    /// End of the trail, `length` behind the head.
    pub fn tail(&self) -> Vec2 {
        self.pos - self.direction() * self.length
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.active {
            return;
        }
        let tail = self.tail();
        let trail = LinearGradient::new(self.pos, tail)
            .with_stop(0.0, Rgba::WHITE)
            .with_stop(1.0, Rgba::WHITE.with_alpha(0.0));
        surface.stroke_line(self.pos, tail, self.width, &Paint::Linear(trail));
    }
}
