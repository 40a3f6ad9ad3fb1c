//! Twinkling background stars.

use cosmos_core::{Paint, Rgba, Surface, Vec2, Viewport};
use rand::Rng;

use crate::random;

/// Alpha band the twinkle oscillates in.
const TWINKLE_MIN: f32 = 0.1;
const TWINKLE_MAX: f32 = 0.8;

/// A small point that twinkles and drifts, wrapping at the viewport edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Depth factor; larger stars look closer.
    pub depth: f32,
    pub alpha: f32,
    /// Alpha change per frame.
    pub twinkle_speed: f32,
    /// `1.0` while brightening, `-1.0` while dimming.
    pub twinkle_dir: f32,
    pub velocity: Vec2,
}

impl Star {
    /// A star somewhere in the viewport, dim and brightening.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            pos: random::point_in(rng, viewport),
            depth: random::range(rng, 0.5, 2.5),
            alpha: random::range(rng, 0.1, 0.6),
            twinkle_speed: random::range(rng, 0.005, 0.025),
            twinkle_dir: 1.0,
            velocity: Vec2::new(random::range(rng, -0.1, 0.1), random::range(rng, -0.1, 0.1)),
        }
    }

    /// Re-roll every field in place.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) {
        *self = Self::new(rng, viewport);
    }

    /// Advance one frame.
    pub fn update(&mut self, viewport: Viewport) {
        // Alpha may overshoot the band for one frame before the flip takes hold.
        self.alpha += self.twinkle_speed * self.twinkle_dir;
        if self.alpha > TWINKLE_MAX || self.alpha < TWINKLE_MIN {
            self.twinkle_dir = -self.twinkle_dir;
        }

        self.pos += self.velocity;
        self.pos.x = wrap(self.pos.x, viewport.width);
        self.pos.y = wrap(self.pos.y, viewport.height);
    }

    /// Drawn radius; deeper stars are bigger.
    pub fn radius(&self) -> f32 {
        self.depth * 0.8
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let paint = Paint::Solid(Rgba::WHITE.with_alpha(self.alpha));
        surface.fill_circle(self.pos, self.radius(), &paint);
    }
}

/// Wrap `value` into `[0, extent)`.
fn wrap(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds tiny negatives up to `extent`.
    if wrapped >= extent { 0.0 } else { wrapped }
}
