//! Slowly drifting planets with optional rings.

use std::f32::consts::PI;

use cosmos_core::{Ellipse, Paint, RadialGradient, Rgba, Surface, Vec2, Viewport};
use rand::Rng;

use crate::palette::{PLANET_PALETTES, PLANET_SHADOW, PlanetPalette};
use crate::random;

/// How far past either side edge a planet travels before wrapping.
const WRAP_MARGIN: f32 = 100.0;
const RING_CHANCE: f64 = 0.3;
const RING_COLOR: Rgba = Rgba::new(255, 255, 255, 0.3);
const RING_WIDTH: f32 = 2.0;

/// A large gradient-shaded disc drifting horizontally.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub pos: Vec2,
    pub radius: f32,
    pub palette: PlanetPalette,
    /// Horizontal drift per frame; the sign picks the direction.
    pub speed: f32,
    pub has_ring: bool,
}

impl Planet {
    /// A planet with a random size, palette and drift. One in three or so
    /// carries a ring.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let radius = random::range(rng, 10.0, 50.0);
        let pos = random::point_in(rng, viewport);
        let palette = *random::pick(rng, &PLANET_PALETTES);
        let speed = random::range(rng, 0.05, 0.25) * random::signed(rng);
        let has_ring = random::chance(rng, RING_CHANCE);
        Self {
            pos,
            radius,
            palette,
            speed,
            has_ring,
        }
    }

    /// Re-roll every field in place.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) {
        *self = Self::new(rng, viewport);
    }

    /// Advance one frame, wrapping once the planet is fully past an edge.
    pub fn update(&mut self, viewport: Viewport) {
        self.pos.x += self.speed;
        if self.pos.x > viewport.width + WRAP_MARGIN {
            self.pos.x = -WRAP_MARGIN;
        } else if self.pos.x < -WRAP_MARGIN {
            self.pos.x = viewport.width + WRAP_MARGIN;
        }
    }

    /// Fill the shaded body, then stroke the ring if there is one.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        // Light falls from the upper left.
        let highlight = self.pos - Vec2::splat(self.radius / 3.0);
        let body = RadialGradient::new(highlight, self.radius / 10.0, self.pos, self.radius)
            .with_stop(0.0, self.palette.primary)
            .with_stop(1.0, PLANET_SHADOW);
        surface.fill_circle(self.pos, self.radius, &Paint::Radial(body));

        if self.has_ring {
            let ring = Ellipse {
                center: self.pos,
                radius_x: self.radius * 1.8,
                radius_y: self.radius * 0.4,
                rotation: PI / 8.0,
            };
            surface.stroke_ellipse(ring, RING_WIDTH, &Paint::Solid(RING_COLOR));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawOp, RecordingSurface};
    use rand::{SeedableRng, rngs::StdRng};

    const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

    fn planet_at(x: f32, speed: f32) -> Planet {
        Planet {
            pos: Vec2::new(x, 300.0),
            radius: 20.0,
            palette: PLANET_PALETTES[0],
            speed,
            has_ring: false,
        }
    }

    #[test]
    fn test_reset_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let planets: Vec<Planet> = (0..1000).map(|_| Planet::new(&mut rng, VIEWPORT)).collect();

        for planet in &planets {
            assert!((10.0..50.0).contains(&planet.radius));
            assert!((0.0..800.0).contains(&planet.pos.x));
            assert!((0.0..600.0).contains(&planet.pos.y));
            assert!((0.05..0.25).contains(&planet.speed.abs()));
            assert!(PLANET_PALETTES.contains(&planet.palette));
        }

        let ringed = planets.iter().filter(|p| p.has_ring).count();
        assert!((200..400).contains(&ringed), "ringed = {ringed}");
        assert!(planets.iter().any(|p| p.speed < 0.0));
        assert!(planets.iter().any(|p| p.speed > 0.0));
    }

    #[test]
    fn test_reset_rerolls_in_place() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut planet = planet_at(5000.0, 40.0);
        planet.radius = 400.0;

        planet.reset(&mut rng, VIEWPORT);
        assert!((0.0..800.0).contains(&planet.pos.x));
        assert!((0.0..600.0).contains(&planet.pos.y));
        assert!((10.0..50.0).contains(&planet.radius));
        assert!((0.05..0.25).contains(&planet.speed.abs()));
    }

    #[test]
    fn test_drift_from_near_edge() {
        let mut planet = planet_at(795.0, 0.1);
        for _ in 0..60 {
            planet.update(VIEWPORT);
        }
        // Six pixels of travel stays well inside the 100px margin.
        assert!((planet.pos.x - 801.0).abs() < 1e-2);
    }

    #[test]
    fn test_wraps_past_right_margin() {
        let mut planet = planet_at(899.95, 0.1);
        planet.update(VIEWPORT);
        assert_eq!(planet.pos.x, -100.0);
        planet.update(VIEWPORT);
        assert!((planet.pos.x - -99.9).abs() < 1e-4);
    }

    #[test]
    fn test_wraps_past_left_margin() {
        let mut planet = planet_at(-99.95, -0.1);
        planet.update(VIEWPORT);
        assert_eq!(planet.pos.x, 900.0);
    }

    #[test]
    fn test_never_outside_margin_for_two_frames() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut planets: Vec<Planet> = (0..20).map(|_| Planet::new(&mut rng, VIEWPORT)).collect();
        let mut outside = vec![false; planets.len()];
        for _ in 0..10_000 {
            for (planet, was_outside) in planets.iter_mut().zip(outside.iter_mut()) {
                planet.update(VIEWPORT);
                let is_outside = planet.pos.x < -100.0 || planet.pos.x > 900.0;
                assert!(!(is_outside && *was_outside));
                *was_outside = is_outside;
            }
        }
    }

    #[test]
    fn test_draw_body_and_ring() {
        let mut planet = planet_at(400.0, 0.1);
        let mut surface = RecordingSurface::default();
        planet.draw(&mut surface);
        assert_eq!(surface.ops.len(), 1);
        let DrawOp::Circle { radius, paint, .. } = &surface.ops[0] else {
            panic!("expected a circle, got {:?}", surface.ops[0]);
        };
        assert_eq!(*radius, 20.0);
        let Paint::Radial(gradient) = paint else {
            panic!("planet body should use a radial gradient");
        };
        assert_eq!(gradient.stops()[0].color, planet.palette.primary);
        assert_eq!(gradient.stops()[1].color, PLANET_SHADOW);
        assert_eq!(gradient.inner_center, Vec2::new(400.0 - 20.0 / 3.0, 300.0 - 20.0 / 3.0));

        planet.has_ring = true;
        let mut surface = RecordingSurface::default();
        planet.draw(&mut surface);
        assert_eq!(surface.ops.len(), 2);
        let DrawOp::Ellipse {
            ellipse,
            line_width,
            paint,
        } = &surface.ops[1]
        else {
            panic!("expected a ring ellipse");
        };
        assert!((ellipse.radius_x - 36.0).abs() < 1e-4);
        assert!((ellipse.radius_y - 8.0).abs() < 1e-4);
        assert_eq!(ellipse.rotation, PI / 8.0);
        assert_eq!(*line_width, 2.0);
        assert_eq!(*paint, Paint::Solid(RING_COLOR));
    }
}
