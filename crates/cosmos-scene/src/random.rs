//! Bounded random draws used by particle resets.
//!
//! Every helper takes the random source explicitly so a scene can run on a
//! seeded generator in tests and on entropy in production.

use cosmos_core::{Vec2, Viewport};
use rand::Rng;

/// Uniform value in `[low, high)`. An empty range yields `low`.
pub fn range<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

/// `1.0` or `-1.0` with equal probability.
pub fn signed<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.gen_bool(0.5) { 1.0 } else { -1.0 }
}

/// `true` with probability `p`.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.gen_bool(p.clamp(0.0, 1.0))
}

/// Uniform element of a fixed, non-empty set.
pub fn pick<'a, R: Rng + ?Sized, T, const N: usize>(rng: &mut R, items: &'a [T; N]) -> &'a T {
    const { assert!(N > 0, "cannot pick from an empty set") };
    &items[rng.gen_range(0..N)]
}

/// Uniform point over `[0, width) x [0, height)`.
pub fn point_in<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Vec2 {
    Vec2::new(
        range(rng, 0.0, viewport.width),
        range(rng, 0.0, viewport.height),
    )
}
