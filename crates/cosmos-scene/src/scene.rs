//! Scene state: every particle plus the viewport they live in.

use cosmos_core::Viewport;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::animations::{Planet, ShootingStar, Star, ZodiacGlyph};

pub const STAR_COUNT: usize = 200;
pub const PLANET_COUNT: usize = 5;
pub const ZODIAC_COUNT: usize = 12;

/// The particle collections and the random source that rolls them.
#[derive(Debug)]
pub struct Scene<R = StdRng> {
    pub(crate) viewport: Viewport,
    pub(crate) stars: Vec<Star>,
    pub(crate) planets: Vec<Planet>,
    pub(crate) zodiacs: Vec<ZodiacGlyph>,
    /// Rolled on the first successful initialization and kept afterwards.
    pub(crate) shooting_star: Option<ShootingStar>,
    pub(crate) rng: R,
    /// Viewport width the particles were last built for.
    last_width: f32,
    initializations: u64,
}

impl Scene<StdRng> {
    /// A scene driven by a reproducible generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A scene driven by operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Scene<R> {
    /// Create an empty scene. Nothing is populated until a valid viewport
    /// arrives through [`Scene::on_viewport_change`].
    pub fn new(rng: R) -> Self {
        Self {
            viewport: Viewport::default(),
            stars: Vec::new(),
            planets: Vec::new(),
            zodiacs: Vec::new(),
            shooting_star: None,
            rng,
            last_width: 0.0,
            initializations: 0,
        }
    }

    /// The latest viewport, usable or not.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Background stars.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Drifting planets.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Rising zodiac glyphs.
    pub fn zodiacs(&self) -> &[ZodiacGlyph] {
        &self.zodiacs
    }

    /// The shooting star, once the first initialization has rolled it.
    pub fn shooting_star(&self) -> Option<&ShootingStar> {
        self.shooting_star.as_ref()
    }

    /// How many times the collections have been rebuilt.
    pub fn initializations(&self) -> u64 {
        self.initializations
    }

    /// Whether every collection holds particles.
    pub fn is_populated(&self) -> bool {
        !self.stars.is_empty() && !self.planets.is_empty() && !self.zodiacs.is_empty()
    }

    /// Whether a frame can be simulated: populated, with a usable viewport.
    pub fn is_ready(&self) -> bool {
        self.is_populated() && self.viewport.is_valid()
    }

    /// Re-roll every particle for the current viewport.
    ///
    /// Existing particles are reset in place and the collections are topped
    /// up to their fixed counts. Deferred (returns `false`) while the
    /// viewport has no usable size.
    pub fn initialize(&mut self) -> bool {
        let viewport = self.viewport;
        if !viewport.is_valid() {
            debug!(?viewport, "deferring scene initialization until the viewport has a size");
            return false;
        }

        let rng = &mut self.rng;
        self.stars.truncate(STAR_COUNT);
        self.stars.iter_mut().for_each(|star| star.reset(rng, viewport));
        self.stars.resize_with(STAR_COUNT, || Star::new(rng, viewport));

        self.planets.truncate(PLANET_COUNT);
        self.planets.iter_mut().for_each(|planet| planet.reset(rng, viewport));
        self.planets.resize_with(PLANET_COUNT, || Planet::new(rng, viewport));

        self.zodiacs.truncate(ZODIAC_COUNT);
        self.zodiacs.iter_mut().for_each(|glyph| glyph.reset(rng, viewport));
        self.zodiacs.resize_with(ZODIAC_COUNT, || ZodiacGlyph::new(rng, viewport));

        if self.shooting_star.is_none() {
            self.shooting_star = Some(ShootingStar::new(rng, viewport));
        }

        self.last_width = viewport.width;
        self.initializations += 1;
        debug!(
            width = viewport.width,
            height = viewport.height,
            generation = self.initializations,
            "scene initialized"
        );
        true
    }

    /// Record a new viewport size and rebuild the scene if needed.
    ///
    /// Only a width different from the one the particles were built for
    /// (such as a rotation) or an empty scene triggers a rebuild; height-only
    /// jitter keeps the current particles. An unusable size is stored but
    /// rebuilds nothing. Returns whether the scene was rebuilt.
    pub fn on_viewport_change(&mut self, viewport: Viewport) -> bool {
        self.viewport = viewport;
        let width_changed = viewport.width != self.last_width;

        if !viewport.is_valid() || width_changed || !self.is_populated() {
            self.initialize()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

    #[test]
    fn test_empty_until_viewport_known() {
        let scene = Scene::with_seed(1);
        assert!(!scene.is_populated());
        assert!(scene.shooting_star().is_none());
        assert_eq!(scene.initializations(), 0);
    }

    #[test]
    fn test_initial_population_scenario() {
        let mut scene = Scene::with_seed(42);
        assert!(scene.on_viewport_change(VIEWPORT));

        assert_eq!(scene.stars().len(), STAR_COUNT);
        assert_eq!(scene.planets().len(), PLANET_COUNT);
        assert_eq!(scene.zodiacs().len(), ZODIAC_COUNT);
        assert_eq!((STAR_COUNT, PLANET_COUNT, ZODIAC_COUNT), (200, 5, 12));

        let inside = |x: f32, y: f32| (0.0..800.0).contains(&x) && (0.0..600.0).contains(&y);
        assert!(scene.stars().iter().all(|s| inside(s.pos.x, s.pos.y)));
        assert!(scene.planets().iter().all(|p| inside(p.pos.x, p.pos.y)));
        assert!(scene.zodiacs().iter().all(|z| inside(z.pos.x, z.pos.y)));
        assert!(!scene.shooting_star().is_some_and(|s| s.is_active()));
    }

    #[test]
    fn test_reinitialize_replaces_everything() {
        let mut scene = Scene::with_seed(3);
        scene.on_viewport_change(VIEWPORT);
        let old_stars = scene.stars().to_vec();
        let shooting_star = scene.shooting_star().cloned();

        assert!(scene.initialize());
        assert_eq!(scene.stars().len(), STAR_COUNT);
        assert_eq!(scene.planets().len(), PLANET_COUNT);
        assert_eq!(scene.zodiacs().len(), ZODIAC_COUNT);
        assert_ne!(scene.stars(), old_stars.as_slice());
        assert_eq!(scene.shooting_star().cloned(), shooting_star);
        assert_eq!(scene.initializations(), 2);
    }

    #[test]
    fn test_same_width_is_idempotent() {
        let mut scene = Scene::with_seed(4);
        assert!(scene.on_viewport_change(VIEWPORT));
        assert!(!scene.on_viewport_change(VIEWPORT));
        assert_eq!(scene.initializations(), 1);
    }

    #[test]
    fn test_height_only_change_keeps_particles() {
        let mut scene = Scene::with_seed(5);
        scene.on_viewport_change(VIEWPORT);
        let stars = scene.stars().to_vec();

        assert!(!scene.on_viewport_change(Viewport::new(800.0, 450.0)));
        assert_eq!(scene.stars(), stars.as_slice());
        assert_eq!(scene.viewport().height, 450.0);
    }

    #[test]
    fn test_width_change_rebuilds() {
        let mut scene = Scene::with_seed(6);
        scene.on_viewport_change(VIEWPORT);
        assert!(scene.on_viewport_change(Viewport::new(1024.0, 600.0)));
        assert!(scene.stars().iter().all(|s| s.pos.x < 1024.0));
        assert_eq!(scene.initializations(), 2);
    }

    #[test]
    fn test_invalid_viewport_defers_initialization() {
        let mut scene = Scene::with_seed(7);
        assert!(!scene.on_viewport_change(Viewport::default()));
        assert!(!scene.on_viewport_change(Viewport::new(800.0, 0.0)));
        assert!(!scene.is_populated());

        // Same width as the last notification, but the scene is still empty.
        assert!(scene.on_viewport_change(VIEWPORT));
        assert!(scene.is_populated());
    }

    #[test]
    fn test_zero_height_after_population_pauses_scene() {
        let mut scene = Scene::with_seed(8);
        scene.on_viewport_change(VIEWPORT);
        let stars = scene.stars().to_vec();

        assert!(!scene.on_viewport_change(Viewport::new(800.0, 0.0)));
        assert!(scene.is_populated());
        assert!(!scene.is_ready());
        assert_eq!(scene.stars(), stars.as_slice());

        // Back to the original size: same width, nothing to rebuild.
        assert!(!scene.on_viewport_change(VIEWPORT));
        assert!(scene.is_ready());
        assert_eq!(scene.initializations(), 1);
    }

    #[test]
    fn test_width_change_during_deferral_rebuilds_once_usable() {
        let mut scene = Scene::with_seed(9);
        scene.on_viewport_change(VIEWPORT);

        assert!(!scene.on_viewport_change(Viewport::new(1600.0, 0.0)));
        assert_eq!(scene.initializations(), 1);

        assert!(scene.on_viewport_change(Viewport::new(1600.0, 600.0)));
        assert_eq!(scene.initializations(), 2);
        assert!(scene.stars().iter().any(|s| s.pos.x >= 800.0));
        assert!(scene.stars().iter().all(|s| s.pos.x < 1600.0));
    }

    #[test]
    fn test_initialize_keeps_fixed_counts() {
        let mut scene = Scene::with_seed(10);
        scene.on_viewport_change(VIEWPORT);
        scene.stars.truncate(3);
        scene.planets.clear();

        assert!(scene.initialize());
        assert_eq!(scene.stars().len(), STAR_COUNT);
        assert_eq!(scene.planets().len(), PLANET_COUNT);
        assert_eq!(scene.zodiacs().len(), ZODIAC_COUNT);
    }
}
