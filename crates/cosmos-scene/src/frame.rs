//! The frame loop: one simulation step and one draw pass per frame.

use cosmos_core::{FrameRequest, Host, HostError, Surface, Viewport};
use rand::Rng;
use tracing::{info, trace, warn};

use crate::random;
use crate::scene::Scene;

/// Per-frame probability that an idle shooting star launches.
pub const SHOOTING_STAR_CHANCE: f64 = 0.005;

/// Font family requested for zodiac glyphs.
pub const DEFAULT_GLYPH_FONT: &str = "Cinzel";

/// Drives a [`Scene`] frame by frame.
///
/// Motion amounts are per frame, so the animation runs at whatever pace the
/// host's scheduler sets.
#[derive(Debug)]
pub struct FrameLoop<R> {
    scene: Scene<R>,
    glyph_font: String,
    frames: u64,
}

impl<R: Rng> FrameLoop<R> {
    pub fn new(scene: Scene<R>) -> Self {
        Self {
            scene,
            glyph_font: DEFAULT_GLYPH_FONT.to_string(),
            frames: 0,
        }
    }

    pub fn with_glyph_font(mut self, family: impl Into<String>) -> Self {
        self.glyph_font = family.into();
        self
    }

    pub fn scene(&self) -> &Scene<R> {
        &self.scene
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn on_viewport_change(&mut self, viewport: Viewport) -> bool {
        self.scene.on_viewport_change(viewport)
    }

    /// Advance and draw one frame.
    ///
    /// Layers go back to front: planets, zodiac glyphs, stars, then the
    /// shooting star. Returns `false` without drawing while the scene is
    /// empty or the viewport has no usable size.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.scene.is_ready() {
            return false;
        }

        let Scene {
            viewport,
            stars,
            planets,
            zodiacs,
            shooting_star,
            rng,
            ..
        } = &mut self.scene;
        let viewport = *viewport;

        surface.clear_rect(viewport.rect());

        for planet in planets.iter_mut() {
            planet.update(viewport);
            planet.draw(surface);
        }

        for glyph in zodiacs.iter_mut() {
            glyph.update(rng, viewport);
            glyph.draw(surface, &self.glyph_font);
        }

        for star in stars.iter_mut() {
            star.update(viewport);
            star.draw(surface);
        }

        if let Some(shooting_star) = shooting_star {
            shooting_star.update(viewport);
            shooting_star.draw(surface);
            if !shooting_star.is_active()
                && random::chance(rng, SHOOTING_STAR_CHANCE)
                && shooting_star.trigger(rng, viewport)
            {
                trace!(frame = self.frames, x = shooting_star.pos.x, "shooting star launched");
            }
        }

        self.frames += 1;
        true
    }

    /// Render frames until the host's scheduler asks to stop.
    ///
    /// Resize notifications are applied before the frame that follows them.
    /// A frame that fails to present is logged and the loop carries on.
    pub fn run<H: Host>(&mut self, host: &mut H) -> Result<(), HostError> {
        let viewport = host.viewport();
        self.on_viewport_change(viewport);
        info!(width = viewport.width, height = viewport.height, "frame loop started");

        while host.request_frame()? == FrameRequest::Render {
            while let Some(viewport) = host.poll_resize() {
                self.on_viewport_change(viewport);
            }

            self.step(host.surface());

            if let Err(err) = host.present() {
                warn!(%err, frame = self.frames, "failed to present frame");
            }
        }

        info!(frames = self.frames, "frame loop stopped");
        Ok(())
    }
}
