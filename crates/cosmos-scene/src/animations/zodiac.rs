//! Zodiac glyphs that rise from the bottom while fading in and out.

use cosmos_core::{Font, Paint, Rgba, Surface, Vec2, Viewport};
use rand::Rng;

use crate::glyphs::ZODIAC_SYMBOLS;
use crate::random;

const FADE_STEP: f32 = 0.005;
const PEAK_OPACITY: f32 = 0.4;
/// Distance beyond the top edge that retires a glyph, and below the bottom
/// edge where its replacement enters.
const OFFSCREEN_MARGIN: f32 = 50.0;

/// Which half of the fade cycle a glyph is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    In,
    Out,
}

/// A glyph floating upward through one fade-in/fade-out cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ZodiacGlyph {
    pub symbol: &'static str,
    /// Baseline origin of the glyph.
    pub pos: Vec2,
    /// Font size in logical pixels.
    pub size: f32,
    /// Upward travel per frame.
    pub rise_speed: f32,
    pub opacity: f32,
    pub fade: Fade,
}

impl ZodiacGlyph {
    /// A transparent glyph somewhere in the viewport, about to fade in.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            symbol: *random::pick(rng, &ZODIAC_SYMBOLS),
            pos: random::point_in(rng, viewport),
            size: random::range(rng, 20.0, 50.0),
            rise_speed: random::range(rng, 0.1, 0.4),
            opacity: 0.0,
            fade: Fade::In,
        }
    }

    /// Re-roll every field in place.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) {
        *self = Self::new(rng, viewport);
    }

    /// Advance one frame. A glyph that has faded out or floated off the top
    /// comes back as a new glyph just below the bottom edge.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) {
        self.pos.y -= self.rise_speed;

        match self.fade {
            Fade::In => {
                self.opacity += FADE_STEP;
                if self.opacity >= PEAK_OPACITY {
                    self.fade = Fade::Out;
                }
            }
            Fade::Out => self.opacity -= FADE_STEP,
        }

        if self.opacity <= 0.0 || self.pos.y < -OFFSCREEN_MARGIN {
            self.reset(rng, viewport);
            self.pos.y = viewport.height + OFFSCREEN_MARGIN;
        }
    }

    /// Draw in white at the current opacity, skipping invisible glyphs.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, font_family: &str) {
        if self.opacity <= 0.0 {
            return;
        }
        let font = Font {
            size: self.size,
            family: font_family,
        };
        let paint = Paint::Solid(Rgba::GOLD.with_alpha(self.opacity));
        surface.fill_text(self.symbol, self.pos, &font, &paint);
    }
}
