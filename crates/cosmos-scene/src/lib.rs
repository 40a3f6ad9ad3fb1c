//! Starfield scene simulation for cosmos.
//!
//! Stars twinkle and drift, ringed planets slide across the sky, zodiac
//! glyphs rise while fading in and out, and a single shooting star streaks
//! past now and then. The [`Scene`] owns every particle and rebuilds them
//! when the viewport width changes; the [`FrameLoop`] advances and draws
//! one frame per scheduler tick in a fixed layer order.

mod animations;
mod frame;
mod glyphs;
mod palette;
pub mod random;
mod scene;
#[cfg(test)]
mod testing;

pub use animations::{Fade, Planet, ShootingStar, Star, ZodiacGlyph};
pub use frame::{DEFAULT_GLYPH_FONT, FrameLoop, SHOOTING_STAR_CHANCE};
pub use glyphs::ZODIAC_SYMBOLS;
pub use palette::{PLANET_PALETTES, PlanetPalette};
pub use scene::{PLANET_COUNT, STAR_COUNT, Scene, ZODIAC_COUNT};
