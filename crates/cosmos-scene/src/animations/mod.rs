//! Particle kinds drawn by the scene.

mod planet;
mod shooting_star;
mod star;
mod zodiac;

pub use planet::Planet;
pub use shooting_star::ShootingStar;
pub use star::Star;
pub use zodiac::{Fade, ZodiacGlyph};
