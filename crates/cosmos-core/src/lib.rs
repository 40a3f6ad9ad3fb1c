//! Core types shared by the cosmos crates.
//!
//! Colors, geometry and paints used by the particle simulation, plus the
//! contracts an embedding host fulfils: a drawing [`Surface`], a
//! [`FrameScheduler`] and a [`ViewportSource`].

mod color;
mod geometry;
mod host;
mod paint;

pub use color::Rgba;
pub use geometry::{Ellipse, Rect, Vec2, Viewport};
pub use host::{FrameRequest, FrameScheduler, Host, HostError, Surface, ViewportSource};
pub use paint::{ColorStop, Font, LinearGradient, Paint, RadialGradient};
