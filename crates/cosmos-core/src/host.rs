//! Contracts between the animation core and the environment hosting it.

use crate::geometry::{Ellipse, Rect, Vec2, Viewport};
use crate::paint::{Font, Paint};

/// Errors raised by a host while pacing or presenting frames.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("host I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// An immediate-mode 2D drawing surface in logical pixels.
pub trait Surface {
    /// Reset a region to fully transparent.
    fn clear_rect(&mut self, rect: Rect);

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);

    fn stroke_ellipse(&mut self, ellipse: Ellipse, line_width: f32, paint: &Paint);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, paint: &Paint);

    /// Draw `text` with its baseline origin at `at`.
    ///
    /// Surfaces that cannot honour `font` use their default text rendering.
    fn fill_text(&mut self, text: &str, at: Vec2, font: &Font<'_>, paint: &Paint);
}

/// What the scheduler wants the frame loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    Render,
    Stop,
}

/// Paces frames to the display.
pub trait FrameScheduler {
    /// Wait until the next frame is due.
    fn request_frame(&mut self) -> Result<FrameRequest, HostError>;
}

/// Reports the viewport size and notifies about changes.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;

    /// The latest size change since the previous call, if any.
    fn poll_resize(&mut self) -> Option<Viewport>;
}

/// Everything a frame loop needs from its environment.
pub trait Host: FrameScheduler + ViewportSource {
    type Surface: Surface;

    fn surface(&mut self) -> &mut Self::Surface;

    /// Make the frame drawn on [`Host::surface`] visible.
    fn present(&mut self) -> Result<(), HostError>;
}
