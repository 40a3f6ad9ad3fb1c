//! Test doubles for the host contracts.

use std::collections::VecDeque;
use std::io;

use cosmos_core::{
    Ellipse, Font, FrameRequest, FrameScheduler, Host, HostError, Paint, Rect, Surface, Vec2,
    Viewport, ViewportSource,
};

/// A recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Rect),
    Circle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    Ellipse {
        ellipse: Ellipse,
        line_width: f32,
        paint: Paint,
    },
    Line {
        from: Vec2,
        to: Vec2,
        line_width: f32,
        paint: Paint,
    },
    Text {
        text: String,
        at: Vec2,
        font: String,
        paint: Paint,
    },
}

/// Surface that records every call instead of rasterizing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }

    pub fn texts(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clear(rect));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn stroke_ellipse(&mut self, ellipse: Ellipse, line_width: f32, paint: &Paint) {
        self.ops.push(DrawOp::Ellipse {
            ellipse,
            line_width,
            paint: paint.clone(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, paint: &Paint) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            line_width,
            paint: paint.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: &Font<'_>, paint: &Paint) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            font: font.to_string(),
            paint: paint.clone(),
        });
    }
}

/// Host that renders a fixed number of frames synchronously.
#[derive(Debug)]
pub struct HeadlessHost {
    pub viewport: Viewport,
    pub frames_left: usize,
    pub resizes: VecDeque<Viewport>,
    pub surface: RecordingSurface,
    pub presented: usize,
    pub fail_presents: bool,
}

impl HeadlessHost {
    pub fn new(viewport: Viewport, frames: usize) -> Self {
        Self {
            viewport,
            frames_left: frames,
            resizes: VecDeque::new(),
            surface: RecordingSurface::default(),
            presented: 0,
            fail_presents: false,
        }
    }
}

impl FrameScheduler for HeadlessHost {
    fn request_frame(&mut self) -> Result<FrameRequest, HostError> {
        if self.frames_left == 0 {
            return Ok(FrameRequest::Stop);
        }
        self.frames_left -= 1;
        // Each frame starts from a blank recording.
        self.surface.ops.clear();
        Ok(FrameRequest::Render)
    }
}

impl ViewportSource for HeadlessHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn poll_resize(&mut self) -> Option<Viewport> {
        let next = self.resizes.pop_front()?;
        self.viewport = next;
        Some(next)
    }
}

impl Host for HeadlessHost {
    type Surface = RecordingSurface;

    fn surface(&mut self) -> &mut RecordingSurface {
        &mut self.surface
    }

    fn present(&mut self) -> Result<(), HostError> {
        self.presented += 1;
        if self.fail_presents {
            return Err(io::Error::other("display went away").into());
        }
        Ok(())
    }
}
