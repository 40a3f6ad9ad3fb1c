//! Pixel raster behind the terminal canvas.

use std::ops::Range;

use cosmos_core::{Ellipse, Font, Paint, Rect, Rgba, Surface, Vec2, Viewport};

/// Logical pixels covered by one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 16.0,
        }
    }
}

/// Premultiplied RGBA, channels in 0.0-1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Pixel {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Pixel {
    fn over(&mut self, color: Rgba, alpha: f32) {
        let keep = 1.0 - alpha;
        self.r = color.r as f32 / 255.0 * alpha + self.r * keep;
        self.g = color.g as f32 / 255.0 * alpha + self.g * keep;
        self.b = color.b as f32 / 255.0 * alpha + self.b * keep;
        self.a = alpha + self.a * keep;
    }

    fn to_rgba(self) -> Rgba {
        if self.a <= 0.0 {
            return Rgba::TRANSPARENT;
        }
        let channel = |c: f32| (c / self.a * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgba::new(channel(self.r), channel(self.g), channel(self.b), self.a)
    }
}

/// Text drawn into a terminal cell.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GlyphCell {
    pub(crate) text: String,
    pub(crate) color: Rgba,
}

/// A transparent raster sized to a terminal grid.
///
/// Each terminal cell holds two device pixels stacked vertically. Drawing
/// happens in logical pixels, scaled by [`CellSize`].
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    columns: u16,
    rows: u16,
    cell: CellSize,
    background: Rgba,
    pixels: Vec<Pixel>,
    glyphs: Vec<Option<GlyphCell>>,
}

impl PixelCanvas {
    pub fn new(columns: u16, rows: u16, cell: CellSize) -> Self {
        let mut canvas = Self {
            columns: 0,
            rows: 0,
            cell,
            background: Rgba::rgb(0, 0, 0),
            pixels: Vec::new(),
            glyphs: Vec::new(),
        };
        canvas.resize(columns, rows);
        canvas
    }

    /// Backdrop color the transparent canvas is composited onto.
    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background.with_alpha(1.0);
        self
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Match a new terminal size. Content is discarded when the size changes.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        if columns == self.columns && rows == self.rows && !self.pixels.is_empty() {
            return;
        }
        self.columns = columns;
        self.rows = rows;
        self.pixels = vec![Pixel::default(); self.pixel_width() * self.pixel_height()];
        self.glyphs = vec![None; columns as usize * rows as usize];
    }

    /// Drawable area in logical pixels.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.columns as f32 * self.cell.width,
            self.rows as f32 * self.cell.height,
        )
    }

    pub fn pixel_width(&self) -> usize {
        self.columns as usize
    }

    pub fn pixel_height(&self) -> usize {
        self.rows as usize * 2
    }

    /// Size of one device pixel in logical pixels.
    fn pixel_size(&self) -> Vec2 {
        Vec2::new(self.cell.width, self.cell.height / 2.0)
    }

    /// Canvas content at a device pixel, before compositing.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i].to_rgba())
    }

    /// Opaque color of a device pixel over the background.
    pub fn composited(&self, x: usize, y: usize) -> Rgba {
        let Some(pixel) = self.index(x, y).map(|i| self.pixels[i]) else {
            return self.background;
        };
        let keep = 1.0 - pixel.a.clamp(0.0, 1.0);
        let channel = |c: f32, bg: u8| {
            ((c + bg as f32 / 255.0 * keep) * 255.0)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgba::rgb(
            channel(pixel.r, self.background.r),
            channel(pixel.g, self.background.g),
            channel(pixel.b, self.background.b),
        )
    }

    pub(crate) fn glyph(&self, column: u16, row: u16) -> Option<&GlyphCell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.glyphs[row as usize * self.columns as usize + column as usize].as_ref()
    }

    /// Text and color drawn into a terminal cell, if any.
    pub fn glyph_at(&self, column: u16, row: u16) -> Option<(&str, Rgba)> {
        self.glyph(column, row).map(|g| (g.text.as_str(), g.color))
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.pixel_width() && y < self.pixel_height()).then(|| y * self.pixel_width() + x)
    }

    fn pixel_center(&self, x: usize, y: usize) -> Vec2 {
        (Vec2::new(x as f32, y as f32) + 0.5) * self.pixel_size()
    }

    /// Device pixel containing a logical point.
    fn device_pixel(&self, point: Vec2) -> Option<(usize, usize)> {
        let device = point / self.pixel_size();
        if device.x < 0.0 || device.y < 0.0 {
            return None;
        }
        let (x, y) = (device.x as usize, device.y as usize);
        self.index(x, y).map(|_| (x, y))
    }

    /// Device pixel range overlapping `[min, max]`, clamped to the raster.
    fn device_span(&self, min: Vec2, max: Vec2) -> (Range<usize>, Range<usize>) {
        let size = self.pixel_size();
        let clamp = |v: f32, limit: usize| v.max(0.0).min(limit as f32) as usize;
        let xs = clamp((min.x / size.x).floor(), self.pixel_width())
            ..clamp((max.x / size.x).ceil(), self.pixel_width());
        let ys = clamp((min.y / size.y).floor(), self.pixel_height())
            ..clamp((max.y / size.y).ceil(), self.pixel_height());
        (xs, ys)
    }

    fn blend(&mut self, x: usize, y: usize, color: Rgba, coverage: f32) {
        let alpha = color.opacity() * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        if let Some(i) = self.index(x, y) {
            self.pixels[i].over(color, alpha);
        }
    }

    /// Coverage for strokes narrower than a device pixel.
    fn stroke_coverage(&self, line_width: f32) -> f32 {
        (line_width / self.pixel_size().min_element()).clamp(0.5, 1.0)
    }

    /// Blend each device pixel touched by `points` exactly once.
    fn plot_path(&mut self, points: impl Iterator<Item = Vec2>, coverage: f32, paint: &Paint) {
        let mut touched: Vec<(usize, usize)> =
            points.filter_map(|p| self.device_pixel(p)).collect();
        touched.sort_unstable();
        touched.dedup();
        for (x, y) in touched {
            let color = paint.color_at(self.pixel_center(x, y));
            self.blend(x, y, color, coverage);
        }
    }

    /// Samples per logical pixel of path length, enough to hit every pixel.
    fn samples_for(&self, length: f32) -> usize {
        ((length / self.pixel_size().min_element()) * 2.0).ceil().max(1.0) as usize + 1
    }
}

impl Surface for PixelCanvas {
    fn clear_rect(&mut self, rect: Rect) {
        let (xs, ys) = self.device_span(
            Vec2::new(rect.x, rect.y),
            Vec2::new(rect.right(), rect.bottom()),
        );
        for y in ys {
            for x in xs.clone() {
                if let Some(i) = self.index(x, y) {
                    self.pixels[i] = Pixel::default();
                }
            }
        }

        let columns = (rect.x / self.cell.width).floor().max(0.0) as u16
            ..((rect.right() / self.cell.width).ceil().max(0.0) as u16).min(self.columns);
        let rows = (rect.y / self.cell.height).floor().max(0.0) as u16
            ..((rect.bottom() / self.cell.height).ceil().max(0.0) as u16).min(self.rows);
        for row in rows {
            for column in columns.clone() {
                self.glyphs[row as usize * self.columns as usize + column as usize] = None;
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if radius <= 0.0 || !radius.is_finite() {
            return;
        }
        let (xs, ys) = self.device_span(center - radius, center + radius);
        let mut hit = false;
        for y in ys {
            for x in xs.clone() {
                let p = self.pixel_center(x, y);
                if p.distance_squared(center) <= radius * radius {
                    self.blend(x, y, paint.color_at(p), 1.0);
                    hit = true;
                }
            }
        }

        // Too small to cover any pixel center: draw as a point, dimmer the
        // smaller it is.
        if !hit && let Some((x, y)) = self.device_pixel(center) {
            let extent = self.pixel_size().min_element() * 0.5;
            let coverage = (0.5 + 0.5 * radius / extent).min(1.0);
            self.blend(x, y, paint.color_at(center), coverage);
        }
    }

    fn stroke_ellipse(&mut self, ellipse: Ellipse, line_width: f32, paint: &Paint) {
        let samples = self.samples_for(ellipse.perimeter());
        let step = std::f32::consts::TAU / samples as f32;
        let coverage = self.stroke_coverage(line_width);
        self.plot_path(
            (0..samples).map(|i| ellipse.point_at(i as f32 * step)),
            coverage,
            paint,
        );
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, paint: &Paint) {
        let samples = self.samples_for(from.distance(to));
        let coverage = self.stroke_coverage(line_width);
        let last = (samples - 1).max(1) as f32;
        self.plot_path(
            (0..samples).map(|i| from.lerp(to, i as f32 / last)),
            coverage,
            paint,
        );
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: &Font<'_>, paint: &Paint) {
        let color = paint.color_at(at);
        if text.is_empty() || color.opacity() <= 0.0 {
            return;
        }
        // Terminal cells use the terminal's own font; the size only nudges the
        // glyph from its baseline to the cell that holds its middle.
        let middle = Vec2::new(at.x, at.y - font.size * 0.4);
        if middle.x < 0.0 || middle.y < 0.0 {
            return;
        }
        let column = (middle.x / self.cell.width) as usize;
        let row = (middle.y / self.cell.height) as usize;
        if column >= self.columns as usize || row >= self.rows as usize {
            return;
        }

        let slot = &mut self.glyphs[row * self.columns as usize + column];
        match slot {
            Some(glyph) => {
                glyph.text.clear();
                glyph.text.push_str(text);
                glyph.color = color;
            }
            None => {
                *slot = Some(GlyphCell {
                    text: text.to_string(),
                    color,
                })
            }
        }
    }
}
