//! Half-block rendering of a [`PixelCanvas`] into a ratatui buffer.

use cosmos_core::Rgba;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::canvas::PixelCanvas;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: &str = "▀";

fn to_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

impl Widget for &PixelCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let columns = area.width.min(self.columns());
        let rows = area.height.min(self.rows());

        for row in 0..rows {
            let y = area.y + row;
            let mut column = 0;
            while column < columns {
                let x = area.x + column;
                let upper = self.composited(column as usize, row as usize * 2);
                let lower = self.composited(column as usize, row as usize * 2 + 1);

                if let Some(glyph) = self.glyph(column, row) {
                    // Blend the glyph over the cell so its opacity still reads.
                    let base = upper.lerp(lower, 0.5).with_alpha(1.0);
                    let ink = base.lerp(glyph.color.with_alpha(1.0), glyph.color.opacity());
                    let style = Style::new().fg(to_color(ink)).bg(to_color(base));
                    let (end, _) =
                        buf.set_stringn(x, y, &glyph.text, (columns - column) as usize, style);
                    // Wide glyphs spill into the next cell; leave it alone.
                    column = (end - area.x).max(column + 1);
                    continue;
                }

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(HALF_BLOCK)
                        .set_fg(to_color(upper))
                        .set_bg(to_color(lower));
                }
                column += 1;
            }
        }
    }
}
