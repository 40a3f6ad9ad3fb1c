//! Opening sequence: a mantra on a dark screen, then the title over the sky.

use std::time::Duration;

use cosmos_config::IntroConfig;
use cosmos_core::Rgba;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

const INK: Rgba = Rgba::GOLD;

/// What the intro shows at a given moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntroPhase {
    /// The mantra covers the sky. Opacity drops to zero while it fades.
    Mantra { opacity: f32 },
    /// The title fades in over the sky and then stays.
    Title { opacity: f32 },
}

/// Intro timings and text.
#[derive(Debug, Clone)]
pub struct IntroSequence {
    mantra: String,
    title: String,
    display: Duration,
    fade: Duration,
    reveal: Duration,
}

/// Fraction of `span` covered by `elapsed`. A zero span is already complete.
fn progress(elapsed: Duration, span: Duration) -> f32 {
    if span.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f32() / span.as_secs_f32()).clamp(0.0, 1.0)
    }
}

impl IntroSequence {
    /// `None` when the intro is switched off.
    pub fn from_config(config: &IntroConfig) -> Option<Self> {
        config.enabled.then(|| Self {
            mantra: config.mantra.clone(),
            title: config.title.clone(),
            display: config.display(),
            fade: config.fade(),
            reveal: config.reveal(),
        })
    }

    pub fn phase(&self, elapsed: Duration) -> IntroPhase {
        if elapsed < self.display {
            return IntroPhase::Mantra { opacity: 1.0 };
        }
        let fading = elapsed - self.display;
        if fading < self.fade {
            return IntroPhase::Mantra {
                opacity: 1.0 - progress(fading, self.fade),
            };
        }
        IntroPhase::Title {
            opacity: progress(fading - self.fade, self.reveal),
        }
    }

    /// Overlay to draw on top of the sky at `elapsed`.
    pub fn overlay(&self, elapsed: Duration, backdrop: Rgba) -> IntroOverlay<'_> {
        IntroOverlay {
            phase: self.phase(elapsed),
            sequence: self,
            backdrop,
        }
    }
}

/// Renders one intro phase over whatever the buffer already holds.
#[derive(Debug)]
pub struct IntroOverlay<'a> {
    phase: IntroPhase,
    sequence: &'a IntroSequence,
    backdrop: Rgba,
}

/// Mix a cell color toward `target`. Named colors are replaced outright once
/// the mix passes halfway.
fn mix(color: Color, target: Rgba, t: f32) -> Color {
    let mixed = match color {
        Color::Rgb(r, g, b) => Rgba::rgb(r, g, b).lerp(target, t),
        _ if t >= 0.5 => target,
        _ => return color,
    };
    Color::Rgb(mixed.r, mixed.g, mixed.b)
}

impl IntroOverlay<'_> {
    fn centered_line(text: &str, ink: Color, area: Rect, buf: &mut Buffer) {
        if text.is_empty() || area.height == 0 {
            return;
        }
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        // Style the span only, so the rest of the row keeps its sky colors.
        Line::from(Span::styled(text, Style::new().fg(ink)))
            .centered()
            .render(row, buf);
    }
}

impl Widget for IntroOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        match self.phase {
            IntroPhase::Mantra { opacity } => {
                for y in area.top()..area.bottom() {
                    for x in area.left()..area.right() {
                        if let Some(cell) = buf.cell_mut((x, y)) {
                            cell.fg = mix(cell.fg, self.backdrop, opacity);
                            cell.bg = mix(cell.bg, self.backdrop, opacity);
                        }
                    }
                }
                let ink = self.backdrop.lerp(INK, opacity);
                Self::centered_line(
                    &self.sequence.mantra,
                    Color::Rgb(ink.r, ink.g, ink.b),
                    area,
                    buf,
                );
            }
            IntroPhase::Title { opacity } => {
                if opacity <= 0.0 {
                    return;
                }
                let ink = self.backdrop.lerp(Rgba::WHITE, opacity);
                Self::centered_line(
                    &self.sequence.title,
                    Color::Rgb(ink.r, ink.g, ink.b),
                    area,
                    buf,
                );
            }
        }
    }
}
