//! Terminal host: paces frames, watches the keyboard and presents the canvas.

use std::time::{Duration, Instant};

use cosmos_canvas::{CellSize, PixelCanvas};
use cosmos_config::Config;
use cosmos_core::{FrameRequest, FrameScheduler, Host, HostError, Viewport, ViewportSource};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::intro::IntroSequence;

/// Runs the scene in the terminal ratatui set up.
pub struct TerminalHost {
    terminal: DefaultTerminal,
    canvas: PixelCanvas,
    intro: Option<IntroSequence>,
    /// Is the host still accepting frames?
    running: bool,
    frame_interval: Duration,
    next_frame: Instant,
    started: Instant,
    pending_resize: Option<Viewport>,
}

impl TerminalHost {
    pub fn new(terminal: DefaultTerminal, config: &Config) -> color_eyre::Result<Self> {
        let size = terminal.size()?;
        let cell = CellSize {
            width: config.cell.width,
            height: config.cell.height,
        };
        let background = config.background_color()?;
        let now = Instant::now();
        Ok(Self {
            terminal,
            canvas: PixelCanvas::new(size.width, size.height, cell).with_background(background),
            intro: IntroSequence::from_config(&config.intro),
            running: true,
            frame_interval: config.frame_interval(),
            next_frame: now,
            started: now,
            pending_resize: None,
        })
    }

    /// Handles one crossterm event between frames.
    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Resize(columns, rows) => self.on_resize(columns, rows),
            _ => {}
        }
    }

    fn on_key_event(&mut self, key: KeyEvent) {
        if is_quit(key) {
            self.quit();
        }
    }

    fn on_resize(&mut self, columns: u16, rows: u16) {
        self.canvas.resize(columns, rows);
        let viewport = self.canvas.viewport();
        debug!(columns, rows, ?viewport, "terminal resized");
        self.pending_resize = Some(viewport);
    }

    fn quit(&mut self) {
        self.running = false;
    }
}

/// Esc, `q` and Ctrl-C leave the sky.
fn is_quit(key: KeyEvent) -> bool {
    matches!(
        (key.modifiers, key.code),
        (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C'))
    )
}

impl FrameScheduler for TerminalHost {
    /// Waits for the next frame deadline, handling input while it waits.
    fn request_frame(&mut self) -> Result<FrameRequest, HostError> {
        loop {
            if !self.running {
                return Ok(FrameRequest::Stop);
            }
            let now = Instant::now();
            if now >= self.next_frame {
                // Late frames are not made up for.
                self.next_frame = (self.next_frame + self.frame_interval).max(now);
                return Ok(FrameRequest::Render);
            }
            if event::poll(self.next_frame - now)? {
                let event = event::read()?;
                self.on_event(event);
            }
        }
    }
}

impl ViewportSource for TerminalHost {
    fn viewport(&self) -> Viewport {
        self.canvas.viewport()
    }

    fn poll_resize(&mut self) -> Option<Viewport> {
        self.pending_resize.take()
    }
}

impl Host for TerminalHost {
    type Surface = PixelCanvas;

    fn surface(&mut self) -> &mut PixelCanvas {
        &mut self.canvas
    }

    fn present(&mut self) -> Result<(), HostError> {
        let canvas = &self.canvas;
        let overlay = self
            .intro
            .as_ref()
            .map(|intro| intro.overlay(self.started.elapsed(), canvas.background()));
        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(canvas, area);
            if let Some(overlay) = overlay {
                frame.render_widget(overlay, area);
            }
        })?;
        Ok(())
    }
}
