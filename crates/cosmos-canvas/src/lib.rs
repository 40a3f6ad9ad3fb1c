//! A software canvas for drawing the cosmos scene in a terminal.
//!
//! [`PixelCanvas`] rasterizes [`cosmos_core::Surface`] calls into a grid of
//! RGBA pixels, two per terminal cell, and renders itself as a ratatui
//! widget using upper half blocks.

mod canvas;
mod widget;

pub use canvas::{CellSize, PixelCanvas};
