//! Configuration for the cosmos starfield.
//!
//! Settings live in a TOML file under the user's config directory. Every
//! field has a default, so a missing file or a partial one is fine.

mod config;
mod error;

pub use config::{CellConfig, Config, IntroConfig, LogConfig};
pub use error::ConfigError;
