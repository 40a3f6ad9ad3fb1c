mod intro;
mod logging;
mod terminal;

use cosmos_config::Config;
use cosmos_scene::{FrameLoop, Scene};
use tracing::info;

use crate::terminal::TerminalHost;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let log_file = logging::init_logging(&config.log);
    info!(?log_file, frame_rate = config.frame_rate, seed = ?config.seed, "starting cosmos");

    let scene = match config.seed {
        Some(seed) => Scene::with_seed(seed),
        None => Scene::from_entropy(),
    };
    let mut sky = FrameLoop::new(scene).with_glyph_font(config.glyph_font.clone());

    let terminal = ratatui::init();
    let result = run(terminal, &config, &mut sky);
    ratatui::restore();
    result
}

/// Run the sky until the user quits.
fn run(
    terminal: ratatui::DefaultTerminal,
    config: &Config,
    sky: &mut FrameLoop<rand::rngs::StdRng>,
) -> color_eyre::Result<()> {
    let mut host = TerminalHost::new(terminal, config)?;
    sky.run(&mut host)?;
    Ok(())
}
