//! Jotpad - a minimal notepad with selectable text encodings

mod runtime;
mod view;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use jotpad::cli::CliArgs;
use jotpad::theme::{load_theme, Theme};
use jotpad::{AppModel, EditorConfig};

use runtime::App;

const INITIAL_WIDTH: u32 = 800;
const INITIAL_HEIGHT: u32 = 600;

fn main() -> Result<()> {
    jotpad::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut config = EditorConfig::load();
    startup.apply_to(&mut config);

    let theme = load_theme(&config.theme).unwrap_or_else(|e| {
        tracing::warn!("Failed to load theme '{}': {}, using default", config.theme, e);
        Theme::default()
    });

    let model = AppModel::new(config, theme, INITIAL_WIDTH, INITIAL_HEIGHT);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model, startup);

    event_loop.run_app(&mut app)?;

    Ok(())
}
