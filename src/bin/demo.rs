//=========================================================================
// Proscenium Demo
//
// Opens a window on the menu screen.
//
//   Space        → open the editor
//   Middle-drag  → pan the editor's world camera
//   Backspace    → back to the menu
//   Escape       → quit (from the menu)
//
// Set RUST_LOG=debug to watch stack transitions, RUST_LOG=trace for every
// event and draw call.
//
//=========================================================================

use anyhow::{Context, Result};
use log::info;

use proscenium::core::geometry::Color;
use proscenium::logging::{init_logging, LoggingConfig};
use proscenium::screens::MenuScreen;
use proscenium::EngineBuilder;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    info!("proscenium demo starting");

    EngineBuilder::new()
        .with_title("Proscenium Demo")
        .with_window_size(1024, 768)
        .with_background_size(1920, 1080)
        .with_clear_color(Color::rgb(18, 18, 24))
        .build()
        .run(MenuScreen::new)
        .context("event loop failed")?;

    info!("proscenium demo exited cleanly");
    Ok(())
}
