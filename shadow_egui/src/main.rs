mod app;
mod components;
mod consts;
mod keybinds;
mod logging;

use anyhow::anyhow;

use crate::app::ShadowApp;
use crate::consts::window;

fn main() -> anyhow::Result<()> {
    if logging::init(log::LevelFilter::Info).is_err() {
        eprintln!("Logging failed to start.");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window::TITLE)
            .with_inner_size(window::INNER_SIZE)
            .with_min_inner_size(window::MIN_INNER_SIZE),
        ..Default::default()
    };

    log::info!("starting {}", window::TITLE);
    eframe::run_native(
        window::TITLE,
        options,
        Box::new(|cc| Ok(Box::new(ShadowApp::new(cc)))),
    )
    .map_err(|e| anyhow!("eframe exited with an error: {e}"))
}
