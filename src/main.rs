mod player;
mod types;
mod ui;

use std::path::Path;

use anyhow::Context;
use gstreamer as gst;

use crate::types::catalogue;
use crate::ui::app::SoundboardApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    gst::init().context("failed to initialize gstreamer")?;

    let clips = catalogue::load_catalogue(Path::new("soundboard.json"))?;
    log::info!("starting soundboard with {} clips", clips.len());

    let app = SoundboardApp::new(clips);
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Quiz Show Soundboard",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("ui event loop failed: {e}"))?;
    Ok(())
}
