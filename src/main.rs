mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::CinemaniacApp;
use eframe::egui;

/// The film table read once at startup, relative to the working directory.
const DATA_PATH: &str = "data.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cinemaniac – Film Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(CinemaniacApp::startup(Path::new(DATA_PATH))))),
    )
}
