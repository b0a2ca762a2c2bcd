use std::path::Path;

use eframe::egui;

use crate::data::loader;
use crate::data::model::FEATURED_DIRECTORS;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CinemaniacApp {
    pub state: AppState,
}

impl CinemaniacApp {
    /// Build the app and try to load the fixed input file.  A failed load
    /// leaves the UI empty with the error in the status line.
    pub fn startup(data_path: &Path) -> Self {
        let mut state = AppState::default();
        match loader::load_file(data_path, FEATURED_DIRECTORS) {
            Ok(table) => {
                log::info!(
                    "Loaded {} films by {} directors from {}",
                    table.len(),
                    table.directors.len(),
                    data_path.display()
                );
                state.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", data_path.display());
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
        Self { state }
    }
}

impl eframe::App for CinemaniacApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::film_plot(ui, &self.state);
        });
    }
}
