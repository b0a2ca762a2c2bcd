use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::FEATURED_DIRECTORS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.label("No film table loaded.");
            return;
        }
    };

    // Clone what we need so we can mutate state inside the widgets.
    let directors = table.directors.clone();
    let (year_min, year_max) = (table.year_min, table.year_max);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Director multi-select ----
            let n_selected = state.filters.directors.len();
            let header_text = format!("Directors  ({n_selected}/{})", directors.len());

            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("directors")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_none();
                        }
                    });

                    for director in &directors {
                        let is_selected = state.filters.directors.contains(director);

                        // Label carries the director's plot colour.
                        let mut text = RichText::new(director);
                        if let Some(cm) = &state.color_map {
                            text = text.color(cm.color_for(director));
                        }

                        let mut checked = is_selected;
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_director(director);
                        }
                    }
                });

            ui.separator();

            // ---- Release-year range ----
            ui.strong("Release year");
            let (mut lo, mut hi) = state.filters.year_range;
            let lo_changed = ui
                .add(egui::Slider::new(&mut lo, year_min..=year_max).text("from"))
                .changed();
            let hi_changed = ui
                .add(egui::Slider::new(&mut hi, year_min..=year_max).text("to"))
                .changed();
            if lo_changed || hi_changed {
                state.set_year_range(lo, hi);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} films loaded, {} shown",
                table.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open film table")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path, FEATURED_DIRECTORS) {
            Ok(table) => {
                log::info!(
                    "Loaded {} films spanning {}..={}",
                    table.len(),
                    table.year_min,
                    table.year_max
                );
                state.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
