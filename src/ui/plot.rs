use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Plot, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Bubble-scatter plot (central panel)
// ---------------------------------------------------------------------------

const MIN_RADIUS: f32 = 3.0;
const MAX_RADIUS: f32 = 18.0;
const BUBBLE_OPACITY: f32 = 0.9;

/// How close (relative to the visible axis spans) the pointer must be to a
/// bubble before its film is named in the hover label.
const HOVER_SNAP: f64 = 0.002;

struct HoverEntry {
    gross: f64,
    rating: f64,
    title: String,
    director: String,
    year: i32,
}

/// Render the gross-vs-rating bubble plot in the central panel.
pub fn film_plot(ui: &mut Ui, state: &AppState) {
    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a film table to explore  (File → Open…)");
            });
            return;
        }
    };

    // Bubble area is proportional to budget, so radius goes with its square
    // root, normalised against the largest visible budget.
    let max_budget = state
        .visible_indices
        .iter()
        .map(|&i| table.films[i].budget_millions)
        .fold(0.0_f64, f64::max);

    let hover: Vec<HoverEntry> = state
        .visible_indices
        .iter()
        .map(|&i| {
            let film = &table.films[i];
            HoverEntry {
                gross: film.gross_millions,
                rating: film.rating,
                title: film.title.clone(),
                director: film.director.clone(),
                year: film.release_year,
            }
        })
        .collect();

    let gross_span = span(hover.iter().map(|e| e.gross));
    let rating_span = span(hover.iter().map(|e| e.rating));

    Plot::new("film_plot")
        .legend(Legend::default())
        .x_axis_label("Gross worldwide (millions USD)")
        .y_axis_label("Rating (out of 10)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(move |name, value| {
            let mut best: Option<(f64, &HoverEntry)> = None;
            for entry in &hover {
                let dx = (entry.gross - value.x) / gross_span;
                let dy = (entry.rating - value.y) / rating_span;
                let d2 = dx * dx + dy * dy;
                if best.map_or(true, |(b, _)| d2 < b) {
                    best = Some((d2, entry));
                }
            }
            match best {
                Some((d2, entry)) if d2 < HOVER_SNAP => format!(
                    "{}\n{} ({})\n${:.1}M gross, {:.1}/10",
                    entry.title, entry.director, entry.year, entry.gross, entry.rating
                ),
                _ if !name.is_empty() => {
                    format!("{name}\n${:.1}M, {:.1}/10", value.x, value.y)
                }
                _ => format!("${:.1}M, {:.1}/10", value.x, value.y),
            }
        })
        .show(ui, |plot_ui| {
            for &idx in &state.visible_indices {
                let film = &table.films[idx];

                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(&film.director))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let radius = if max_budget > 0.0 {
                    let scale = (film.budget_millions / max_budget).max(0.0).sqrt() as f32;
                    MIN_RADIUS + (MAX_RADIUS - MIN_RADIUS) * scale
                } else {
                    MIN_RADIUS
                };

                // One element per film so every bubble gets its own radius;
                // identical names collapse into a single legend entry.
                let points = Points::new(vec![[film.gross_millions, film.rating]])
                    .name(&film.director)
                    .color(color.gamma_multiply(BUBBLE_OPACITY))
                    .filled(true)
                    .radius(radius);

                plot_ui.points(points);
            }
        });
}

/// Non-zero span of an axis, for normalised hover distances.
fn span(values: impl Iterator<Item = f64>) -> f64 {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;
    if span.is_finite() && span > f64::EPSILON {
        span
    } else {
        1.0
    }
}
