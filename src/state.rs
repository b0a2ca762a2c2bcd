use crate::color::ColorMap;
use crate::data::filter::{FilterState, filtered_indices, init_filter_state};
use crate::data::model::FilmTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded film table (None until a file loads successfully).
    pub table: Option<FilmTable>,

    /// Current director selection and year interval.
    pub filters: FilterState,

    /// Indices of films passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Director → colour mapping for the loaded table.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            color_map: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table, initialise filters and colours.
    ///
    /// The director selection starts empty, so the plot starts blank until
    /// the user picks directors.
    pub fn set_table(&mut self, table: FilmTable) {
        self.filters = init_filter_state(&table);
        self.color_map = Some(ColorMap::new(&table.directors));
        self.table = Some(table);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.table {
            Some(table) => filtered_indices(table, &self.filters),
            None => Vec::new(),
        };
    }

    /// Toggle a single director in the selection.
    pub fn toggle_director(&mut self, director: &str) {
        if !self.filters.directors.remove(director) {
            self.filters.directors.insert(director.to_string());
        }
        self.refilter();
    }

    /// Select every director present in the table.
    pub fn select_all(&mut self) {
        if let Some(table) = &self.table {
            self.filters.directors = table.directors.iter().cloned().collect();
            self.refilter();
        }
    }

    /// Clear the director selection.
    pub fn select_none(&mut self) {
        self.filters.directors.clear();
        self.refilter();
    }

    /// Set the year interval.  A reversed pair is normalised by swapping,
    /// so the filter never sees `lo > hi`.
    pub fn set_year_range(&mut self, lo: i32, hi: i32) {
        self.filters.year_range = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::FilmRecord;

    fn film(title: &str, director: &str, year: i32) -> FilmRecord {
        FilmRecord {
            title: title.to_string(),
            director: director.to_string(),
            release_year: year,
            gross_millions: 500.0,
            rating: 8.0,
            budget_millions: 100.0,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_table(FilmTable::from_films(vec![
            film("Inception", "Christopher Nolan", 2010),
            film("Titanic", "James Cameron", 1997),
            film("Barbie", "Greta Gerwig", 2023),
        ]));
        state
    }

    #[test]
    fn set_table_starts_with_empty_selection_and_full_year_span() {
        let state = loaded_state();
        assert!(state.filters.directors.is_empty());
        assert_eq!(state.filters.year_range, (1997, 2023));
        assert!(state.visible_indices.is_empty());
        assert!(state.color_map.is_some());
    }

    #[test]
    fn toggling_a_director_updates_visible_indices() {
        let mut state = loaded_state();
        state.toggle_director("Christopher Nolan");
        assert_eq!(state.visible_indices.len(), 1);

        state.toggle_director("Christopher Nolan");
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn select_all_shows_the_whole_table() {
        let mut state = loaded_state();
        state.select_all();
        assert_eq!(state.visible_indices.len(), 3);

        state.select_none();
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn reversed_year_bounds_are_swapped() {
        let mut state = loaded_state();
        state.set_year_range(2023, 1997);
        assert_eq!(state.filters.year_range, (1997, 2023));
    }

    #[test]
    fn narrowing_the_year_range_hides_films_outside_it() {
        let mut state = loaded_state();
        state.select_all();
        state.set_year_range(2005, 2023);
        assert_eq!(state.visible_indices.len(), 2);
    }
}
