use std::collections::BTreeSet;

use super::model::FilmTable;

// ---------------------------------------------------------------------------
// Filter predicate: selected directors + inclusive year interval
// ---------------------------------------------------------------------------

/// Current filter selections.  `year_range` is inclusive on both ends and
/// kept well-ordered by the state layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Directors currently selected in the multi-select.
    pub directors: BTreeSet<String>,
    /// Inclusive `(lo, hi)` release-year interval.
    pub year_range: (i32, i32),
}

/// Initialise a [`FilterState`] for a freshly loaded table: no directors
/// selected (the plot starts blank), year interval spanning the whole table.
pub fn init_filter_state(table: &FilmTable) -> FilterState {
    FilterState {
        directors: BTreeSet::new(),
        year_range: (table.year_min, table.year_max),
    }
}

/// Return indices of films that pass the current filters.
///
/// A film passes when:
/// * Its director is in the selected set, AND
/// * `lo <= release_year <= hi`.
///
/// An empty selected set matches nothing; there is no implicit select-all.
pub fn filtered_indices(table: &FilmTable, filters: &FilterState) -> Vec<usize> {
    if filters.directors.is_empty() {
        return Vec::new();
    }
    let (lo, hi) = filters.year_range;

    table
        .films
        .iter()
        .enumerate()
        .filter(|(_, film)| {
            filters.directors.contains(&film.director)
                && (lo..=hi).contains(&film.release_year)
        })
        .map(|(i, _)| i)
        .collect()
}
