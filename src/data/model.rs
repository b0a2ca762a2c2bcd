use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Director allow-list
// ---------------------------------------------------------------------------

/// The directors the dataset is restricted to at load time.  Passed
/// explicitly into the loader so callers can swap it out.
pub const FEATURED_DIRECTORS: &[&str] = &[
    "Christopher Nolan",
    "Martin Scorsese",
    "Steven Spielberg",
    "Quentin Tarantino",
    "Tim Burton",
    "Kathryn Bigelow",
    "James Cameron",
    "Spike Lee",
    "Greta Gerwig",
    "David Fincher",
];

// ---------------------------------------------------------------------------
// FilmRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single film (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct FilmRecord {
    pub title: String,
    pub director: String,
    /// Release year, coerced to an integer for range comparison.
    pub release_year: i32,
    /// Worldwide gross in millions of USD.
    pub gross_millions: f64,
    /// Rating out of 10.
    pub rating: f64,
    /// Production budget in millions of USD.
    pub budget_millions: f64,
}

// ---------------------------------------------------------------------------
// FilmTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed indices.  Immutable after load;
/// filtering yields index views into `films`.
#[derive(Debug, Clone)]
pub struct FilmTable {
    /// All films (rows).
    pub films: Vec<FilmRecord>,
    /// Sorted list of distinct director names present.
    pub directors: Vec<String>,
    /// Earliest release year in the table (0 when empty).
    pub year_min: i32,
    /// Latest release year in the table (0 when empty).
    pub year_max: i32,
}

impl FilmTable {
    /// Build the derived indices from the loaded films.
    pub fn from_films(films: Vec<FilmRecord>) -> Self {
        let directors: Vec<String> = films
            .iter()
            .map(|f| f.director.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        let mut years = films.iter().map(|f| f.release_year);
        let (year_min, year_max) = match years.next() {
            Some(first) => years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))),
            None => (0, 0),
        };

        FilmTable {
            films,
            directors,
            year_min,
            year_max,
        }
    }

    /// Number of films.
    pub fn len(&self) -> usize {
        self.films.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(title: &str, director: &str, year: i32) -> FilmRecord {
        FilmRecord {
            title: title.to_string(),
            director: director.to_string(),
            release_year: year,
            gross_millions: 100.0,
            rating: 7.5,
            budget_millions: 50.0,
        }
    }

    #[test]
    fn from_films_collects_sorted_unique_directors() {
        let table = FilmTable::from_films(vec![
            film("Tenet", "Christopher Nolan", 2020),
            film("Avatar", "James Cameron", 2009),
            film("Inception", "Christopher Nolan", 2010),
        ]);
        assert_eq!(table.directors, vec!["Christopher Nolan", "James Cameron"]);
    }

    #[test]
    fn from_films_computes_year_bounds() {
        let table = FilmTable::from_films(vec![
            film("Jaws", "Steven Spielberg", 1975),
            film("Barbie", "Greta Gerwig", 2023),
            film("Se7en", "David Fincher", 1995),
        ]);
        assert_eq!((table.year_min, table.year_max), (1975, 2023));
    }

    #[test]
    fn empty_table_has_zero_bounds() {
        let table = FilmTable::from_films(Vec::new());
        assert!(table.is_empty());
        assert_eq!((table.year_min, table.year_max), (0, 0));
        assert!(table.directors.is_empty());
    }
}
