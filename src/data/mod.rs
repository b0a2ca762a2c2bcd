/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, keep allow-listed directors → FilmTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ FilmTable │  Vec<FilmRecord>, director + year indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  director set ∩ year interval → filtered indices
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
