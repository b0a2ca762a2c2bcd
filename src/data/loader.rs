use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use thiserror::Error;

use super::model::{FilmRecord, FilmTable};

// ---------------------------------------------------------------------------
// Column names (shared between the Parquet path and error messages)
// ---------------------------------------------------------------------------

pub const COL_TITLE: &str = "Title";
pub const COL_DIRECTOR: &str = "Director";
pub const COL_YEAR: &str = "Release Year";
pub const COL_GROSS: &str = "Gross worldwide (in millions)";
pub const COL_RATING: &str = "Rating (Out of 10)";
pub const COL_BUDGET: &str = "Budget (in millions)";

/// A required column is absent from the input file.
#[derive(Debug, Error)]
#[error("missing required column '{0}'")]
pub struct MissingColumn(pub &'static str);

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a film table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the six required columns
/// * `.json`    – `[{ "Title": ..., "Director": ..., ... }, ...]`
/// * `.parquet` – flat scalar columns with the same names
///
/// Rows whose director is not in `allow_list` are dropped before the
/// table's derived indices are built.
pub fn load_file(path: &Path, allow_list: &[&str]) -> Result<FilmTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let films = match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            parse_csv(file)?
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json(&text)?
        }
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    Ok(FilmTable::from_films(apply_allow_list(films, allow_list)))
}

fn apply_allow_list(films: Vec<FilmRecord>, allow_list: &[&str]) -> Vec<FilmRecord> {
    films
        .into_iter()
        .filter(|f| allow_list.contains(&f.director.as_str()))
        .collect()
}

// ---------------------------------------------------------------------------
// Raw record – the on-disk schema
// ---------------------------------------------------------------------------

/// One row as it appears in CSV/JSON.  The year is read as a float and
/// coerced to an integer afterwards, matching tables that store it as
/// `2010.0`.  Unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct RawFilm {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Director")]
    director: String,
    #[serde(rename = "Release Year")]
    release_year: f64,
    #[serde(rename = "Gross worldwide (in millions)")]
    gross_millions: f64,
    #[serde(rename = "Rating (Out of 10)")]
    rating: f64,
    #[serde(rename = "Budget (in millions)")]
    budget_millions: f64,
}

impl RawFilm {
    fn into_record(self, row: usize) -> Result<FilmRecord> {
        if !self.release_year.is_finite() {
            bail!("Row {row}: '{COL_YEAR}' is not a finite number");
        }
        Ok(FilmRecord {
            title: self.title,
            director: self.director,
            release_year: self.release_year as i32,
            gross_millions: self.gross_millions,
            rating: self.rating,
            budget_millions: self.budget_millions,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn parse_csv<R: Read>(input: R) -> Result<Vec<FilmRecord>> {
    let mut reader = csv::Reader::from_reader(input);
    let mut films = Vec::new();

    for (row_no, result) in reader.deserialize::<RawFilm>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        films.push(raw.into_record(row_no)?);
    }
    Ok(films)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Title": "Inception",
///     "Director": "Christopher Nolan",
///     "Release Year": 2010,
///     "Gross worldwide (in millions)": 836.8,
///     "Rating (Out of 10)": 8.8,
///     "Budget (in millions)": 160.0
///   },
///   ...
/// ]
/// ```
fn parse_json(text: &str) -> Result<Vec<FilmRecord>> {
    let raw: Vec<RawFilm> = serde_json::from_str(text).context("parsing JSON")?;
    raw.into_iter()
        .enumerate()
        .map(|(row_no, r)| r.into_record(row_no))
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing film records.
///
/// Expected schema: the six required columns as flat scalars.  Strings may
/// be Utf8 or LargeUtf8, numbers any of Int32/Int64/Float32/Float64.  Works
/// with files written by both **Pandas** (`df.to_parquet()`) and **Polars**
/// (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<FilmRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut films = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let title_col = required_column(&batch, COL_TITLE)?;
        let director_col = required_column(&batch, COL_DIRECTOR)?;
        let year_col = required_column(&batch, COL_YEAR)?;
        let gross_col = required_column(&batch, COL_GROSS)?;
        let rating_col = required_column(&batch, COL_RATING)?;
        let budget_col = required_column(&batch, COL_BUDGET)?;

        for row in 0..batch.num_rows() {
            let release_year = numeric_value(year_col, row)
                .with_context(|| format!("Row {row}: failed to read '{COL_YEAR}'"))?;
            if !release_year.is_finite() {
                bail!("Row {row}: '{COL_YEAR}' is not a finite number");
            }

            films.push(FilmRecord {
                title: string_value(title_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_TITLE}'"))?,
                director: string_value(director_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_DIRECTOR}'"))?,
                release_year: release_year as i32,
                gross_millions: numeric_value(gross_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_GROSS}'"))?,
                rating: numeric_value(rating_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_RATING}'"))?,
                budget_millions: numeric_value(budget_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_BUDGET}'"))?,
            });
        }
    }

    Ok(films)
}

// -- Parquet / Arrow helpers --

/// Look up a required column in a record batch by name.
fn required_column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| MissingColumn(name))?;
    Ok(batch.column(idx))
}

/// Extract a string cell from a Utf8 or LargeUtf8 column.
fn string_value(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected a string column, got {other:?}"),
    }
}

/// Extract a numeric cell as `f64` from any common numeric column type.
fn numeric_value(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    match col.data_type() {
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            Ok(arr.value(row))
        }
        other => bail!("Expected a numeric column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    const SAMPLE_CSV: &str = "\
Title,Director,Release Year,Gross worldwide (in millions),Rating (Out of 10),Budget (in millions)
Inception,Christopher Nolan,2010,836.8,8.8,160
Goodfellas,Martin Scorsese,1990,46.8,8.7,25
Home Movie,Nobody Famous,2021,0.1,5.0,0.2
";

    #[test]
    fn parse_csv_reads_all_rows() {
        let films = parse_csv(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(films.len(), 3);
        assert_eq!(films[0].title, "Inception");
        assert_eq!(films[0].release_year, 2010);
        assert_eq!(films[1].gross_millions, 46.8);
    }

    #[test]
    fn parse_csv_rejects_missing_column() {
        let csv = "Title,Director,Release Year\nInception,Christopher Nolan,2010\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("CSV row 0"));
    }

    #[test]
    fn parse_csv_accepts_float_years() {
        let csv = "\
Title,Director,Release Year,Gross worldwide (in millions),Rating (Out of 10),Budget (in millions)
Inception,Christopher Nolan,2010.0,836.8,8.8,160
";
        let films = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(films[0].release_year, 2010);
    }

    #[test]
    fn parse_json_reads_records() {
        let json = r#"[
            {
                "Title": "Avatar",
                "Director": "James Cameron",
                "Release Year": 2009,
                "Gross worldwide (in millions)": 2923.7,
                "Rating (Out of 10)": 7.9,
                "Budget (in millions)": 237.0
            }
        ]"#;
        let films = parse_json(json).unwrap();
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].director, "James Cameron");
        assert_eq!(films[0].release_year, 2009);
    }

    #[test]
    fn allow_list_drops_unlisted_directors() {
        let films = parse_csv(SAMPLE_CSV.as_bytes()).unwrap();
        let kept = apply_allow_list(films, &["Christopher Nolan", "Martin Scorsese"]);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|f| f.director != "Nobody Famous"));
    }

    #[test]
    fn load_file_rejects_unknown_extension() {
        let err = load_file(Path::new("films.txt"), &[]).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn parquet_roundtrip_preserves_records() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_TITLE, DataType::Utf8, false),
            Field::new(COL_DIRECTOR, DataType::Utf8, false),
            Field::new(COL_YEAR, DataType::Int64, false),
            Field::new(COL_GROSS, DataType::Float64, false),
            Field::new(COL_RATING, DataType::Float64, false),
            Field::new(COL_BUDGET, DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["Titanic", "Barbie"])),
                Arc::new(StringArray::from(vec!["James Cameron", "Greta Gerwig"])),
                Arc::new(Int64Array::from(vec![1997, 2023])),
                Arc::new(Float64Array::from(vec![2264.7, 1445.6])),
                Arc::new(Float64Array::from(vec![7.9, 6.8])),
                Arc::new(Float64Array::from(vec![200.0, 145.0])),
            ],
        )
        .unwrap();

        let path = std::env::temp_dir().join(format!(
            "cinemaniac_loader_test_{}.parquet",
            std::process::id()
        ));
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let films = load_parquet(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(films.len(), 2);
        assert_eq!(films[0].title, "Titanic");
        assert_eq!(films[0].release_year, 1997);
        assert_eq!(films[1].budget_millions, 145.0);
    }
}
