//! Catalog loading.
//!
//! The ranking functions only see `&[Movie]`; this module turns delimited
//! files into that shape. Sources are pluggable through [`CatalogSource`] so
//! callers (and tests) can supply movies from anywhere.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::{
    error::AppResult,
    models::{Movie, MovieId},
};

/// Supplies the movies available for ranking
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource: Send + Sync {
    /// Reads every valid movie from the source, in source order
    fn load(&self) -> AppResult<Vec<Movie>>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// Loads a catalog, logging and returning an empty one if the source fails
pub fn load_catalog(source: &dyn CatalogSource) -> Vec<Movie> {
    match source.load() {
        Ok(movies) => {
            tracing::info!(
                source = source.name(),
                movies = movies.len(),
                "Catalog loaded"
            );
            movies
        }
        Err(e) => {
            tracing::error!(source = source.name(), error = %e, "Error loading catalog");
            Vec::new()
        }
    }
}

/// CSV file with a header row naming the movie columns
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for CsvCatalog {
    fn load(&self) -> AppResult<Vec<Movie>> {
        tracing::debug!(path = %self.path.display(), "Reading catalog file");
        let file = File::open(&self.path)?;
        parse_catalog(file)
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}

/// Column positions resolved from the header row
#[derive(Debug, Default)]
struct Columns {
    id: Option<usize>,
    title: Option<usize>,
    overview: Option<usize>,
    genre: Option<usize>,
    release_date: Option<usize>,
    vote_average: Option<usize>,
    vote_count: Option<usize>,
    popularity: Option<usize>,
    original_language: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut columns = Columns::default();
        for (index, header) in headers.iter().enumerate() {
            let slot = match clean_text(header).as_str() {
                "id" => &mut columns.id,
                "title" => &mut columns.title,
                "overview" => &mut columns.overview,
                "genre" => &mut columns.genre,
                "release_date" => &mut columns.release_date,
                "vote_average" => &mut columns.vote_average,
                "vote_count" => &mut columns.vote_count,
                "popularity" => &mut columns.popularity,
                "original_language" => &mut columns.original_language,
                _ => continue,
            };
            *slot = Some(index);
        }
        columns
    }
}

/// Parses CSV catalog data
///
/// Rows shorter than the header, and rows that fail [`Movie::validate`],
/// are skipped. Unparsable numbers in a present column read as 0, and a
/// zero id makes the row invalid. Absent columns stay `None`.
pub fn parse_catalog<R: Read>(reader: R) -> AppResult<Vec<Movie>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = Columns::from_headers(&headers);
    tracing::debug!(headers = ?headers, "Catalog headers");

    let mut movies = Vec::new();
    let mut skipped = 0usize;

    for (row, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(row = row + 1, error = %e, "Skipping unreadable catalog row");
                skipped += 1;
                continue;
            }
        };

        if record.len() < headers.len() {
            skipped += 1;
            continue;
        }

        let movie = movie_from_record(&record, &columns);
        let errors = movie.validate();
        if !errors.is_empty() {
            tracing::debug!(row = row + 1, errors = ?errors, "Skipping invalid catalog row");
            skipped += 1;
            continue;
        }

        movies.push(movie);
    }

    if skipped > 0 {
        tracing::info!(skipped, kept = movies.len(), "Some catalog rows were skipped");
    }

    Ok(movies)
}

fn movie_from_record(record: &csv::StringRecord, columns: &Columns) -> Movie {
    let text = |column: Option<usize>| clean_text(field(record, column));

    Movie {
        id: MovieId(parse_int(field(record, columns.id)).unwrap_or(0)),
        title: text(columns.title),
        overview: text(columns.overview),
        genre: text(columns.genre),
        release_date: text(columns.release_date),
        vote_average: columns
            .vote_average
            .map(|_| parse_float(field(record, columns.vote_average)).unwrap_or(0.0)),
        vote_count: columns
            .vote_count
            .map(|_| parse_int(field(record, columns.vote_count)).unwrap_or(0)),
        popularity: columns
            .popularity
            .map(|_| parse_float(field(record, columns.popularity)).unwrap_or(0.0)),
        original_language: text(columns.original_language),
    }
}

fn field(record: &csv::StringRecord, column: Option<usize>) -> &str {
    column.and_then(|index| record.get(index)).unwrap_or("")
}

fn clean_text(value: &str) -> String {
    value.replace('"', "").trim().to_string()
}

fn parse_int(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
