use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Longest overview shown before it is cut with an ellipsis
pub const DEFAULT_OVERVIEW_LENGTH: usize = 100;

const MAX_RATING: f64 = 10.0;

/// Catalog identifier of a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        MovieId(id)
    }
}

/// A single catalog entry
///
/// Optional text fields are empty strings when the source had no value.
/// A rating or popularity of zero is treated the same as a missing one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// Comma separated genre labels, e.g. `"Action, Science Fiction"`
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub original_language: String,
}

/// Reasons a movie is not a valid catalog member
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("ID is required")]
    MissingId,
    #[error("Title is required")]
    MissingTitle,
    #[error("Vote average must be between 0 and 10, got {0}")]
    RatingOutOfRange(f64),
}

impl Movie {
    /// Creates a movie with only the required fields set
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: MovieId(id),
            title: title.into(),
            overview: String::new(),
            genre: String::new(),
            release_date: String::new(),
            vote_average: None,
            vote_count: None,
            popularity: None,
            original_language: String::new(),
        }
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = release_date.into();
        self
    }

    pub fn with_vote_average(mut self, vote_average: f64) -> Self {
        self.vote_average = Some(vote_average);
        self
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = Some(popularity);
        self
    }

    /// Rating, or `None` when missing or zero
    pub fn rating(&self) -> Option<f64> {
        self.vote_average.filter(|rating| *rating != 0.0)
    }

    /// Popularity used for ordering; missing counts as zero
    pub fn popularity_score(&self) -> f64 {
        self.popularity.unwrap_or(0.0)
    }

    /// Trimmed, non-empty genre labels in the order they appear
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre
            .split(',')
            .map(str::trim)
            .filter(|genre| !genre.is_empty())
    }

    /// Parsed release date, if the stored value is a recognizable date
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and a bare `YYYY`
    /// (mapped to January 1st).
    pub fn release(&self) -> Option<NaiveDate> {
        let raw = self.release_date.trim();
        if raw.is_empty() {
            return None;
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
            .or_else(|| {
                if raw.len() == 4 {
                    raw.parse::<i32>()
                        .ok()
                        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
                } else {
                    None
                }
            })
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release().map(|date| date.year())
    }

    pub fn display_year(&self) -> String {
        self.release_year()
            .map(|year| year.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Rating to one decimal place, rounding exact halves away from zero
    pub fn display_rating(&self) -> String {
        self.rating()
            .map(one_decimal)
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Overview cut to `max_chars` characters, with `...` appended when cut
    pub fn truncated_overview(&self, max_chars: usize) -> String {
        match self.overview.char_indices().nth(max_chars) {
            Some((end, _)) => format!("{}...", &self.overview[..end]),
            None => self.overview.clone(),
        }
    }

    /// Checks the catalog membership rules; an empty list means valid
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.id.0 == 0 {
            errors.push(ValidationError::MissingId);
        }
        if self.title.trim().is_empty() {
            errors.push(ValidationError::MissingTitle);
        }
        if let Some(rating) = self.rating() {
            if !(0.0..=MAX_RATING).contains(&rating) {
                errors.push(ValidationError::RatingOutOfRange(rating));
            }
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// `{:.1}` rounds exact ties to even. At one decimal the only exact binary
/// ties are quarters (`x.25`, `x.75`), and those are rounded up instead.
fn one_decimal(value: f64) -> String {
    let is_tie = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if is_tie {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_id_display() {
        assert_eq!(format!("{}", MovieId(27205)), "27205");
    }

    #[test]
    fn test_movie_id_serde_transparent() {
        let json = serde_json::to_string(&MovieId(27205)).unwrap();
        assert_eq!(json, "27205");
        let id: MovieId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, MovieId(27205));
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let movie: Movie = serde_json::from_str(r#"{"id": 1, "title": "Inception"}"#).unwrap();
        assert_eq!(movie, Movie::new(1, "Inception"));
        assert_eq!(movie.overview, "");
        assert_eq!(movie.rating(), None);
    }

    #[test]
    fn test_zero_rating_is_absent() {
        let movie = Movie::new(1, "Inception").with_vote_average(0.0);
        assert_eq!(movie.rating(), None);
        assert_eq!(movie.display_rating(), "N/A");

        let movie = movie.with_vote_average(8.36);
        assert_eq!(movie.rating(), Some(8.36));
        assert_eq!(movie.display_rating(), "8.4");
    }

    #[test]
    fn test_display_rating_rounds_halves_up() {
        let rated = |rating| Movie::new(1, "Inception").with_vote_average(rating).display_rating();
        assert_eq!(rated(8.25), "8.3");
        assert_eq!(rated(7.25), "7.3");
        assert_eq!(rated(8.75), "8.8");
        assert_eq!(rated(6.45), "6.5");
        assert_eq!(rated(0.15), "0.1");
        assert_eq!(rated(7.0), "7.0");
        assert_eq!(rated(10.0), "10.0");
    }

    #[test]
    fn test_genres_are_trimmed_and_skip_blanks() {
        let movie = Movie::new(1, "Inception").with_genre(" Action,Science Fiction , ,Adventure,");
        let genres: Vec<&str> = movie.genres().collect();
        assert_eq!(genres, vec!["Action", "Science Fiction", "Adventure"]);
    }

    #[test]
    fn test_release_year_formats() {
        let movie = Movie::new(1, "Inception").with_release_date("2010-07-15");
        assert_eq!(movie.release_year(), Some(2010));

        let movie = movie.with_release_date("2010-07-15T00:00:00Z");
        assert_eq!(movie.release_year(), Some(2010));

        let movie = movie.with_release_date("1999");
        assert_eq!(movie.release_year(), Some(1999));

        let movie = movie.with_release_date("sometime");
        assert_eq!(movie.release_year(), None);
        assert_eq!(movie.display_year(), "N/A");
    }

    #[test]
    fn test_truncated_overview() {
        let movie = Movie::new(1, "Inception").with_overview("A thief who steals secrets");
        assert_eq!(movie.truncated_overview(7), "A thief...");
        assert_eq!(movie.truncated_overview(100), "A thief who steals secrets");
        assert_eq!(
            movie.truncated_overview("A thief who steals secrets".len()),
            "A thief who steals secrets"
        );
    }

    #[test]
    fn test_truncated_overview_respects_char_boundaries() {
        let movie = Movie::new(1, "Amélie").with_overview("Amélie découvre");
        assert_eq!(movie.truncated_overview(4), "Amél...");
    }

    #[test]
    fn test_validate() {
        assert!(Movie::new(1, "Inception").is_valid());

        let errors = Movie::new(0, "  ").validate();
        assert_eq!(
            errors,
            vec![ValidationError::MissingId, ValidationError::MissingTitle]
        );

        let errors = Movie::new(1, "Inception").with_vote_average(11.0).validate();
        assert_eq!(errors, vec![ValidationError::RatingOutOfRange(11.0)]);
    }
}
