use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{error::AppError, models::Movie};

/// Ordering applied by [`sort_movies`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Alphabetical, ignoring case
    Title,
    /// Highest rating first
    Rating,
    /// Most popular first
    Popularity,
    /// Newest release first; undated movies last
    Year,
    /// Catalog order
    #[default]
    None,
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "rating" => Ok(SortKey::Rating),
            "popularity" => Ok(SortKey::Popularity),
            "year" => Ok(SortKey::Year),
            "" | "none" => Ok(SortKey::None),
            other => Err(AppError::InvalidInput(format!("Unknown sort key: {}", other))),
        }
    }
}

/// Movies whose title, genre or overview contains `term`, ignoring case
///
/// A blank term matches everything. Non-blank terms are matched as given,
/// whitespace included.
pub fn search(catalog: &[Movie], term: &str) -> Vec<Movie> {
    if term.trim().is_empty() {
        return catalog.to_vec();
    }

    let term = term.to_lowercase();

    catalog
        .iter()
        .filter(|movie| {
            movie.title.to_lowercase().contains(&term)
                || movie.genre.to_lowercase().contains(&term)
                || movie.overview.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Movies whose genre field contains `genre`, ignoring case
///
/// An empty genre or `"all"` matches everything.
pub fn filter_by_genre(catalog: &[Movie], genre: &str) -> Vec<Movie> {
    let genre = genre.trim().to_lowercase();
    if genre.is_empty() || genre == "all" {
        return catalog.to_vec();
    }

    catalog
        .iter()
        .filter(|movie| movie.genre.to_lowercase().contains(&genre))
        .cloned()
        .collect()
}

/// Returns a sorted copy of the catalog; ties keep catalog order
pub fn sort_movies(catalog: &[Movie], key: SortKey) -> Vec<Movie> {
    let mut sorted = catalog.to_vec();

    match key {
        SortKey::Title => sorted.sort_by_cached_key(|movie| movie.title.to_lowercase()),
        SortKey::Rating => sorted.sort_by(|a, b| descending(a.rating(), b.rating())),
        SortKey::Popularity => sorted.sort_by(|a, b| descending(a.popularity, b.popularity)),
        SortKey::Year => sorted.sort_by(|a, b| b.release().cmp(&a.release())),
        SortKey::None => {}
    }

    sorted
}

/// Every distinct genre label in the catalog, alphabetically
pub fn unique_genres(catalog: &[Movie]) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|movie| movie.genres())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    b.unwrap_or(0.0).total_cmp(&a.unwrap_or(0.0))
}
