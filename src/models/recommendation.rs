use serde::{Deserialize, Serialize};

use super::{Movie, MovieId};

/// A candidate movie scored against the selected one
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub movie: Movie,
    /// Term overlap score in `[0, 1]`
    pub score: f64,
    /// Human readable explanation, never empty
    pub reasons: String,
}

/// Input to a single similarity ranking
///
/// Borrows the catalog for the duration of the call only.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRequest<'a> {
    pub catalog: &'a [Movie],
    pub query_id: MovieId,
    pub count: usize,
}

impl<'a> RecommendationRequest<'a> {
    pub fn new(catalog: &'a [Movie], query_id: MovieId) -> Self {
        Self {
            catalog,
            query_id,
            count: crate::services::recommendations::DEFAULT_SIMILAR_COUNT,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}
