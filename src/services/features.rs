use std::collections::HashSet;

use crate::models::Movie;
use crate::services::text::tokenize;

/// Distinct terms describing a movie's content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet {
    terms: HashSet<String>,
    /// Number of tokens before duplicates were collapsed
    token_count: usize,
}

impl FeatureSet {
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let token_count = tokens.len();
        Self {
            terms: tokens.into_iter().collect(),
            token_count,
        }
    }

    pub fn terms(&self) -> &HashSet<String> {
        &self.terms
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn is_empty(&self) -> bool {
        self.token_count == 0
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Number of distinct terms present in both sets
    pub fn shared_terms(&self, other: &FeatureSet) -> usize {
        self.terms.intersection(&other.terms).count()
    }
}

/// Builds the feature set for a movie from its overview and genres
pub fn extract_features(movie: &Movie) -> FeatureSet {
    let combined = format!("{} {}", movie.overview, movie.genre.replace(',', " "));
    FeatureSet::from_tokens(tokenize(&combined))
}
