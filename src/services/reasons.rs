use crate::models::Movie;

/// Returned when no attribute comparison produced a reason
pub const FALLBACK_REASON: &str = "Content similarity";

/// Largest rating gap still described as "Similar rating"
const RATING_TOLERANCE: f64 = 0.5;

/// Largest release-year gap still described as "Similar time period"
const YEAR_TOLERANCE: i32 = 5;

/// Explains why `candidate` was matched to `query`.
///
/// Built from structured attributes only (genres, rating, release year),
/// independent of the term overlap score. Never empty.
pub fn explain_match(query: &Movie, candidate: &Movie) -> String {
    let mut reasons = Vec::new();

    let candidate_genres: Vec<&str> = candidate.genres().collect();
    let shared: Vec<&str> = query
        .genres()
        .filter(|genre| candidate_genres.contains(genre))
        .collect();
    if !shared.is_empty() {
        reasons.push(format!("Shared genres: {}", shared.join(", ")));
    }

    if let (Some(a), Some(b)) = (query.rating(), candidate.rating()) {
        if (a - b).abs() <= RATING_TOLERANCE {
            reasons.push("Similar rating".to_string());
        }
    }

    if let (Some(a), Some(b)) = (query.release_year(), candidate.release_year()) {
        if (a - b).abs() <= YEAR_TOLERANCE {
            reasons.push("Similar time period".to_string());
        }
    }

    if reasons.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        reasons.join(", ")
    }
}
