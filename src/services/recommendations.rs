use crate::{
    error::{AppError, AppResult},
    models::{Movie, MovieId, Recommendation, RecommendationRequest},
    services::{features::extract_features, reasons::explain_match, similarity::similarity},
};

/// Results returned by a similarity ranking when no count is given
pub const DEFAULT_SIMILAR_COUNT: usize = 5;

/// Results returned by the popular, top-rated and genre views when no count is given
pub const DEFAULT_RANKING_COUNT: usize = 10;

/// Ranks the catalog by content similarity to the requested movie
///
/// Failures are logged and reported as an empty list; use
/// [`try_recommend`] to see why a ranking came back empty.
pub fn recommend(request: &RecommendationRequest<'_>) -> Vec<Recommendation> {
    match try_recommend(request) {
        Ok(recommendations) => recommendations,
        Err(e) => {
            tracing::warn!(
                query_id = %request.query_id,
                error = %e,
                "Error generating recommendations"
            );
            Vec::new()
        }
    }
}

/// Convenience wrapper around [`recommend`] for a borrowed catalog
pub fn similar_movies(catalog: &[Movie], query_id: MovieId, count: usize) -> Vec<Recommendation> {
    recommend(&RecommendationRequest::new(catalog, query_id).with_count(count))
}

/// Ranks the catalog by content similarity, reporting a missing query movie
///
/// Every other movie is scored against the query's features, then sorted by
/// descending score. The sort is stable, so equal scores keep catalog order.
pub fn try_recommend(request: &RecommendationRequest<'_>) -> AppResult<Vec<Recommendation>> {
    let query = request
        .catalog
        .iter()
        .find(|movie| movie.id == request.query_id)
        .ok_or(AppError::NotFound(request.query_id))?;

    if request.count == 0 {
        return Ok(Vec::new());
    }

    let query_features = extract_features(query);

    let mut recommendations: Vec<Recommendation> = request
        .catalog
        .iter()
        .filter(|movie| movie.id != request.query_id)
        .map(|movie| Recommendation {
            score: similarity(&query_features, &extract_features(movie)),
            reasons: explain_match(query, movie),
            movie: movie.clone(),
        })
        .collect();

    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations.truncate(request.count);

    tracing::debug!(
        query_id = %request.query_id,
        candidates = request.catalog.len().saturating_sub(1),
        returned = recommendations.len(),
        "Generated recommendations"
    );

    Ok(recommendations)
}

/// Most popular movies first
pub fn popular(catalog: &[Movie], count: usize) -> Vec<Movie> {
    ranked_by(catalog.iter(), count, |movie| movie.popularity_score())
}

/// Highest rated movies first; unrated movies are left out
pub fn top_rated(catalog: &[Movie], count: usize) -> Vec<Movie> {
    ranked_by(
        catalog.iter().filter(|movie| movie.rating().is_some_and(|r| r > 0.0)),
        count,
        rating_key,
    )
}

/// Highest rated movies whose genre field contains `genre`, ignoring case
///
/// This is a substring match on the raw field, so `"fi"` matches
/// `"Science Fiction"`.
pub fn by_genre(catalog: &[Movie], genre: &str, count: usize) -> Vec<Movie> {
    let needle = genre.to_lowercase();
    ranked_by(
        catalog.iter().filter(|movie| {
            !movie.genre.is_empty() && movie.genre.to_lowercase().contains(&needle)
        }),
        count,
        rating_key,
    )
}

fn rating_key(movie: &Movie) -> f64 {
    movie.rating().unwrap_or(0.0)
}

/// Copies the movies into a new list sorted by descending `key`, keeping
/// catalog order among ties, and keeps the first `count`.
fn ranked_by<'a, I, F>(movies: I, count: usize, key: F) -> Vec<Movie>
where
    I: Iterator<Item = &'a Movie>,
    F: Fn(&Movie) -> f64,
{
    if count == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<&Movie> = movies.collect();
    ranked.sort_by(|a, b| key(b).total_cmp(&key(a)));
    ranked.into_iter().take(count).cloned().collect()
}
