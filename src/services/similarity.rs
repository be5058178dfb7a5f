use crate::services::features::FeatureSet;

/// Scores the term overlap of two feature sets in `[0, 1]`.
///
/// ```text
/// score = |A ∩ B| / (sqrt(tokens(A)) * sqrt(tokens(B)))
/// ```
///
/// The numerator counts distinct shared terms while the magnitudes come from
/// the raw token counts, repeats included. This is not cosine similarity: a
/// movie whose text repeats the same few words scores lower than one with
/// the same vocabulary said once. Kept as-is so rankings stay comparable
/// with existing results. The score cannot exceed 1 because the distinct
/// overlap is bounded by the smaller token count.
pub fn similarity(a: &FeatureSet, b: &FeatureSet) -> f64 {
    let magnitude_a = (a.token_count() as f64).sqrt();
    let magnitude_b = (b.token_count() as f64).sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    a.shared_terms(b) as f64 / (magnitude_a * magnitude_b)
}
