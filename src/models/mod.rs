pub mod movie;
pub mod recommendation;

pub use movie::{Movie, MovieId, ValidationError, DEFAULT_OVERVIEW_LENGTH};
pub use recommendation::{Recommendation, RecommendationRequest};
