//! Content-based movie recommendations.
//!
//! Movies are compared by the significant terms in their overview and genre
//! fields; each match carries a short explanation built from shared genres,
//! ratings and release years.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{AppError, AppResult};
pub use models::{Movie, MovieId, Recommendation, RecommendationRequest};
