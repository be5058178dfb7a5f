use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable prefix for all settings (e.g. `MOVIE_RECS_CATALOG_PATH`)
pub const ENV_PREFIX: &str = "MOVIE_RECS_";

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path to the CSV catalog
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Number of similar movies returned when no count is given
    #[serde(default = "default_similar_count")]
    pub similar_count: usize,

    /// Number of movies returned by the popular/top-rated/genre views
    #[serde(default = "default_ranking_count")]
    pub ranking_count: usize,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("dataset.csv")
}

fn default_similar_count() -> usize {
    crate::services::recommendations::DEFAULT_SIMILAR_COUNT
}

fn default_ranking_count() -> usize {
    crate::services::recommendations::DEFAULT_RANKING_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            similar_count: default_similar_count(),
            ranking_count: default_ranking_count(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
